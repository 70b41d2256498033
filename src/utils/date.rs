//! UTC date utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for date handling,
//! sized for display-filter use cases (human-readable and ISO output).
//!
//! # Features
//!
//! - Zero external dependencies for date parsing
//! - ISO 8601 and `"Mon dd, yyyy"` formatting for templates
//! - Validation with clear error messages
//! - Leap year handling
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2023-01-05").unwrap();
//! assert_eq!(dt.format_short(), "Jan 05, 2023");
//!
//! let dt = DateTimeUtc::parse_short("Jan 5, 2023").unwrap();
//! assert_eq!(dt.to_iso_date(), "2023-01-05");
//! ```

use anyhow::{Result, bail};

/// Short month names used by human-readable formats.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        // Parse date part
        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        // Check for time part (RFC3339)
        let (hour, minute, second) = if bytes.len() >= 20 && bytes[10] == b'T' && bytes[19] == b'Z'
        {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
            )
        } else if bytes.len() == 10 {
            (0, 0, 0)
        } else {
            return None;
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    /// Parse from "Mon d, yyyy" format (e.g. "Jan 5, 2023" or "Jan 05, 2023").
    ///
    /// The time components are zeroed.
    pub fn parse_short(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();

        let month_name = parts.next()?;
        let month = month_index(month_name)?;

        let day = parts.next()?.strip_suffix(',')?;
        // Reject "5," written as "05x," etc.
        if day.is_empty() || day.len() > 2 {
            return None;
        }
        let day: u8 = day.parse().ok()?;

        let year: u16 = parts.next()?.parse().ok()?;

        // Trailing tokens mean the input was not "Mon d, yyyy"
        if parts.next().is_some() {
            return None;
        }

        let dt = Self::from_ymd(year, month, day);
        dt.validate().ok()?;
        Some(dt)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as `"Mon dd, yyyy"` (e.g. `"Jan 05, 2023"`).
    pub fn format_short(self) -> String {
        format!(
            "{} {:02}, {:04}",
            MONTHS[(self.month - 1) as usize],
            self.day,
            self.year
        )
    }

    /// Format the date part as ISO 8601: `YYYY-MM-DD`.
    pub fn to_iso_date(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Look up a short month name (case-sensitive, "Jan".."Dec").
#[inline]
fn month_index(name: &str) -> Option<u8> {
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|i| (i + 1) as u8)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
