//! Date display filters.
//!
//! Two one-shot transformations, no caching, no retry. Both fail loudly on
//! input they cannot interpret.

use crate::registry::FilterInput;
use crate::utils::date::DateTimeUtc;
use anyhow::{Result, bail};

/// `simpleDate`: a UTC date value (or ISO-8601 string) as `"Mon dd, yyyy"`.
///
/// `2023-01-05` renders as `"Jan 05, 2023"`.
pub fn simple_date(input: FilterInput<'_>) -> Result<String> {
    let dt = match input {
        FilterInput::Date(dt) => dt,
        FilterInput::Text(s) => match DateTimeUtc::parse(s.trim()) {
            Some(dt) => dt,
            None => bail!("simpleDate: not an ISO-8601 date: `{s}`"),
        },
    };
    Ok(dt.format_short())
}

/// `courseDate`: a `"Mon d, yyyy"` string re-rendered as `"yyyy-MM-dd"`.
///
/// `"Jan 5, 2023"` renders as `"2023-01-05"`.
pub fn course_date(input: FilterInput<'_>) -> Result<String> {
    let dt = match input {
        FilterInput::Date(dt) => dt,
        FilterInput::Text(s) => match DateTimeUtc::parse_short(s.trim()) {
            Some(dt) => dt,
            None => bail!("courseDate: expected `Mon d, yyyy`, got `{s}`"),
        },
    };
    Ok(dt.to_iso_date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_date_from_iso_string() {
        assert_eq!(simple_date("2023-01-05".into()).unwrap(), "Jan 05, 2023");
    }

    #[test]
    fn test_simple_date_from_date_value() {
        let dt = DateTimeUtc::from_ymd(2023, 1, 5);
        assert_eq!(simple_date(dt.into()).unwrap(), "Jan 05, 2023");
    }

    #[test]
    fn test_simple_date_from_timestamp() {
        // Time-of-day is ignored for display; the date is read as UTC
        assert_eq!(
            simple_date("2023-01-05T23:59:59Z".into()).unwrap(),
            "Jan 05, 2023"
        );
    }

    #[test]
    fn test_simple_date_rejects_garbage() {
        assert!(simple_date("yesterday".into()).is_err());
        assert!(simple_date("2023-13-40".into()).is_err());
        assert!(simple_date("".into()).is_err());
    }

    #[test]
    fn test_course_date() {
        assert_eq!(course_date("Jan 5, 2023".into()).unwrap(), "2023-01-05");
        assert_eq!(course_date("Dec 31, 1999".into()).unwrap(), "1999-12-31");
    }

    #[test]
    fn test_course_date_accepts_date_value() {
        let dt = DateTimeUtc::from_ymd(2023, 1, 5);
        assert_eq!(course_date(dt.into()).unwrap(), "2023-01-05");
    }

    #[test]
    fn test_course_date_rejects_garbage() {
        assert!(course_date("January 5th".into()).is_err());
        assert!(course_date("2023-01-05".into()).is_err());
        assert!(course_date("".into()).is_err());
    }
}
