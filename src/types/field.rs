//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for settings field paths.
///
/// Used by validation code so diagnostics always name the exact field
/// they refer to (e.g. `dir.input`, `passthrough`).
///
/// # Example
///
/// ```ignore
/// diag.error(FieldPath::new("dir.output"), "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
