//! Display filter registration.
//!
//! Filters are applied in templates with `| name`. Date filters accept
//! either a typed date value or a raw string (front-matter dates arrive
//! both ways) and must fail loudly on input they cannot interpret - date
//! parsing is too ambiguous to guess.

use crate::types::RegistryError;
use crate::utils::date::DateTimeUtc;
use anyhow::Result;
use rustc_hash::FxHashMap;

/// Filter input: a typed date value or a raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterInput<'a> {
    /// An already-parsed UTC date value.
    Date(DateTimeUtc),
    /// A raw string from template data.
    Text(&'a str),
}

impl<'a> From<&'a str> for FilterInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl From<DateTimeUtc> for FilterInput<'_> {
    fn from(dt: DateTimeUtc) -> Self {
        Self::Date(dt)
    }
}

/// A registered display filter.
pub type DateFilter = Box<dyn for<'a> Fn(FilterInput<'a>) -> Result<String> + Send + Sync>;

/// Name-keyed filter store.
#[derive(Default)]
pub struct Filters {
    map: FxHashMap<String, DateFilter>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter.
    pub fn add<F>(&mut self, name: impl Into<String>, f: F) -> Result<(), RegistryError>
    where
        F: for<'a> Fn(FilterInput<'a>) -> Result<String> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.map.contains_key(&name) {
            return Err(RegistryError::FilterConflict(name));
        }
        self.map.insert(name, Box::new(f));
        Ok(())
    }

    /// Apply a filter to a value.
    pub fn apply(&self, name: &str, input: FilterInput<'_>) -> Result<String> {
        let f = self
            .map
            .get(name)
            .ok_or_else(|| RegistryError::UnknownFilter(name.to_string()))?;
        f(input)
    }

    /// Names of all registered filters.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl std::fmt::Debug for Filters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filters")
            .field("names", &self.map.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(input: FilterInput<'_>) -> Result<String> {
        match input {
            FilterInput::Text(s) => Ok(s.to_uppercase()),
            FilterInput::Date(dt) => Ok(dt.to_iso_date()),
        }
    }

    fn noop(_: FilterInput<'_>) -> Result<String> {
        Ok(String::new())
    }

    #[test]
    fn test_apply_registered_filter() {
        let mut filters = Filters::new();
        filters.add("shout", shout).unwrap();

        assert_eq!(filters.apply("shout", "hi".into()).unwrap(), "HI");
        assert_eq!(
            filters
                .apply("shout", DateTimeUtc::from_ymd(2023, 1, 5).into())
                .unwrap(),
            "2023-01-05"
        );
    }

    #[test]
    fn test_unknown_filter_is_error() {
        let filters = Filters::new();
        let err = filters.apply("missing", "x".into()).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_duplicate_filter_is_conflict() {
        let mut filters = Filters::new();
        filters.add("d", noop).unwrap();
        assert!(matches!(
            filters.add("d", noop),
            Err(RegistryError::FilterConflict(_))
        ));
    }
}
