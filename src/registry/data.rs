//! Data-format extension registration.
//!
//! The host tool loads data files in its native format by default; a
//! registered parser takes over for files with the matching extension.
//! Parsed values use the host-native JSON value model with preserved key
//! order, so custom formats and native files produce identical structures.

use crate::types::RegistryError;
use anyhow::Result;
use rustc_hash::FxHashMap;

/// Structured value produced by data parsers (host-native shape).
pub type DataValue = serde_json::Value;

/// Parser for a registered data-file extension.
///
/// Malformed input propagates the parser's own error unmodified.
pub type DataParser = Box<dyn Fn(&str) -> Result<DataValue> + Send + Sync>;

/// Extension-keyed parser store.
#[derive(Default)]
pub struct DataExtensions {
    map: FxHashMap<String, DataParser>,
}

impl DataExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parser for a file extension (leading dot optional).
    pub fn add<F>(&mut self, extension: impl AsRef<str>, parser: F) -> Result<(), RegistryError>
    where
        F: Fn(&str) -> Result<DataValue> + Send + Sync + 'static,
    {
        let ext = normalize_extension(extension.as_ref());
        if self.map.contains_key(&ext) {
            return Err(RegistryError::DataExtensionConflict(ext));
        }
        self.map.insert(ext, Box::new(parser));
        Ok(())
    }

    /// Parse raw file content with the parser registered for `extension`.
    pub fn parse(&self, extension: &str, raw: &str) -> Result<DataValue> {
        let ext = normalize_extension(extension);
        let parser = self
            .map
            .get(&ext)
            .ok_or(RegistryError::UnknownDataExtension(ext))?;
        parser(raw)
    }

    /// Check whether a parser is registered for `extension`.
    pub fn contains(&self, extension: &str) -> bool {
        self.map.contains_key(&normalize_extension(extension))
    }

    /// All registered extensions.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl std::fmt::Debug for DataExtensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataExtensions")
            .field("extensions", &self.map.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Lowercase, no leading dot: `.YAML` and `yaml` address the same parser.
fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_with_registered_parser() {
        let mut extensions = DataExtensions::new();
        extensions
            .add("json", |raw: &str| Ok(serde_json::from_str(raw)?))
            .unwrap();

        let value = extensions.parse("json", r#"{"a": 1}"#).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_extension_normalization() {
        let mut extensions = DataExtensions::new();
        extensions
            .add(".YAML", |_: &str| Ok(DataValue::Null))
            .unwrap();
        assert!(extensions.contains("yaml"));
        assert!(extensions.parse("yaml", "").is_ok());
    }

    #[test]
    fn test_unknown_extension_is_error() {
        let extensions = DataExtensions::new();
        let err = extensions.parse("toml", "").unwrap_err();
        assert!(err.to_string().contains("toml"));
    }

    #[test]
    fn test_duplicate_extension_is_conflict() {
        let mut extensions = DataExtensions::new();
        extensions.add("yaml", |_: &str| Ok(DataValue::Null)).unwrap();
        assert!(matches!(
            extensions.add("yaml", |_: &str| Ok(DataValue::Null)),
            Err(RegistryError::DataExtensionConflict(_))
        ));
    }

    #[test]
    fn test_parser_error_propagates() {
        let mut extensions = DataExtensions::new();
        extensions
            .add("json", |raw: &str| Ok(serde_json::from_str(raw)?))
            .unwrap();
        assert!(extensions.parse("json", "{not json").is_err());
    }
}
