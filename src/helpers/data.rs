//! YAML data-format parser.

use crate::registry::DataValue;
use anyhow::Result;

/// Parse YAML into the host-native structured value.
///
/// A YAML document yields the same key/value structure an equivalent JSON
/// data file would; parse errors propagate unmodified and make that file
/// unbuildable for the host.
pub fn yaml_data(raw: &str) -> Result<DataValue> {
    let value: DataValue = serde_yaml::from_str(raw)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_matches_native_structure() {
        let yaml = "title: Clients\ncount: 3\nfeatured:\n  - acme\n  - globex\n";
        let native = json!({
            "title": "Clients",
            "count": 3,
            "featured": ["acme", "globex"],
        });
        assert_eq!(yaml_data(yaml).unwrap(), native);
    }

    #[test]
    fn test_yaml_nested_mappings() {
        let yaml = "client:\n  name: acme\n  active: true\n";
        assert_eq!(
            yaml_data(yaml).unwrap(),
            json!({"client": {"name": "acme", "active": true}})
        );
    }

    #[test]
    fn test_yaml_scalar_document() {
        assert_eq!(yaml_data("42\n").unwrap(), json!(42));
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        assert!(yaml_data("key: [unclosed\n").is_err());
    }
}
