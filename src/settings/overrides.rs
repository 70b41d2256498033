//! Optional `sitewire.toml` overrides.
//!
//! Projects that deviate from the canonical directory convention can drop a
//! small TOML file next to their content:
//!
//! ```toml
//! markdown_template_engine = "njk"
//!
//! [dir]
//! input = "site"
//! output = "public"
//! ```
//!
//! Unknown fields are collected during parsing and reported as a grouped
//! warning rather than silently ignored.

use super::{DirMap, SiteSettings, TemplateEngine};
use crate::log;
use crate::types::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Partial settings loaded from an overrides file.
///
/// Every field is optional; absent fields keep the canonical value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsOverrides {
    /// Engine override for Markdown post-processing.
    pub markdown_template_engine: Option<TemplateEngine>,

    /// Directory-role overrides.
    pub dir: DirOverrides,
}

/// Per-role directory overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirOverrides {
    pub input: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub includes: Option<PathBuf>,
    pub layouts: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl SettingsOverrides {
    /// Load overrides from a file path, if it exists.
    ///
    /// Returns `Ok(None)` when the file is absent - overrides are optional.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (overrides, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(Some(overrides))
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let overrides = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((overrides, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Apply the overrides on top of a settings record.
    pub fn apply(&self, settings: SiteSettings) -> SiteSettings {
        let mut engine = settings.markdown_template_engine;
        update_option(&mut engine, self.markdown_template_engine.as_ref());

        SiteSettings {
            markdown_template_engine: engine,
            dir: self.dir.apply(settings.dir),
        }
    }

    /// True when no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.markdown_template_engine.is_none() && self.dir.is_empty()
    }
}

impl DirOverrides {
    fn apply(&self, mut dir: DirMap) -> DirMap {
        update_option(&mut dir.input, self.input.as_ref());
        update_option(&mut dir.data, self.data.as_ref());
        update_option(&mut dir.includes, self.includes.as_ref());
        update_option(&mut dir.layouts, self.layouts.as_ref());
        update_option(&mut dir.output, self.output.as_ref());
        dir
    }

    fn is_empty(&self) -> bool {
        self.input.is_none()
            && self.data.is_none()
            && self.includes.is_none()
            && self.layouts.is_none()
            && self.output.is_none()
    }
}

/// Update a settings value if an override is provided.
fn update_option<T: Clone>(target: &mut T, source: Option<&T>) {
    if let Some(value) = source {
        *target = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let (overrides, ignored) = SettingsOverrides::parse_with_ignored("").unwrap();
        assert!(overrides.is_empty());
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_parse_dir_overrides() {
        let (overrides, ignored) = SettingsOverrides::parse_with_ignored(
            "[dir]\ninput = \"site\"\noutput = \"public\"\n",
        )
        .unwrap();
        assert!(ignored.is_empty());
        assert_eq!(overrides.dir.input, Some(PathBuf::from("site")));
        assert_eq!(overrides.dir.output, Some(PathBuf::from("public")));
        assert!(overrides.dir.layouts.is_none());
    }

    #[test]
    fn test_parse_engine_override() {
        let (overrides, _) =
            SettingsOverrides::parse_with_ignored("markdown_template_engine = \"liquid\"\n")
                .unwrap();
        assert_eq!(
            overrides.markdown_template_engine,
            Some(TemplateEngine::Liquid)
        );
    }

    #[test]
    fn test_unknown_fields_detected() {
        let (overrides, ignored) = SettingsOverrides::parse_with_ignored(
            "[dir]\ninput = \"site\"\n[unknown_section]\nfield = \"value\"\n",
        )
        .unwrap();
        assert_eq!(overrides.dir.input, Some(PathBuf::from("site")));
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = SettingsOverrides::parse_with_ignored("[dir\ninput = \"site\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let (overrides, _) = SettingsOverrides::parse_with_ignored(
            "markdown_template_engine = \"hbs\"\n[dir]\noutput = \"public\"\n",
        )
        .unwrap();

        let settings = overrides.apply(SiteSettings::default());
        assert_eq!(
            settings.markdown_template_engine,
            TemplateEngine::Handlebars
        );
        assert_eq!(settings.dir.output, PathBuf::from("public"));
        // Untouched roles keep canonical values
        assert_eq!(settings.dir.input, PathBuf::from("_site"));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitewire.toml");
        assert!(SettingsOverrides::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitewire.toml");
        fs::write(&path, "[dir]\ninput = \"site\"\n").unwrap();

        let overrides = SettingsOverrides::load(&path).unwrap().unwrap();
        assert_eq!(overrides.dir.input, Some(PathBuf::from("site")));
    }
}
