//! Builder for the immutable settings record.
//!
//! The host tool's registry pattern accumulates state; the settings record
//! instead goes through a `with_*` builder and is sealed by a validating
//! `build()`. Validation errors are collected and reported together.

use super::{DirMap, SiteSettings, TemplateEngine};
use crate::types::{ConfigDiagnostics, ConfigError};
use std::path::PathBuf;

/// Builder producing a validated [`SiteSettings`] record.
///
/// # Example
///
/// ```ignore
/// let settings = SiteSettings::builder()
///     .markdown_template_engine(TemplateEngine::Nunjucks)
///     .with_output("public")
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SiteSettingsBuilder {
    engine: TemplateEngine,
    dir: DirMap,
}

impl SiteSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine applied to Markdown files.
    pub fn markdown_template_engine(mut self, engine: TemplateEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Replace the whole directory map at once.
    pub fn with_dir(mut self, dir: DirMap) -> Self {
        self.dir = dir;
        self
    }

    /// Set the input directory role.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir.input = path.into();
        self
    }

    /// Set the data directory role (relative to input).
    pub fn with_data(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir.data = path.into();
        self
    }

    /// Set the includes directory role (relative to input).
    pub fn with_includes(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir.includes = path.into();
        self
    }

    /// Set the layouts directory role (relative to input).
    pub fn with_layouts(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir.layouts = path.into();
        self
    }

    /// Set the output directory role.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir.output = path.into();
        self
    }

    /// Validate and seal the record.
    ///
    /// Collects all violations of the five-role invariant before failing.
    pub fn build(self) -> Result<SiteSettings, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.dir.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)?;

        Ok(SiteSettings {
            markdown_template_engine: self.engine,
            dir: self.dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let settings = SiteSettings::builder().build().unwrap();
        assert_eq!(settings, SiteSettings::default());
    }

    #[test]
    fn test_with_methods() {
        let settings = SiteSettings::builder()
            .markdown_template_engine(TemplateEngine::Liquid)
            .with_input("site")
            .with_output("public")
            .build()
            .unwrap();

        assert_eq!(settings.markdown_template_engine, TemplateEngine::Liquid);
        assert_eq!(settings.dir.input, PathBuf::from("site"));
        assert_eq!(settings.dir.output, PathBuf::from("public"));
        // Untouched roles keep their defaults
        assert_eq!(settings.dir.layouts, PathBuf::from("_layouts"));
    }

    #[test]
    fn test_build_rejects_empty_role() {
        let err = SiteSettings::builder().with_input("").build().unwrap_err();
        match err {
            ConfigError::Diagnostics(diag) => {
                assert_eq!(diag.len(), 1);
                assert_eq!(diag.errors()[0].field.as_str(), "dir.input");
            }
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_build_collects_multiple_errors() {
        let err = SiteSettings::builder()
            .with_data("")
            .with_layouts("")
            .build()
            .unwrap_err();
        match err {
            ConfigError::Diagnostics(diag) => assert_eq!(diag.len(), 2),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }
}
