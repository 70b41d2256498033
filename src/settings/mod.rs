//! Immutable settings record consumed by the host build tool.
//!
//! # Module Structure
//!
//! ```text
//! settings/
//! ├── builder      # SiteSettingsBuilder (with_* methods, validating build())
//! ├── dir          # DirMap (five directory roles)
//! ├── overrides    # Optional sitewire.toml overrides
//! └── mod.rs       # SiteSettings, TemplateEngine (this file)
//! ```
//!
//! The host tool reads the record exactly once at startup; nothing here is
//! mutated afterwards. Serialization uses the host's camelCase shape:
//!
//! ```json
//! {
//!   "markdownTemplateEngine": "njk",
//!   "dir": { "input": "_site", "data": "_data", "includes": "_includes",
//!            "layouts": "_layouts", "output": "dist" }
//! }
//! ```

mod builder;
mod dir;
mod overrides;

pub use builder::SiteSettingsBuilder;
pub use dir::DirMap;
pub use overrides::SettingsOverrides;

use crate::types::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// template engine
// ============================================================================

/// Template engine used to post-process Markdown files.
///
/// Serializes to the short name the host tool expects (`"njk"` etc.).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateEngine {
    /// Nunjucks templates.
    #[default]
    #[serde(rename = "njk")]
    Nunjucks,

    /// Liquid templates.
    #[serde(rename = "liquid")]
    Liquid,

    /// Handlebars templates.
    #[serde(rename = "hbs")]
    Handlebars,
}

impl TemplateEngine {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nunjucks => "njk",
            Self::Liquid => "liquid",
            Self::Handlebars => "hbs",
        }
    }
}

impl fmt::Display for TemplateEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateEngine {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "njk" | "nunjucks" => Ok(Self::Nunjucks),
            "liquid" => Ok(Self::Liquid),
            "hbs" | "handlebars" => Ok(Self::Handlebars),
            other => Err(ConfigError::Validation(format!(
                "unknown template engine `{other}` (expected njk, liquid or hbs)"
            ))),
        }
    }
}

// ============================================================================
// settings record
// ============================================================================

/// The immutable settings record returned to the host tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Engine applied to Markdown files after Markdown processing.
    pub markdown_template_engine: TemplateEngine,

    /// The five directory roles.
    pub dir: DirMap,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            markdown_template_engine: TemplateEngine::default(),
            dir: DirMap::default(),
        }
    }
}

impl SiteSettings {
    /// Start building a settings record from the canonical defaults.
    pub fn builder() -> SiteSettingsBuilder {
        SiteSettingsBuilder::new()
    }
}

// ============================================================================
// tests
// ============================================================================
