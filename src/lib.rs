//! sitewire - typed build-configuration wiring for static-site build tools.
//!
//! A host build tool hands a [`BuildRegistry`] to [`configure`] once at
//! startup; the call registers passthrough asset copies, layout aliases,
//! shortcodes, a YAML data-format parser and date filters, then returns an
//! immutable [`SiteSettings`] record naming the Markdown template engine and
//! the five directory roles (input, data, includes, layouts, output).
//!
//! ```ignore
//! let mut registry = BuildRegistry::new();
//! let settings = sitewire::configure(&mut registry)?;
//!
//! assert_eq!(settings.markdown_template_engine.as_str(), "njk");
//! let html = registry.render_shortcode("clientTag", &["acme".into()])?;
//! ```
//!
//! The crate never drives a build itself; registered callbacks are pure and
//! `Send + Sync`, invoked by the host during its own render passes.

mod configure;
pub mod helpers;
pub mod logger;
pub mod registry;
pub mod settings;
pub mod types;
pub mod utils;

pub use configure::configure;
pub use registry::{BuildRegistry, DataValue, FilterInput, PassthroughCopy};
pub use settings::{
    DirMap, SettingsOverrides, SiteSettings, SiteSettingsBuilder, TemplateEngine,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, RegistryError};
