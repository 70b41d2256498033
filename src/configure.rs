//! The canonical site configuration.
//!
//! The host build tool calls [`configure`] exactly once before rendering.
//! It registers every declaration on the provided registry and returns the
//! immutable settings record the host reads at startup.

use crate::helpers;
use crate::registry::BuildRegistry;
use crate::settings::{SiteSettings, TemplateEngine};
use anyhow::Result;

/// Register all declarations and produce the settings record.
///
/// Declarations:
/// - passthrough copies for the static `images/` and `css/` trees
/// - layout aliases `base`, `page`, `page-hero`
/// - shortcodes `clientTag` (inline) and `pairedClient` (paired)
/// - the `yaml` data-format extension
/// - filters `simpleDate` and `courseDate`
pub fn configure(registry: &mut BuildRegistry) -> Result<SiteSettings> {
    // Static assets copied verbatim, bypassing templating
    registry.add_passthrough_copy("_site/images");
    registry.add_passthrough_copy("_site/css");

    // Short names for long layout paths
    registry.add_layout_alias("base", "_pageTemplates/base.njk")?;
    registry.add_layout_alias("page", "_pageTemplates/page.njk")?;
    registry.add_layout_alias("page-hero", "_pageTemplates/page-hero.njk")?;

    registry.add_shortcode("clientTag", |args: &[String]| {
        let name = args.first().map(String::as_str).unwrap_or_default();
        helpers::client_tag(name)
    })?;

    registry.add_paired_shortcode("pairedClient", |inner: &str, args: &[String]| {
        let name = args.first().map(String::as_str).unwrap_or_default();
        helpers::paired_client(inner, name)
    })?;

    // YAML data files alongside the host's native format
    registry.add_data_extension("yaml", helpers::yaml_data)?;

    registry.add_filter("simpleDate", helpers::simple_date)?;
    registry.add_filter("courseDate", helpers::course_date)?;

    let settings = SiteSettings::builder()
        .markdown_template_engine(TemplateEngine::Nunjucks)
        .build()?;
    Ok(settings)
}

// ============================================================================
// tests
// ============================================================================
