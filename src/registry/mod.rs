//! Host configuration registry.
//!
//! # Module Structure
//!
//! ```text
//! registry/
//! ├── passthrough    # Verbatim-copy rules
//! ├── layout         # Layout-path aliases
//! ├── shortcode      # Inline and paired shortcodes
//! ├── data           # Data-format extension parsers
//! ├── filter         # Display filters
//! └── mod.rs         # BuildRegistry (this file)
//! ```
//!
//! The host build tool passes a registry to [`crate::configure`] once before
//! any rendering; during its render passes it dispatches through the
//! invocation surface (`render_shortcode`, `parse_data`, `apply_filter`,
//! `resolve_layout`). All registered callbacks are pure and `Send + Sync`,
//! so a parallelizing host may call them concurrently without locks.

mod data;
mod filter;
mod layout;
mod passthrough;
mod shortcode;

pub use data::{DataExtensions, DataParser, DataValue};
pub use filter::{DateFilter, FilterInput, Filters};
pub use layout::LayoutAliases;
pub use passthrough::{PassthroughCopies, PassthroughCopy};
pub use shortcode::{InlineShortcode, PairedShortcode, Shortcodes};

use crate::types::{ConfigDiagnostics, RegistryError};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Accumulates all declarations the host tool consults during a build.
#[derive(Debug, Default)]
pub struct BuildRegistry {
    passthrough: PassthroughCopies,
    layouts: LayoutAliases,
    shortcodes: Shortcodes,
    data: DataExtensions,
    filters: Filters,
}

impl BuildRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // registration
    // ========================================================================

    /// Mark a source path for verbatim copy to the output.
    ///
    /// Idempotent: registering the same source twice keeps a single rule.
    pub fn add_passthrough_copy(&mut self, source: impl Into<PathBuf>) {
        self.passthrough.add(PassthroughCopy::new(source));
    }

    /// Like [`Self::add_passthrough_copy`], with an output rename.
    pub fn add_passthrough_copy_as(
        &mut self,
        source: impl Into<PathBuf>,
        output_as: impl Into<String>,
    ) {
        self.passthrough.add(PassthroughCopy::with_as(source, output_as));
    }

    /// Register a layout alias.
    pub fn add_layout_alias(
        &mut self,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Result<(), RegistryError> {
        self.layouts.add(name, path)
    }

    /// Register an inline shortcode.
    pub fn add_shortcode<F>(&mut self, name: impl Into<String>, f: F) -> Result<(), RegistryError>
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        self.shortcodes.add_inline(name, f)
    }

    /// Register a paired shortcode.
    pub fn add_paired_shortcode<F>(
        &mut self,
        name: impl Into<String>,
        f: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&str, &[String]) -> String + Send + Sync + 'static,
    {
        self.shortcodes.add_paired(name, f)
    }

    /// Register a data-format parser for a file extension.
    pub fn add_data_extension<F>(
        &mut self,
        extension: impl AsRef<str>,
        parser: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&str) -> Result<DataValue> + Send + Sync + 'static,
    {
        self.data.add(extension, parser)
    }

    /// Register a display filter.
    pub fn add_filter<F>(&mut self, name: impl Into<String>, f: F) -> Result<(), RegistryError>
    where
        F: for<'a> Fn(FilterInput<'a>) -> Result<String> + Send + Sync + 'static,
    {
        self.filters.add(name, f)
    }

    // ========================================================================
    // invocation surface (host-side)
    // ========================================================================

    /// Resolve a layout alias to its declared path.
    pub fn resolve_layout(&self, name: &str) -> Option<&Path> {
        self.layouts.resolve(name)
    }

    /// Expand an inline shortcode.
    pub fn render_shortcode(&self, name: &str, args: &[String]) -> Result<String, RegistryError> {
        self.shortcodes.render(name, args)
    }

    /// Expand a paired shortcode around rendered inner content.
    pub fn render_paired_shortcode(
        &self,
        name: &str,
        inner: &str,
        args: &[String],
    ) -> Result<String, RegistryError> {
        self.shortcodes.render_paired(name, inner, args)
    }

    /// Parse raw data-file content with the parser registered for `extension`.
    pub fn parse_data(&self, extension: &str, raw: &str) -> Result<DataValue> {
        self.data.parse(extension, raw)
    }

    /// Apply a display filter to a value.
    pub fn apply_filter(&self, name: &str, input: FilterInput<'_>) -> Result<String> {
        self.filters.apply(name, input)
    }

    // ========================================================================
    // introspection
    // ========================================================================

    /// All registered passthrough rules, in registration order.
    pub fn passthrough_copies(&self) -> &[PassthroughCopy] {
        self.passthrough.rules()
    }

    /// All registered layout aliases.
    pub fn layout_aliases(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.layouts.iter()
    }

    /// Check whether a data parser is registered for `extension`.
    pub fn has_data_extension(&self, extension: &str) -> bool {
        self.data.contains(extension)
    }

    /// Summary counts for logging: (passthrough, aliases, shortcodes, extensions, filters).
    pub fn counts(&self) -> (usize, usize, usize, usize, usize) {
        (
            self.passthrough.len(),
            self.layouts.len(),
            self.shortcodes.inline_names().count() + self.shortcodes.paired_names().count(),
            self.data.len(),
            self.filters.len(),
        )
    }

    /// Validate the accumulated declarations (path safety, output conflicts).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.passthrough.validate(diag);
    }
}

// ============================================================================
// tests
// ============================================================================
