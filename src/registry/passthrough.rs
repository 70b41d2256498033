//! Passthrough copy rules.
//!
//! A passthrough rule marks a source directory (or file) for verbatim copy
//! into the output, bypassing template processing. Two forms:
//!
//! ```text
//! "_site/images"                          # → output/images/
//! { dir = "vendor/static", as = "lib" }   # → output/lib/
//! ```
//!
//! Registration is idempotent on the source path; the actual copying is the
//! host tool's job.

use crate::types::{ConfigDiagnostics, FieldPath};
use crate::utils::path::normalize_rel;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// A single verbatim-copy rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PassthroughCopy {
    /// Simple path string.
    Simple(PathBuf),
    /// Full format with output rename.
    Full {
        /// Source path (relative to project root).
        dir: PathBuf,
        /// Output directory name (defaults to dir's basename).
        #[serde(rename = "as")]
        output_as: Option<String>,
    },
}

impl PassthroughCopy {
    /// Create a simple rule; `./` prefixes are normalized away.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self::Simple(normalize_rel(&source.into()))
    }

    /// Create a rule with an output rename.
    pub fn with_as(source: impl Into<PathBuf>, output_as: impl Into<String>) -> Self {
        Self::Full {
            dir: normalize_rel(&source.into()),
            output_as: Some(output_as.into()),
        }
    }

    /// Get the source path.
    pub fn source(&self) -> &Path {
        match self {
            Self::Simple(p) => p,
            Self::Full { dir, .. } => dir,
        }
    }

    /// Get the output directory name.
    pub fn output_name(&self) -> &str {
        match self {
            Self::Simple(p) => p.file_name().and_then(|n| n.to_str()).unwrap_or("assets"),
            Self::Full { dir, output_as } => output_as
                .as_deref()
                .unwrap_or_else(|| dir.file_name().and_then(|n| n.to_str()).unwrap_or("assets")),
        }
    }

    /// Check the source path for unsafe components (`..` or absolute).
    fn validate_path_safety(
        &self,
        idx: usize,
        total: usize,
        field: FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        for comp in self.source().components() {
            let msg = match comp {
                Component::ParentDir => Some("parent directory '..' not allowed"),
                Component::Prefix(_) | Component::RootDir => Some("absolute paths not allowed"),
                _ => None,
            };
            if let Some(reason) = msg {
                // Only show index if there are multiple entries
                let prefix = if total > 1 {
                    format!("[{idx}] ")
                } else {
                    String::new()
                };
                diag.error(
                    field,
                    format!("{prefix}path '{}': {reason}", self.source().display()),
                );
            }
        }
    }
}

// ============================================================================
// rule set
// ============================================================================

/// Ordered, deduplicated set of passthrough rules.
#[derive(Debug, Default)]
pub struct PassthroughCopies {
    rules: Vec<PassthroughCopy>,
}

impl PassthroughCopies {
    const FIELD: FieldPath = FieldPath::new("passthrough");

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule; registering the same source twice keeps a single rule.
    pub fn add(&mut self, rule: PassthroughCopy) {
        if self.rules.iter().any(|r| r.source() == rule.source()) {
            return;
        }
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[PassthroughCopy] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check if a source path is covered by any rule.
    pub fn contains_source(&self, source: &Path) -> bool {
        self.rules.iter().any(|r| source.starts_with(r.source()))
    }

    /// Validate path safety and output-name conflicts across all rules.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let total = self.rules.len();
        let mut seen: FxHashMap<&str, &Path> = FxHashMap::default();

        for (idx, rule) in self.rules.iter().enumerate() {
            rule.validate_path_safety(idx, total, Self::FIELD, diag);

            let name = rule.output_name();
            if let Some(prev) = seen.get(name) {
                diag.error(
                    Self::FIELD,
                    format!(
                        "[{idx}] output conflict: '{}' and '{}' both output to '/{name}'",
                        rule.source().display(),
                        prev.display(),
                    ),
                );
            } else {
                seen.insert(name, rule.source());
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
