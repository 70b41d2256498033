//! Directory-role mapping for the site layout.
//!
//! The host build tool reads five path roles from the settings record:
//!
//! | Role       | Relative to  | Purpose                              |
//! |------------|--------------|--------------------------------------|
//! | `input`    | project root | Source pages and templates           |
//! | `data`     | `input`      | Site-wide data files                 |
//! | `includes` | `input`      | Reusable template snippets           |
//! | `layouts`  | `input`      | Page layout templates                |
//! | `output`   | project root | Generated site                       |
//!
//! All five must be present and non-empty or the host cannot locate content.

use crate::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The five directory roles consumed by the host tool at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirMap {
    /// Source directory for pages and templates.
    pub input: PathBuf,

    /// Site-wide data files, relative to `input`.
    pub data: PathBuf,

    /// Reusable template snippets, relative to `input`.
    pub includes: PathBuf,

    /// Page layout templates, relative to `input`.
    pub layouts: PathBuf,

    /// Output directory for the generated site.
    pub output: PathBuf,
}

impl Default for DirMap {
    fn default() -> Self {
        Self {
            input: "_site".into(),
            data: "_data".into(),
            includes: "_includes".into(),
            layouts: "_layouts".into(),
            output: "dist".into(),
        }
    }
}

impl DirMap {
    /// Resolved data directory under the project root.
    pub fn data_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.input).join(&self.data)
    }

    /// Resolved includes directory under the project root.
    pub fn includes_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.input).join(&self.includes)
    }

    /// Resolved layouts directory under the project root.
    pub fn layouts_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.input).join(&self.layouts)
    }

    /// Resolved input directory under the project root.
    pub fn input_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.input)
    }

    /// Resolved output directory under the project root.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }

    /// Validate the five-role invariant.
    ///
    /// Only checks the record itself; whether the directories exist on disk
    /// is the caller's concern (see the `check` subcommand).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::check_role(&self.input, FieldPath::new("dir.input"), diag);
        Self::check_role(&self.data, FieldPath::new("dir.data"), diag);
        Self::check_role(&self.includes, FieldPath::new("dir.includes"), diag);
        Self::check_role(&self.layouts, FieldPath::new("dir.layouts"), diag);
        Self::check_role(&self.output, FieldPath::new("dir.output"), diag);
    }

    fn check_role(path: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if path.as_os_str().is_empty() {
            diag.error(field, "must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let dir = DirMap::default();
        assert_eq!(dir.input, PathBuf::from("_site"));
        assert_eq!(dir.data, PathBuf::from("_data"));
        assert_eq!(dir.includes, PathBuf::from("_includes"));
        assert_eq!(dir.layouts, PathBuf::from("_layouts"));
        assert_eq!(dir.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_resolved_dirs_nest_under_input() {
        let dir = DirMap::default();
        let root = Path::new("/project");
        assert_eq!(dir.input_dir(root), PathBuf::from("/project/_site"));
        assert_eq!(dir.data_dir(root), PathBuf::from("/project/_site/_data"));
        assert_eq!(
            dir.includes_dir(root),
            PathBuf::from("/project/_site/_includes")
        );
        assert_eq!(
            dir.layouts_dir(root),
            PathBuf::from("/project/_site/_layouts")
        );
        assert_eq!(dir.output_dir(root), PathBuf::from("/project/dist"));
    }

    #[test]
    fn test_validate_default_ok() {
        let mut diag = ConfigDiagnostics::new();
        DirMap::default().validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_empty_role() {
        let dir = DirMap {
            output: PathBuf::new(),
            ..DirMap::default()
        };
        let mut diag = ConfigDiagnostics::new();
        dir.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "dir.output");
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let dir = DirMap {
            input: PathBuf::new(),
            data: PathBuf::new(),
            ..DirMap::default()
        };
        let mut diag = ConfigDiagnostics::new();
        dir.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
