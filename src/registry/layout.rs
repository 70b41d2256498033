//! Layout-path aliases.
//!
//! Pages declare layouts by short name (`layout: base`); the host resolves
//! the name through this table to the real template path. Keys are unique:
//! re-registering the identical mapping is a no-op, a different path for an
//! existing name is a conflict.

use crate::types::RegistryError;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Alias table mapping short layout names to template paths.
#[derive(Debug, Default)]
pub struct LayoutAliases {
    map: FxHashMap<String, PathBuf>,
}

impl LayoutAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alias.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let path = path.into();

        if let Some(existing) = self.map.get(&name) {
            if *existing == path {
                return Ok(());
            }
            return Err(RegistryError::AliasConflict {
                name,
                existing: existing.clone(),
                incoming: path,
            });
        }

        self.map.insert(name, path);
        Ok(())
    }

    /// Resolve an alias to its declared path.
    ///
    /// `None` means the host will surface its own missing-layout error.
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.map.get(name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over all registered aliases.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.map
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }
}
