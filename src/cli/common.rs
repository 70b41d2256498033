//! Shared helpers for subcommands.

use super::Cli;
use anyhow::{Context, Result};
use sitewire::{BuildRegistry, SettingsOverrides, SiteSettings, configure, debug};
use std::path::{Path, PathBuf};

/// Resolve the project root (CLI flag or current directory).
pub fn resolve_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.root {
        Some(root) => Ok(root.clone()),
        None => std::env::current_dir().context("Failed to get current working directory"),
    }
}

/// Build the configuration: canonical declarations plus file overrides.
pub fn load_configuration(cli: &Cli, root: &Path) -> Result<(BuildRegistry, SiteSettings)> {
    let mut registry = BuildRegistry::new();
    let mut settings = configure(&mut registry)?;

    let overrides_path = if cli.config.is_absolute() {
        cli.config.clone()
    } else {
        root.join(&cli.config)
    };

    if let Some(overrides) = SettingsOverrides::load(&overrides_path)? {
        debug!("overrides"; "applying {}", overrides_path.display());
        settings = overrides.apply(settings);
    }

    Ok((registry, settings))
}
