//! `check` subcommand: validate the configuration and layout contract.
//!
//! The library itself never touches the filesystem; this opt-in command
//! verifies that the five directory roles resolve to usable paths before a
//! host build is attempted.

use super::Cli;
use super::common::{load_configuration, resolve_root};
use anyhow::Result;
use sitewire::{ConfigDiagnostics, ConfigError, FieldPath, SiteSettings, log};
use std::path::Path;

pub fn run(cli: &Cli) -> Result<()> {
    let root = resolve_root(cli)?;
    let (registry, settings) = load_configuration(cli, &root)?;

    let mut diag = ConfigDiagnostics::new();
    registry.validate(&mut diag);
    validate_layout(&settings, &root, &mut diag);

    diag.print_warnings();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    let (passthrough, aliases, shortcodes, extensions, filters) = registry.counts();
    log!(
        "check";
        "configuration ok: {passthrough} passthrough copies, {aliases} layout aliases, \
         {shortcodes} shortcodes, {extensions} data extensions, {filters} filters"
    );
    Ok(())
}

/// Validate the filesystem-layout contract for the five directory roles.
///
/// Missing input is fatal (the host cannot locate any content). Missing
/// data/includes/layouts directories are warnings: the host only fails once
/// a page actually references them.
fn validate_layout(settings: &SiteSettings, root: &Path, diag: &mut ConfigDiagnostics) {
    let dir = &settings.dir;

    let input = dir.input_dir(root);
    if !input.is_dir() {
        diag.error_with_hint(
            FieldPath::new("dir.input"),
            format!("input directory not found: {}", input.display()),
            "create the directory or point --root at the project",
        );
        return;
    }

    for (field, path) in [
        (FieldPath::new("dir.data"), dir.data_dir(root)),
        (FieldPath::new("dir.includes"), dir.includes_dir(root)),
        (FieldPath::new("dir.layouts"), dir.layouts_dir(root)),
    ] {
        if !path.is_dir() {
            diag.warn(field, format!("directory not found: {}", path.display()));
        }
    }

    let output = dir.output_dir(root);
    if output.exists() && !output.is_dir() {
        diag.error(
            FieldPath::new("dir.output"),
            format!("output path exists but is not a directory: {}", output.display()),
        );
    }
}
