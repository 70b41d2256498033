//! `print` subcommand: emit the resolved settings record as JSON.

use super::Cli;
use super::common::{load_configuration, resolve_root};
use anyhow::Result;

pub fn run(cli: &Cli, pretty: bool) -> Result<()> {
    let root = resolve_root(cli)?;
    let (_, settings) = load_configuration(cli, &root)?;

    let json = if pretty {
        serde_json::to_string_pretty(&settings)?
    } else {
        serde_json::to_string(&settings)?
    };
    println!("{json}");
    Ok(())
}
