//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitewire build-configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Overrides file path (default: sitewire.toml)
    #[arg(short = 'C', long, default_value = "sitewire.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Project root directory (default: current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the configuration and the directory-layout contract
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved settings record as JSON
    #[command(visible_alias = "p")]
    Print {
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}
