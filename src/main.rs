//! sitewire CLI - inspect and validate the site build configuration.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    sitewire::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check => cli::check::run(&cli),
        Commands::Print { pretty } => cli::print::run(&cli, *pretty),
    }
}
