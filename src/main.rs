//! Linkmig: Shortcut Link Config Migration Tool
//!
//! An interactive command-line tool for migrating `.links.json` shortcut
//! configuration files to the current schema version.

use anyhow::Result;
use clap::Parser;

use linkmig::cli::{run_check, run_loop, run_single, Cli, Commands};
use linkmig::utils::print_banner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Check {
                path,
                schema_version,
            } => run_check(path, *schema_version),
        };
    }

    print_banner(env!("CARGO_PKG_VERSION"));

    match &cli.path {
        Some(path) => run_single(path, cli.schema_version, cli.yes),
        None => run_loop(cli.schema_version, cli.yes),
    }
}
