//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linkmig - Migrate .links.json shortcut configuration files to the current schema
#[derive(Parser, Debug)]
#[command(name = "linkmig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to migrate (must end in .links.json).
    /// If not provided, an interactive menu is shown.
    pub path: Option<PathBuf>,

    /// Write the migrated config without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Schema version to migrate to
    #[arg(long, default_value = "3")]
    pub schema_version: i64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report what a migration would change, without writing anything
    Check {
        /// Config file to inspect (must end in .links.json)
        path: PathBuf,

        /// Schema version to check against
        #[arg(long, default_value = "3")]
        schema_version: i64,
    },
}
