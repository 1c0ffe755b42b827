//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Record-filtering listener for consumer pipelines
#[derive(Parser)]
#[command(
    name = "filtering-listener",
    version,
    about = "Record-filtering listener for consumer pipelines",
    long_about = "Reads consumer records as JSON lines from stdin, drops the ones matched \
                  by the configured filters, and writes the rest to stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Filter records from stdin to stdout (alias: filter)
    #[command(alias = "filter")]
    Run {
        /// Admit every record without consulting filters
        #[arg(long)]
        skip_filtering: bool,
    },
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}
