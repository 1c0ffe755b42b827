//! filtering-listener: record-filtering listener CLI
//!
//! Reads consumer records as JSON lines from stdin, applies the configured
//! filter chain, and writes admitted records to stdout.

mod cli;

use std::io;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use filtering_listener::config::{self, ConfigService};
use filtering_listener::domain;
use filtering_listener::service::PipelineService;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        domain::logger::init(&config)?;
    }

    // Execute command
    match cli.command {
        Commands::Run { skip_filtering } => {
            config.skip_filtering |= skip_filtering;
            let service = PipelineService::new(config);
            let stdin = io::stdin();
            let stats = service.run(stdin.lock(), io::BufWriter::new(io::stdout()))?;
            if !cli.quiet {
                eprintln!(
                    "received={} admitted={} discarded={}",
                    stats.received, stats.admitted, stats.discarded
                );
            }
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("filtering-listener {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
