//! Rowing Analyzer CLI
//!
//! Command-line interface for the rowing workout analysis demo.

use anyhow::Result;
use clap::Parser;
use rowing_analyzer::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the analysis
    cli.run()?;

    Ok(())
}
