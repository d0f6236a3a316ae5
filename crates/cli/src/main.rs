//! Pairvault CLI - run vault pair scenarios on a mainnet fork.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_operation, run_profitable_harvest};

const DEFAULT_LOG_FILTER: &str = "pairvault=info";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Operation(args) => {
            run_operation(&args, cli.format).await?;
        }
        Commands::ProfitableHarvest(args) => {
            run_profitable_harvest(&args, cli.format).await?;
        }
    }

    Ok(())
}
