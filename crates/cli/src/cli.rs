//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pairvault_harness::config::{
    DEFAULT_STRATEGY_ARTIFACT, DEFAULT_VAULT_ARTIFACT, ETH_RPC_URL,
};
use pairvault_harness::{ArtifactConfig, ForkConfig, HarnessConfig, ProfitSource};

/// Pairvault - run vault pair scenarios on a mainnet fork
#[derive(Parser, Debug)]
#[command(name = "pairvault")]
#[command(about = "Deploy a USDT/USDC vault pair with a shared strategy on a mainnet fork and run a scenario", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deposit, harvest, tend and withdraw
    #[command(name = "operation")]
    Operation(RunArgs),
    /// Deposit, harvest, inject profit and harvest again
    #[command(name = "profitable-harvest")]
    ProfitableHarvest(ProfitableHarvestArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Mainnet RPC URL to fork (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,

    /// Block to fork at (default: latest)
    #[arg(long, env = "FORK_BLOCK_NUMBER")]
    pub fork_block: Option<u64>,

    /// Vault build artifact
    #[arg(long, env = "VAULT_ARTIFACT", default_value = DEFAULT_VAULT_ARTIFACT)]
    pub vault_artifact: PathBuf,

    /// Strategy build artifact
    #[arg(long, env = "STRATEGY_ARTIFACT", default_value = DEFAULT_STRATEGY_ARTIFACT)]
    pub strategy_artifact: PathBuf,
}

impl RunArgs {
    /// Harness configuration from the flags. Anvil tuning still comes from
    /// the `ANVIL_*` environment variables.
    pub fn harness_config(&self) -> pairvault_harness::Result<HarnessConfig> {
        let mut fork = ForkConfig::from_lookup(|name: &str| {
            if name == ETH_RPC_URL {
                Some(self.rpc_url.clone())
            } else {
                std::env::var(name).ok()
            }
        })?;
        fork.fork_block = self.fork_block;

        Ok(HarnessConfig {
            fork,
            artifacts: ArtifactConfig {
                vault: self.vault_artifact.clone(),
                strategy: self.strategy_artifact.clone(),
            },
        })
    }
}

#[derive(Args, Debug)]
pub struct ProfitableHarvestArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Where the profit comes from
    #[arg(long, default_value = "trading-fees")]
    pub profit_source: ProfitSourceArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfitSourceArg {
    /// Swap through Uniswap V2 so the pools collect fees
    #[default]
    TradingFees,
    /// Governance transfers 1% of each deposit to the strategy
    Transfer,
}

impl From<ProfitSourceArg> for ProfitSource {
    fn from(arg: ProfitSourceArg) -> Self {
        match arg {
            ProfitSourceArg::TradingFees => ProfitSource::TradingFees,
            ProfitSourceArg::Transfer => ProfitSource::Transfer,
        }
    }
}
