//! Harness configuration.
//!
//! Everything is read from environment variables. The `from_lookup`
//! constructors take the lookup as a closure so tests can feed values without
//! touching the process environment.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{HarnessError, Result};

pub const ETH_RPC_URL: &str = "ETH_RPC_URL";
pub const FORK_BLOCK_NUMBER: &str = "FORK_BLOCK_NUMBER";
pub const ANVIL_COMPUTE_UNITS_PER_SECOND: &str = "ANVIL_COMPUTE_UNITS_PER_SECOND";
pub const ANVIL_RETRIES: &str = "ANVIL_RETRIES";
pub const ANVIL_FORK_RETRY_BACKOFF: &str = "ANVIL_FORK_RETRY_BACKOFF";
pub const ANVIL_TIMEOUT: &str = "ANVIL_TIMEOUT";
pub const VAULT_ARTIFACT: &str = "VAULT_ARTIFACT";
pub const STRATEGY_ARTIFACT: &str = "STRATEGY_ARTIFACT";

pub const DEFAULT_VAULT_ARTIFACT: &str = "artifacts/Vault.json";
pub const DEFAULT_STRATEGY_ARTIFACT: &str = "artifacts/Strategy.json";

/// How to start the Anvil fork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkConfig {
    /// Mainnet RPC endpoint to fork from.
    pub rpc_url: String,
    /// Pinned fork block, latest when `None`.
    pub fork_block: Option<u64>,
    pub compute_units_per_second: u64,
    pub retries: u32,
    /// Backoff between fork retries, in milliseconds.
    pub retry_backoff_ms: u64,
    /// Spawn and request timeout, in milliseconds.
    pub timeout_ms: u64,
}

impl ForkConfig {
    /// Fork `rpc_url` at the latest block with rate limiting defaults.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            fork_block: None,
            compute_units_per_second: 100,
            retries: 5,
            retry_backoff_ms: 1000,
            timeout_ms: 45_000,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// `ETH_RPC_URL` is required, the rest fall back to [`ForkConfig::new`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let rpc_url = lookup(ETH_RPC_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or(HarnessError::MissingEnv(ETH_RPC_URL))?;
        let defaults = Self::new(rpc_url);

        Ok(Self {
            fork_block: parse_optional(&lookup, FORK_BLOCK_NUMBER)?,
            compute_units_per_second: parse_or(
                &lookup,
                ANVIL_COMPUTE_UNITS_PER_SECOND,
                defaults.compute_units_per_second,
            )?,
            retries: parse_or(&lookup, ANVIL_RETRIES, defaults.retries)?,
            retry_backoff_ms: parse_or(&lookup, ANVIL_FORK_RETRY_BACKOFF, defaults.retry_backoff_ms)?,
            timeout_ms: parse_or(&lookup, ANVIL_TIMEOUT, defaults.timeout_ms)?,
            ..defaults
        })
    }
}

/// Where the compiled Vault and Strategy live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConfig {
    pub vault: PathBuf,
    pub strategy: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            vault: PathBuf::from(DEFAULT_VAULT_ARTIFACT),
            strategy: PathBuf::from(DEFAULT_STRATEGY_ARTIFACT),
        }
    }
}

impl ArtifactConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            vault: lookup(VAULT_ARTIFACT).map_or(defaults.vault, PathBuf::from),
            strategy: lookup(STRATEGY_ARTIFACT).map_or(defaults.strategy, PathBuf::from),
        }
    }
}

/// Complete harness configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub fork: ForkConfig,
    pub artifacts: ArtifactConfig,
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            fork: ForkConfig::from_lookup(&lookup)?,
            artifacts: ArtifactConfig::from_lookup(&lookup),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T> {
    Ok(parse_optional(lookup, name)?.unwrap_or(default))
}

fn parse_optional<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| HarnessError::InvalidConfig { name, value }),
    }
}
