//! Error types for the harness.

use alloy_primitives::U256;
use pairvault_contracts::ContractError;
use thiserror::Error;

use crate::report::CheckRule;

/// Errors that abort a fixture or a scenario.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A contract call, deployment or artifact load failed.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// A chain simulator request failed.
    #[error("RPC request failed: {0}")]
    Rpc(String),

    /// Anvil could not be started.
    #[error("Failed to spawn Anvil: {0}")]
    Spawn(String),

    /// A required environment variable is not set.
    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),

    /// A configuration value could not be parsed.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidConfig { name: &'static str, value: String },

    /// The fork is not on the chain the hardcoded addresses belong to.
    #[error("Fork is on chain {actual}, expected {expected}")]
    WrongChain {
        expected: alloy_chains::Chain,
        actual: alloy_chains::Chain,
    },

    /// Not enough dev accounts to assign every role.
    #[error("Account pool exhausted: need {needed} accounts, fork has {available}")]
    AccountPoolExhausted { needed: usize, available: usize },

    /// A balance check did not hold.
    #[error("Check failed: {check}: expected {expected} ({rule}), got {actual}")]
    CheckFailed {
        check: String,
        rule: CheckRule,
        expected: U256,
        actual: U256,
    },
}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
