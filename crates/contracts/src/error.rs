//! Error types for the contracts crate.

use alloy_primitives::{Address, TxHash};
use thiserror::Error;

/// Errors that can occur when talking to the vault pair contracts.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// Transaction could not be sent, or a view call failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Transaction was mined but reverted.
    #[error("Transaction {tx_hash} to {to} reverted")]
    Reverted { to: Address, tx_hash: TxHash },

    /// Contract creation did not produce a contract address.
    #[error("Deployment failed: {0}")]
    Deployment(String),

    /// Build artifact is missing or malformed.
    #[error("Invalid artifact {path}: {reason}")]
    Artifact { path: String, reason: String },
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
