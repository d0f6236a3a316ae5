//! Prepared call types for deferred transaction execution.
//!
//! A `PreparedCall` is a typed contract call bound to its sender. It can be
//! inspected (target, sender, calldata) before it is sent, which is what the
//! calldata tests rely on, and sent with `.send()` to wait for the receipt.

use alloy::primitives::{Address, Bytes};
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;

use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// A transaction that has been built but not sent.
///
/// # Example
///
/// ```rust,ignore
/// let receipt = vault.deposit(user, amount).send().await?;
///
/// let (to, call) = vault.deposit(user, amount).prepare();
/// ```
pub struct PreparedCall<'a, C: SolCall> {
    from: Address,
    to: Address,
    call: C,
    provider: &'a HttpProvider,
}

impl<'a, C: SolCall> PreparedCall<'a, C> {
    /// Create a new prepared call.
    pub fn new(from: Address, to: Address, call: C, provider: &'a HttpProvider) -> Self {
        Self {
            from,
            to,
            call,
            provider,
        }
    }

    /// Consumes self and returns `(address, call)`.
    pub fn prepare(self) -> (Address, C) {
        (self.to, self.call)
    }

    /// Returns the target address for this call.
    pub fn to(&self) -> Address {
        self.to
    }

    /// Returns the account the transaction is sent from.
    pub fn from(&self) -> Address {
        self.from
    }

    /// ABI-encoded calldata, selector included.
    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }

    /// Sends the transaction and waits for the receipt.
    ///
    /// A mined transaction with a failed status is an error, so callers
    /// never have to inspect the receipt to find out the call reverted.
    pub async fn send(self) -> Result<TransactionReceipt> {
        let tx = TransactionRequest::default()
            .from(self.from)
            .to(self.to)
            .input(self.call.abi_encode().into());

        let pending = self.provider.send_transaction(tx).await.map_err(|e| {
            ContractError::TransactionFailed(format!(
                "Failed to send {}: {}",
                C::SIGNATURE,
                e
            ))
        })?;

        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get receipt: {}", e))
        })?;

        if !receipt.status() {
            return Err(ContractError::Reverted {
                to: self.to,
                tx_hash: receipt.transaction_hash,
            });
        }

        tracing::debug!(
            call = C::SIGNATURE,
            from = %self.from,
            to = %self.to,
            tx_hash = %receipt.transaction_hash,
            gas_used = receipt.gas_used,
            "transaction mined"
        );

        Ok(receipt)
    }
}
