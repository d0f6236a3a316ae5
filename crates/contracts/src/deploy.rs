//! Contract creation from artifact bytecode.

use alloy::primitives::{Address, Bytes, TxKind};
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionInput, TransactionRequest};

use crate::artifact::ContractArtifact;
use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// A contract creation that has been built but not sent.
pub struct PreparedDeployment<'a> {
    from: Address,
    init_code: Bytes,
    provider: &'a HttpProvider,
}

impl<'a> PreparedDeployment<'a> {
    /// Build a deployment of `artifact` with ABI-encoded constructor
    /// arguments appended to its bytecode.
    pub fn new(
        from: Address,
        artifact: &ContractArtifact,
        constructor_args: &[u8],
        provider: &'a HttpProvider,
    ) -> Self {
        let mut init_code = artifact.bytecode.to_vec();
        init_code.extend_from_slice(constructor_args);

        Self {
            from,
            init_code: init_code.into(),
            provider,
        }
    }

    /// Returns the deployer.
    pub fn from(&self) -> Address {
        self.from
    }

    /// Bytecode followed by the constructor arguments.
    pub fn init_code(&self) -> &Bytes {
        &self.init_code
    }

    /// Sends the creation transaction and returns the new contract address.
    pub async fn send(self) -> Result<Address> {
        let mut tx = TransactionRequest::default()
            .from(self.from)
            .input(TransactionInput::both(self.init_code));
        tx.to = Some(TxKind::Create);

        let pending = self.provider.send_transaction(tx).await.map_err(|e| {
            ContractError::Deployment(format!("Failed to send creation transaction: {}", e))
        })?;

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ContractError::Deployment(format!("Failed to get receipt: {}", e)))?;

        if !receipt.status() {
            return Err(ContractError::Deployment(format!(
                "constructor reverted in {}",
                receipt.transaction_hash
            )));
        }

        let address = receipt
            .contract_address
            .ok_or_else(|| ContractError::Deployment("no contract address in receipt".to_string()))?;

        tracing::debug!(from = %self.from, %address, "contract deployed");
        Ok(address)
    }
}
