//! Strategy interface definitions.

use alloy::primitives::{Address, U256};
use alloy::sol;
use alloy::sol_types::SolValue;

use crate::client::ContractClient;
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

sol! {
    #[sol(rpc)]
    interface IStrategy {
        function setKeeper(address keeper) external;
        function harvest() external;
        function tend() external;

        function keeper() external view returns (address);
        function estimatedTotalAssets(address token) external view returns (uint256);
    }
}

crate::define_contract_client!(
    /// Client for the strategy shared by both vaults.
    StrategyClient
);

impl StrategyClient {
    /// ABI-encoded constructor arguments: the two vaults as `address[2]`.
    pub fn constructor_args(vaults: [Address; 2]) -> Vec<u8> {
        vaults.abi_encode()
    }

    /// Create a prepared `setKeeper(keeper)` sent by `from`.
    pub fn set_keeper(&self, from: Address, keeper: Address) -> PreparedCall<'_, IStrategy::setKeeperCall> {
        let call = IStrategy::setKeeperCall { keeper };
        PreparedCall::new(from, self.address, call, &self.provider)
    }

    /// Create a prepared `harvest()` sent by `from`.
    pub fn harvest(&self, from: Address) -> PreparedCall<'_, IStrategy::harvestCall> {
        PreparedCall::new(from, self.address, IStrategy::harvestCall {}, &self.provider)
    }

    /// Create a prepared `tend()` sent by `from`.
    pub fn tend(&self, from: Address) -> PreparedCall<'_, IStrategy::tendCall> {
        PreparedCall::new(from, self.address, IStrategy::tendCall {}, &self.provider)
    }

    /// Get the keeper allowed to harvest and tend.
    pub async fn keeper(&self) -> Result<Address> {
        let contract = IStrategy::new(self.address(), self.provider());
        let result = contract
            .keeper()
            .call()
            .await
            .map_err(|e| ContractError::TransactionFailed(format!("Failed to get keeper: {}", e)))?;
        Ok(result)
    }

    /// The strategy's own estimate of the assets it holds in `token`.
    pub async fn estimated_total_assets(&self, token: Address) -> Result<U256> {
        let contract = IStrategy::new(self.address(), self.provider());
        let result = contract.estimatedTotalAssets(token).call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get estimated total assets: {}", e))
        })?;
        Ok(result)
    }
}
