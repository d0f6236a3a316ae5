//! Vault interface definitions.
//!
//! Only the subset of the Vault ABI the harness calls. The Vault overloads
//! `deposit` and `withdraw`; the bindings pick `deposit(uint256)` and the
//! zero-argument `withdraw()` that redeems every share of the caller.

use alloy::primitives::{Address, U256};
use alloy::sol;

use crate::client::{ContractClient, Erc20Client};
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

sol! {
    #[sol(rpc)]
    interface IVault {
        function initialize(
            address token,
            address governance,
            address rewards,
            string nameOverride,
            string symbolOverride,
            address guardian,
            address management
        ) external;
        function setDepositLimit(uint256 limit) external;
        function setManagement(address management) external;
        function addStrategy(
            address strategy,
            uint256 debtRatio,
            uint256 minDebtPerHarvest,
            uint256 maxDebtPerHarvest,
            uint256 rateLimit
        ) external;

        function deposit(uint256 amount) external returns (uint256);
        function withdraw() external returns (uint256);

        function token() external view returns (address);
        function management() external view returns (address);
        function depositLimit() external view returns (uint256);
        function totalAssets() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
    }
}

/// Arguments of `IVault::initialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultInit {
    pub token: Address,
    pub governance: Address,
    pub rewards: Address,
    /// Empty means "derive from the token".
    pub name_override: String,
    /// Empty means "derive from the token".
    pub symbol_override: String,
    pub guardian: Address,
    pub management: Address,
}

/// Arguments of `IVault::addStrategy` besides the strategy address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyAllocation {
    /// Share of vault assets lent to the strategy, in basis points.
    pub debt_ratio: U256,
    pub min_debt_per_harvest: U256,
    pub max_debt_per_harvest: U256,
    pub rate_limit: U256,
}

crate::define_contract_client!(
    /// Client for a deployed Vault.
    VaultClient
);

impl Erc20Client for VaultClient {}

impl VaultClient {
    /// Create a prepared `initialize(...)` sent by `from`.
    pub fn initialize(&self, from: Address, init: &VaultInit) -> PreparedCall<'_, IVault::initializeCall> {
        let call = IVault::initializeCall {
            token: init.token,
            governance: init.governance,
            rewards: init.rewards,
            nameOverride: init.name_override.clone(),
            symbolOverride: init.symbol_override.clone(),
            guardian: init.guardian,
            management: init.management,
        };
        PreparedCall::new(from, self.address, call, &self.provider)
    }

    /// Create a prepared `setDepositLimit(limit)` sent by `from`.
    pub fn set_deposit_limit(&self, from: Address, limit: U256) -> PreparedCall<'_, IVault::setDepositLimitCall> {
        let call = IVault::setDepositLimitCall { limit };
        PreparedCall::new(from, self.address, call, &self.provider)
    }

    /// Create a prepared `setManagement(management)` sent by `from`.
    pub fn set_management(
        &self,
        from: Address,
        management: Address,
    ) -> PreparedCall<'_, IVault::setManagementCall> {
        let call = IVault::setManagementCall { management };
        PreparedCall::new(from, self.address, call, &self.provider)
    }

    /// Create a prepared `addStrategy(...)` sent by `from`.
    pub fn add_strategy(
        &self,
        from: Address,
        strategy: Address,
        allocation: &StrategyAllocation,
    ) -> PreparedCall<'_, IVault::addStrategyCall> {
        let call = IVault::addStrategyCall {
            strategy,
            debtRatio: allocation.debt_ratio,
            minDebtPerHarvest: allocation.min_debt_per_harvest,
            maxDebtPerHarvest: allocation.max_debt_per_harvest,
            rateLimit: allocation.rate_limit,
        };
        PreparedCall::new(from, self.address, call, &self.provider)
    }

    /// Create a prepared `deposit(amount)` sent by `from`.
    pub fn deposit(&self, from: Address, amount: U256) -> PreparedCall<'_, IVault::depositCall> {
        let call = IVault::depositCall { amount };
        PreparedCall::new(from, self.address, call, &self.provider)
    }

    /// Create a prepared `withdraw()` that redeems all of `from`'s shares.
    pub fn withdraw_all(&self, from: Address) -> PreparedCall<'_, IVault::withdrawCall> {
        PreparedCall::new(from, self.address, IVault::withdrawCall {}, &self.provider)
    }

    /// Get the vault's underlying token.
    pub async fn token(&self) -> Result<Address> {
        let contract = IVault::new(self.address(), self.provider());
        let result = contract
            .token()
            .call()
            .await
            .map_err(|e| ContractError::TransactionFailed(format!("Failed to get token: {}", e)))?;
        Ok(result)
    }

    /// Get the vault's management account.
    pub async fn management(&self) -> Result<Address> {
        let contract = IVault::new(self.address(), self.provider());
        let result = contract.management().call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get management: {}", e))
        })?;
        Ok(result)
    }

    /// Get the vault's deposit limit.
    pub async fn deposit_limit(&self) -> Result<U256> {
        let contract = IVault::new(self.address(), self.provider());
        let result = contract.depositLimit().call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get deposit limit: {}", e))
        })?;
        Ok(result)
    }

    /// Get the total assets the vault accounts for, including strategy debt.
    pub async fn total_assets(&self) -> Result<U256> {
        let contract = IVault::new(self.address(), self.provider());
        let result = contract.totalAssets().call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get total assets: {}", e))
        })?;
        Ok(result)
    }
}
