//! Shared client traits and macros.
//!
//! Every client is bound to one deployed contract. View functions are
//! `async fn`s that return values directly. State-changing functions return a
//! [`PreparedCall`](crate::prepared_call::PreparedCall) carrying the sender,
//! since the harness drives each contract from several accounts.

#![allow(async_fn_in_trait)]

use alloy::primitives::{Address, U256};

use crate::erc20::IERC20;
use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// A client bound to a single contract address.
pub trait ContractClient {
    /// Returns a reference to the provider.
    fn provider(&self) -> &HttpProvider;

    /// Returns the bound contract address.
    fn address(&self) -> Address;
}

/// ERC-20 view functions.
///
/// Implemented by token clients and by vault clients, whose shares are
/// themselves an ERC-20.
pub trait Erc20Client: ContractClient {
    /// Get the balance of `owner`.
    async fn balance_of(&self, owner: Address) -> Result<U256> {
        let contract = IERC20::new(self.address(), self.provider());
        let result = contract.balanceOf(owner).call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get balance: {}", e))
        })?;
        Ok(result)
    }

    /// Get the decimals of the token.
    async fn decimals(&self) -> Result<u8> {
        let contract = IERC20::new(self.address(), self.provider());
        let result = contract.decimals().call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get decimals: {}", e))
        })?;
        Ok(result)
    }

    /// Get the allowance `owner` granted to `spender`.
    async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        let contract = IERC20::new(self.address(), self.provider());
        let result = contract.allowance(owner, spender).call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get allowance: {}", e))
        })?;
        Ok(result)
    }

    /// Get the token symbol.
    async fn symbol(&self) -> Result<String> {
        let contract = IERC20::new(self.address(), self.provider());
        let result = contract.symbol().call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get symbol: {}", e))
        })?;
        Ok(result)
    }
}

/// Macro to define a client struct bound to one contract.
///
/// Generates the struct with `address` and `provider` fields, a `new()`
/// constructor, a `Debug` impl that skips the provider and the
/// [`ContractClient`] implementation.
///
/// # Usage
///
/// ```rust,ignore
/// define_contract_client!(
///     /// Client for a deployed Vault.
///     VaultClient
/// );
/// ```
#[macro_export]
macro_rules! define_contract_client {
    (
        $(#[$meta:meta])*
        $client_name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $client_name {
            address: alloy::primitives::Address,
            provider: $crate::provider::HttpProvider,
        }

        impl $client_name {
            #[doc = concat!("Bind a `", stringify!($client_name), "` to a deployed contract.")]
            pub fn new(
                address: alloy::primitives::Address,
                provider: $crate::provider::HttpProvider,
            ) -> Self {
                Self { address, provider }
            }
        }

        impl $crate::client::ContractClient for $client_name {
            fn provider(&self) -> &$crate::provider::HttpProvider {
                &self.provider
            }

            fn address(&self) -> alloy::primitives::Address {
                self.address
            }
        }

        impl std::fmt::Debug for $client_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($client_name))
                    .field("address", &self.address)
                    .finish()
            }
        }
    };
}

/// Macro to implement ERC-20 transaction methods on a client struct.
///
/// Generates `approve` and `transfer` returning `PreparedCall`. Trait methods
/// cannot return types borrowing `self` with a lifetime, hence the macro.
#[macro_export]
macro_rules! impl_erc20_transactions {
    ($client:ty) => {
        impl $client {
            /// Create a prepared `approve(spender, amount)` sent by `from`.
            pub fn approve(
                &self,
                from: alloy::primitives::Address,
                spender: alloy::primitives::Address,
                amount: alloy::primitives::U256,
            ) -> $crate::prepared_call::PreparedCall<'_, $crate::erc20::IERC20::approveCall> {
                let call = $crate::erc20::IERC20::approveCall { spender, amount };
                $crate::prepared_call::PreparedCall::new(from, self.address, call, &self.provider)
            }

            /// Create a prepared `transfer(to, amount)` sent by `from`.
            pub fn transfer(
                &self,
                from: alloy::primitives::Address,
                to: alloy::primitives::Address,
                amount: alloy::primitives::U256,
            ) -> $crate::prepared_call::PreparedCall<'_, $crate::erc20::IERC20::transferCall> {
                let call = $crate::erc20::IERC20::transferCall { to, amount };
                $crate::prepared_call::PreparedCall::new(from, self.address, call, &self.provider)
            }
        }
    };
}
