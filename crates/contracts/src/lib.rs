//! Contract bindings and transaction clients for a two-vault strategy pair.
//!
//! This crate provides Solidity bindings for the contracts the harness talks
//! to (ERC-20 tokens, the Vault, the shared Strategy and a Uniswap V2 router),
//! build artifact loading, contract deployment, and clients whose
//! state-changing methods return [`PreparedCall`]s bound to a sender.
//!
//! # Example
//!
//! ```no_run
//! use pairvault_contracts::{connect_http, ContractClient, Erc20Client, TokenClient, VaultClient};
//! use alloy::primitives::{address, U256};
//!
//! #[tokio::main]
//! async fn main() -> pairvault_contracts::Result<()> {
//!     let provider = connect_http("http://localhost:8545")?;
//!     let usdc = TokenClient::new(
//!         address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
//!         provider.clone(),
//!     );
//!     let vault = VaultClient::new(address!("1111111111111111111111111111111111111111"), provider);
//!     let user = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
//!
//!     let amount = U256::from(1_000_000u64);
//!     usdc.approve(user, vault.address(), amount).send().await?;
//!     vault.deposit(user, amount).send().await?;
//!
//!     let held = usdc.balance_of(vault.address()).await?;
//!     assert_eq!(held, amount);
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod client;
pub mod deploy;
pub mod erc20;
pub mod error;
pub mod prepared_call;
pub mod provider;
pub mod router;
pub mod strategy;
pub mod vault;

pub use artifact::ContractArtifact;
pub use client::{ContractClient, Erc20Client};
pub use deploy::PreparedDeployment;
pub use erc20::TokenClient;
pub use error::{ContractError, Result};
pub use prepared_call::PreparedCall;
pub use provider::{connect_http, HttpProvider};
pub use router::RouterClient;
pub use strategy::StrategyClient;
pub use vault::{StrategyAllocation, VaultClient, VaultInit};
