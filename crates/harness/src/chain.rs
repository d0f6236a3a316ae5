//! Chain simulator: an Anvil process and a provider connected to it.
//!
//! Dropping a [`Chain`] kills its Anvil process, so every fixture starts from
//! a fresh fork.

use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::primitives::{Address, U256};
use alloy::providers::{ext::AnvilApi, Provider};
use alloy::rpc::types::BlockNumberOrTag;
use alloy_chains::Chain as ChainId;
use pairvault_contracts::{connect_http, HttpProvider};

use crate::config::ForkConfig;
use crate::error::{HarnessError, Result};

/// Balance given to impersonated accounts so they can pay for gas.
const GAS_MONEY: U256 = U256::from_limbs([10_000_000_000_000_000_000, 0, 0, 0]); // 10 ETH

/// A running Anvil instance.
pub struct Chain {
    anvil: AnvilInstance,
    provider: HttpProvider,
}

impl Chain {
    /// Spawn an Anvil fork of Ethereum mainnet.
    ///
    /// Fails with [`HarnessError::WrongChain`] when `rpc_url` is not a
    /// mainnet endpoint.
    pub async fn fork(config: &ForkConfig) -> Result<Self> {
        let mut anvil = Anvil::new()
            .fork(config.rpc_url.clone())
            .arg("--compute-units-per-second")
            .arg(config.compute_units_per_second.to_string())
            .arg("--retries")
            .arg(config.retries.to_string())
            .arg("--fork-retry-backoff")
            .arg(config.retry_backoff_ms.to_string())
            .timeout(config.timeout_ms);
        if let Some(block) = config.fork_block {
            anvil = anvil.fork_block_number(block);
        }

        let anvil = anvil
            .try_spawn()
            .map_err(|e| HarnessError::Spawn(e.to_string()))?;
        let chain = Self::connect(anvil)?;
        chain.ensure_mainnet().await?;

        tracing::info!(
            endpoint = %chain.endpoint(),
            fork_block = ?config.fork_block,
            "mainnet fork ready"
        );
        Ok(chain)
    }

    /// Spawn a plain local Anvil chain, without forking.
    pub fn local() -> Result<Self> {
        let anvil = Anvil::new()
            .try_spawn()
            .map_err(|e| HarnessError::Spawn(e.to_string()))?;
        Self::connect(anvil)
    }

    fn connect(anvil: AnvilInstance) -> Result<Self> {
        let provider = connect_http(&anvil.endpoint())?;
        Ok(Self { anvil, provider })
    }

    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    pub fn endpoint(&self) -> String {
        self.anvil.endpoint()
    }

    /// The unlocked, pre-funded dev accounts.
    pub fn accounts(&self) -> &[Address] {
        self.anvil.addresses()
    }

    pub async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| HarnessError::Rpc(format!("Failed to get chain id: {}", e)))
    }

    /// Error unless the chain reports Ethereum mainnet's chain id.
    pub async fn ensure_mainnet(&self) -> Result<()> {
        let actual = ChainId::from_id(self.chain_id().await?);
        let expected = ChainId::mainnet();
        if actual != expected {
            return Err(HarnessError::WrongChain { expected, actual });
        }
        Ok(())
    }

    /// Let the node sign for `account` and make sure it can pay for gas.
    pub async fn impersonate(&self, account: Address) -> Result<()> {
        self.provider
            .anvil_impersonate_account(account)
            .await
            .map_err(|e| HarnessError::Rpc(format!("Failed to impersonate {}: {}", account, e)))?;

        let balance = self
            .provider
            .get_balance(account)
            .await
            .map_err(|e| HarnessError::Rpc(format!("Failed to get ETH balance: {}", e)))?;
        if balance < GAS_MONEY {
            self.provider
                .anvil_set_balance(account, GAS_MONEY)
                .await
                .map_err(|e| HarnessError::Rpc(format!("Failed to set ETH balance: {}", e)))?;
        }

        tracing::debug!(%account, "impersonating account");
        Ok(())
    }

    /// Advance the clock by `seconds`. Takes effect with the next block.
    pub async fn sleep(&mut self, seconds: u64) -> Result<()> {
        self.provider
            .anvil_increase_time(seconds)
            .await
            .map_err(|e| HarnessError::Rpc(format!("Failed to increase time: {}", e)))?;

        tracing::debug!(seconds, "advanced chain time");
        Ok(())
    }

    /// Mine `blocks` empty blocks.
    pub async fn mine(&mut self, blocks: u64) -> Result<()> {
        self.provider
            .anvil_mine(Some(blocks), None)
            .await
            .map_err(|e| HarnessError::Rpc(format!("Failed to mine: {}", e)))?;

        tracing::debug!(blocks, "mined blocks");
        Ok(())
    }

    /// Current chain time: the timestamp the next block would get.
    ///
    /// Follows the node's clock, so it includes every `sleep` and the wall
    /// clock time passed since the latest block. Used as the base for swap
    /// deadlines.
    pub async fn time(&self) -> Result<u64> {
        self.block_timestamp(BlockNumberOrTag::Pending).await
    }

    pub async fn latest_timestamp(&self) -> Result<u64> {
        self.block_timestamp(BlockNumberOrTag::Latest).await
    }

    async fn block_timestamp(&self, tag: BlockNumberOrTag) -> Result<u64> {
        let block = self
            .provider
            .get_block_by_number(tag)
            .await
            .map_err(|e| HarnessError::Rpc(format!("Failed to get {} block: {}", tag, e)))?
            .ok_or_else(|| HarnessError::Rpc(format!("{} block not found", tag)))?;
        Ok(block.header.timestamp)
    }

    pub async fn block_number(&self) -> Result<u64> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| HarnessError::Rpc(format!("Failed to get block number: {}", e)))
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("endpoint", &self.anvil.endpoint())
            .finish()
    }
}
