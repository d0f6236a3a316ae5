//! Provider construction for contract clients.
//!
//! Transactions are sent with `eth_sendTransaction` and an explicit `from`,
//! so the node signs them. That works for Anvil's unlocked dev accounts and
//! for impersonated accounts, which is every sender the harness uses.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::error::{ContractError, Result};

/// The provider type shared by every contract client.
pub type HttpProvider = DynProvider;

/// Connect to an HTTP JSON-RPC endpoint with the recommended fillers
/// (gas, nonce, chain id) and no local wallet.
pub fn connect_http(rpc_url: &str) -> Result<HttpProvider> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))?;

    Ok(ProviderBuilder::new().connect_http(url).erased())
}
