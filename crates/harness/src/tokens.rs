//! The token pair and funding from reserve holders.

use alloy::primitives::{address, Address, U256};
use pairvault_contracts::{ContractClient, Erc20Client, HttpProvider, TokenClient};

use crate::chain::Chain;
use crate::error::Result;

/// Tether USD on mainnet.
pub const USDT: Address = address!("dAC17F958D2ee523a2206206994597C13D831ec7");
/// Holder the USDT funding is taken from.
pub const USDT_RESERVE: Address = address!("5754284f345afc66a98fbb0a0afe71e0f007b949");
/// USD Coin on mainnet.
pub const USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
/// Holder the USDC funding is taken from.
pub const USDC_RESERVE: Address = address!("47ac0fb4f2d84898e4d9e7b4dab3c24507a6d503");
/// Uniswap V2 router on mainnet.
pub const UNISWAP_V2_ROUTER: Address = address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D");

/// Whole tokens handed out per funding.
pub const FUNDING_UNITS: u64 = 10_000;

/// A token address and the account that funds actors with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpec {
    pub address: Address,
    pub reserve: Address,
}

/// The two tokens backing the two vaults, in vault order.
pub const TOKEN_PAIR: [TokenSpec; 2] = [
    TokenSpec {
        address: USDT,
        reserve: USDT_RESERVE,
    },
    TokenSpec {
        address: USDC,
        reserve: USDC_RESERVE,
    },
];

/// A connected token with its decimals resolved.
#[derive(Debug, Clone)]
pub struct Token {
    pub client: TokenClient,
    pub decimals: u8,
    pub reserve: Address,
    pub symbol: String,
}

impl Token {
    pub async fn connect(spec: TokenSpec, provider: HttpProvider) -> Result<Self> {
        let client = TokenClient::new(spec.address, provider);
        let decimals = client.decimals().await?;
        let symbol = client.symbol().await?;

        Ok(Self {
            client,
            decimals,
            reserve: spec.reserve,
            symbol,
        })
    }

    pub fn address(&self) -> Address {
        self.client.address()
    }

    pub async fn balance_of(&self, owner: Address) -> Result<U256> {
        Ok(self.client.balance_of(owner).await?)
    }
}

/// `FUNDING_UNITS` whole tokens in base units.
pub fn funding_amount(decimals: u8) -> U256 {
    U256::from(FUNDING_UNITS) * U256::from(10u64).pow(U256::from(decimals))
}

/// Transfer [`funding_amount`] of each token from its reserve to `to`.
///
/// Returns the amounts sent, in token order. A reserve without enough balance
/// makes the token reject the transfer and the error is returned unchanged.
pub async fn fund(chain: &Chain, tokens: &[Token; 2], to: Address) -> Result<[U256; 2]> {
    let mut amounts = [U256::ZERO; 2];

    for (token, amount) in tokens.iter().zip(amounts.iter_mut()) {
        *amount = funding_amount(token.decimals);
        chain.impersonate(token.reserve).await?;
        token.client.transfer(token.reserve, to, *amount).send().await?;

        tracing::info!(token = %token.symbol, %to, amount = %*amount, "funded account");
    }

    Ok(amounts)
}
