//! The deployed vault pair and shared strategy on a fresh fork.

use alloy::primitives::{Address, U256};
use pairvault_contracts::{
    ContractArtifact, ContractClient, PreparedDeployment, RouterClient, StrategyAllocation,
    StrategyClient, VaultClient, VaultInit,
};

use crate::actors::Actors;
use crate::chain::Chain;
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::tokens::{self, Token, TOKEN_PAIR, UNISWAP_V2_ROUTER};

/// Debt ratio giving the strategy the whole vault, in basis points.
pub const FULL_DEBT_RATIO: u64 = 10_000;
/// Rate limit passed to `addStrategy`.
pub const RATE_LIMIT: u64 = 1_000;

/// `addStrategy` parameters used for both vaults.
pub fn full_allocation() -> StrategyAllocation {
    StrategyAllocation {
        debt_ratio: U256::from(FULL_DEBT_RATIO),
        min_debt_per_harvest: U256::ZERO,
        max_debt_per_harvest: U256::MAX,
        rate_limit: U256::from(RATE_LIMIT),
    }
}

/// Everything a scenario runs against.
///
/// Index 0 is USDT and its vault, index 1 is USDC and its vault.
#[derive(Debug)]
pub struct Fixture {
    pub chain: Chain,
    pub actors: Actors,
    pub tokens: [Token; 2],
    pub vaults: [VaultClient; 2],
    pub strategy: StrategyClient,
    pub router: RouterClient,
    /// What the user was funded with during setup.
    pub amounts: [U256; 2],
}

impl Fixture {
    /// Fork mainnet, deploy and wire the contracts, then fund governance and
    /// the user.
    pub async fn setup(config: &HarnessConfig) -> Result<Self> {
        let vault_artifact = ContractArtifact::load(&config.artifacts.vault)?;
        let strategy_artifact = ContractArtifact::load(&config.artifacts.strategy)?;

        let chain = Chain::fork(&config.fork).await?;
        Self::deploy(chain, &vault_artifact, &strategy_artifact).await
    }

    /// Same as [`Fixture::setup`] on an already running fork.
    pub async fn deploy(
        chain: Chain,
        vault_artifact: &ContractArtifact,
        strategy_artifact: &ContractArtifact,
    ) -> Result<Self> {
        let actors = Actors::provision(&chain).await?;
        let provider = chain.provider().clone();

        let tokens = [
            Token::connect(TOKEN_PAIR[0], provider.clone()).await?,
            Token::connect(TOKEN_PAIR[1], provider.clone()).await?,
        ];

        let vaults = deploy_vault_pair(&chain, &actors, &tokens, vault_artifact).await?;
        let strategy = deploy_strategy(&chain, &actors, &vaults, strategy_artifact).await?;
        let router = RouterClient::new(UNISWAP_V2_ROUTER, provider);

        let mut fixture = Self {
            chain,
            actors,
            tokens,
            vaults,
            strategy,
            router,
            amounts: [U256::ZERO; 2],
        };

        fixture.fund(fixture.actors.governance).await?;
        fixture.amounts = fixture.fund(fixture.actors.user).await?;

        tracing::info!(
            strategy = %fixture.strategy.address(),
            vault0 = %fixture.vaults[0].address(),
            vault1 = %fixture.vaults[1].address(),
            "fixture ready"
        );
        Ok(fixture)
    }

    /// Give `to` the funding amount of both tokens.
    pub async fn fund(&self, to: Address) -> Result<[U256; 2]> {
        tokens::fund(&self.chain, &self.tokens, to).await
    }
}

/// Deploy and configure one vault per token, in token order.
pub async fn deploy_vault_pair(
    chain: &Chain,
    actors: &Actors,
    tokens: &[Token; 2],
    artifact: &ContractArtifact,
) -> Result<[VaultClient; 2]> {
    Ok([
        deploy_vault(chain, actors, tokens[0].address(), artifact).await?,
        deploy_vault(chain, actors, tokens[1].address(), artifact).await?,
    ])
}

/// Deploy a vault from the guardian, initialize it for `token` and hand the
/// deposit limit and management to governance's settings.
pub async fn deploy_vault(
    chain: &Chain,
    actors: &Actors,
    token: Address,
    artifact: &ContractArtifact,
) -> Result<VaultClient> {
    let provider = chain.provider();
    let address = PreparedDeployment::new(actors.guardian, artifact, &[], provider)
        .send()
        .await?;
    let vault = VaultClient::new(address, provider.clone());

    let init = VaultInit {
        token,
        governance: actors.governance,
        rewards: actors.rewards,
        name_override: String::new(),
        symbol_override: String::new(),
        guardian: actors.guardian,
        management: actors.management,
    };
    vault.initialize(actors.guardian, &init).send().await?;
    vault
        .set_deposit_limit(actors.governance, U256::MAX)
        .send()
        .await?;
    vault
        .set_management(actors.governance, actors.management)
        .send()
        .await?;

    tracing::info!(vault = %address, %token, "vault deployed");
    Ok(vault)
}

/// Deploy the strategy over both vaults, set its keeper and register it on
/// each vault with [`full_allocation`].
pub async fn deploy_strategy(
    chain: &Chain,
    actors: &Actors,
    vaults: &[VaultClient; 2],
    artifact: &ContractArtifact,
) -> Result<StrategyClient> {
    let provider = chain.provider();
    let args = StrategyClient::constructor_args([vaults[0].address(), vaults[1].address()]);
    let address = PreparedDeployment::new(actors.strategist, artifact, &args, provider)
        .send()
        .await?;
    let strategy = StrategyClient::new(address, provider.clone());

    strategy
        .set_keeper(actors.strategist, actors.keeper)
        .send()
        .await?;

    let allocation = full_allocation();
    for vault in vaults {
        vault
            .add_strategy(actors.governance, address, &allocation)
            .send()
            .await?;
    }

    tracing::info!(strategy = %address, "strategy deployed and registered");
    Ok(strategy)
}
