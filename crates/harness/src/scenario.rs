//! The executable scenarios.
//!
//! Both start from a fresh [`Fixture`] whose user holds the funded amounts.
//! Strategy calls are sent from the strategist, the account that deployed it.

use alloy::primitives::U256;
use pairvault_contracts::ContractClient;
use serde::Serialize;

use crate::approx::RelativeTolerance;
use crate::error::Result;
use crate::fixture::Fixture;
use crate::report::{ScenarioReport, ToleranceBase};

/// Seconds slept before each harvest.
pub const HARVEST_DELAY: u64 = 1;
/// Seconds until harvested profit is unlocked by the vaults.
pub const UNLOCK_DELAY: u64 = 6 * 3600;
/// Swap round trips made to generate trading fees.
pub const SWAP_ROUNDS: usize = 10;
/// Router allowance granted by the user before swapping, in base units.
pub const SWAP_ALLOWANCE: u64 = 1_000_000_000_000_000_000;
/// Seconds past the current chain time a swap stays valid.
pub const SWAP_DEADLINE_OFFSET: u64 = 10;
/// Share of the deposit sent to the strategy as profit, in basis points.
pub const TRANSFER_PROFIT_BPS: u64 = 100;

const MAX_BPS: u64 = 10_000;

/// How yield is produced before the second harvest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitSource {
    /// Swap back and forth through Uniswap V2 so the pools collect fees.
    #[default]
    TradingFees,
    /// Governance sends [`TRANSFER_PROFIT_BPS`] of each deposit to the
    /// strategy.
    Transfer,
}

impl std::fmt::Display for ProfitSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfitSource::TradingFees => f.write_str("trading fees"),
            ProfitSource::Transfer => f.write_str("transfer"),
        }
    }
}

/// Profit sent to the strategy for a deposit of `amount`.
pub fn transfer_profit(amount: U256) -> U256 {
    amount * U256::from(TRANSFER_PROFIT_BPS) / U256::from(MAX_BPS)
}

/// Deposit, harvest, tend, then withdraw everything.
pub async fn basic_operation(fixture: &mut Fixture) -> Result<ScenarioReport> {
    let mut report = ScenarioReport::new("operation");
    let user = fixture.actors.user;

    tracing::info!("depositing");
    let before = [
        fixture.tokens[0].balance_of(user).await?,
        fixture.tokens[1].balance_of(user).await?,
    ];
    deposit(fixture, &mut report).await?;

    tracing::info!("harvesting");
    harvest_and_check_assets(fixture, &mut report).await?;

    tracing::info!("tending");
    fixture
        .strategy
        .tend(fixture.actors.strategist)
        .send()
        .await?;

    tracing::info!("withdrawing");
    for ((token, vault), before) in fixture.tokens.iter().zip(&fixture.vaults).zip(before) {
        vault.withdraw_all(user).send().await?;
        report.check_approx(
            format!("user {} after withdraw", token.symbol),
            RelativeTolerance::DEFAULT,
            ToleranceBase::Actual,
            before,
            token.balance_of(user).await?,
        )?;
    }

    Ok(report)
}

/// Deposit and harvest, inject profit, harvest again and let the profit
/// unlock.
pub async fn profitable_harvest(fixture: &mut Fixture, source: ProfitSource) -> Result<ScenarioReport> {
    let mut report = ScenarioReport::new("profitable_harvest");

    tracing::info!("depositing");
    deposit(fixture, &mut report).await?;

    tracing::info!("harvesting");
    harvest_and_check_assets(fixture, &mut report).await?;

    tracing::info!(%source, "simulating yield");
    let injected = match source {
        ProfitSource::TradingFees => {
            swap_for_fees(fixture).await?;
            None
        }
        ProfitSource::Transfer => Some(transfer_to_strategy(fixture).await?),
    };

    tracing::info!("realizing profit");
    fixture.chain.sleep(HARVEST_DELAY).await?;
    fixture
        .strategy
        .harvest(fixture.actors.strategist)
        .send()
        .await?;
    fixture.chain.sleep(UNLOCK_DELAY).await?;
    fixture.chain.mine(1).await?;

    let mut profits = [U256::ZERO; 2];
    for ((token, vault), profit) in fixture
        .tokens
        .iter()
        .zip(&fixture.vaults)
        .zip(profits.iter_mut())
    {
        *profit = token.balance_of(vault.address()).await?;
        report.check_positive(format!("{} vault profit", token.symbol), *profit)?;
    }

    match injected {
        None => report.check_approx(
            "profit parity",
            RelativeTolerance::PROFIT_PARITY,
            ToleranceBase::Expected,
            profits[0],
            profits[1],
        )?,
        Some(injected) => {
            for ((token, profit), injected) in fixture.tokens.iter().zip(profits).zip(injected) {
                report.check_exact(format!("{} vault profit is transfer", token.symbol), injected, profit)?;
            }
        }
    }

    Ok(report)
}

/// Approve and deposit the funded amounts, checking the vaults hold exactly
/// what was deposited.
async fn deposit(fixture: &Fixture, report: &mut ScenarioReport) -> Result<()> {
    let user = fixture.actors.user;

    for ((token, vault), amount) in fixture
        .tokens
        .iter()
        .zip(&fixture.vaults)
        .zip(fixture.amounts)
    {
        token
            .client
            .approve(user, vault.address(), amount)
            .send()
            .await?;
        vault.deposit(user, amount).send().await?;

        report.check_exact(
            format!("{} vault balance after deposit", token.symbol),
            amount,
            token.balance_of(vault.address()).await?,
        )?;
    }

    Ok(())
}

/// Harvest with no yield and check the strategy reports the deposits.
async fn harvest_and_check_assets(fixture: &mut Fixture, report: &mut ScenarioReport) -> Result<()> {
    fixture.chain.sleep(HARVEST_DELAY).await?;
    fixture
        .strategy
        .harvest(fixture.actors.strategist)
        .send()
        .await?;

    for (token, amount) in fixture.tokens.iter().zip(fixture.amounts) {
        report.check_approx(
            format!("estimated {} assets", token.symbol),
            RelativeTolerance::DEFAULT,
            ToleranceBase::Actual,
            amount,
            fixture.strategy.estimated_total_assets(token.address()).await?,
        )?;
    }

    Ok(())
}

async fn swap_for_fees(fixture: &Fixture) -> Result<()> {
    let user = fixture.actors.user;
    let router = fixture.router.address();

    for token in &fixture.tokens {
        token
            .client
            .approve(user, router, U256::from(SWAP_ALLOWANCE))
            .send()
            .await?;
    }

    // the first funding tops the user up, the second sets the swap size
    fixture.fund(user).await?;
    let swap_amounts = fixture.fund(user).await?;

    let forward = vec![fixture.tokens[0].address(), fixture.tokens[1].address()];
    let backward = vec![fixture.tokens[1].address(), fixture.tokens[0].address()];

    for round in 0..SWAP_ROUNDS {
        for (amount, path) in [(swap_amounts[0], &forward), (swap_amounts[1], &backward)] {
            let deadline = U256::from(fixture.chain.time().await? + SWAP_DEADLINE_OFFSET);
            fixture
                .router
                .swap_exact_tokens_for_tokens(user, amount, U256::from(1u64), path.clone(), user, deadline)
                .send()
                .await?;
        }
        tracing::debug!(round, "swap round done");
    }

    Ok(())
}

async fn transfer_to_strategy(fixture: &Fixture) -> Result<[U256; 2]> {
    let governance = fixture.actors.governance;
    let strategy = fixture.strategy.address();
    let mut injected = [U256::ZERO; 2];

    for ((token, amount), profit) in fixture
        .tokens
        .iter()
        .zip(fixture.amounts)
        .zip(injected.iter_mut())
    {
        *profit = transfer_profit(amount);
        token
            .client
            .transfer(governance, strategy, *profit)
            .send()
            .await?;
        tracing::debug!(token = %token.symbol, profit = %*profit, "profit sent to strategy");
    }

    Ok(injected)
}
