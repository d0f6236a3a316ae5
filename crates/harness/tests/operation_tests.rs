//! Scenario tests on a mainnet fork.
//!
//! Each test forks mainnet, deploys two vaults (USDT and USDC) and one
//! strategy over both, funds governance and the user, then runs a scenario.
//!
//! Run with: `cargo test -p pairvault-harness --test operation_tests -- --ignored`
//! Requires `ETH_RPC_URL` and the Vault and Strategy build artifacts
//! (`VAULT_ARTIFACT`, `STRATEGY_ARTIFACT`).
//!
//! Not covered yet, pending strategy support:
//! - emergency exit: after `setEmergencyExit()` and a harvest the estimated
//!   assets should drop below the deposit.
//! - debt ratio changes: with `updateStrategyDebtRatio(strategy, 5_000)` a
//!   harvest should leave half the deposit in the strategy, and raising it
//!   back to 10_000 should move the rest in.


use alloy::primitives::U256;
use fork_helpers::fixture_or_skip;
use pairvault_contracts::{ContractClient, Erc20Client};
use pairvault_harness::scenario::{self, transfer_profit, SWAP_ALLOWANCE, SWAP_ROUNDS};
use pairvault_harness::tokens::funding_amount;
use pairvault_harness::{CheckRule, ProfitSource, RelativeTolerance, ToleranceBase};

#[tokio::test]
#[ignore = "Requires ETH_RPC_URL environment variable and build artifacts"]
async fn test_fixture_configuration() {
    let Some(fixture) = fixture_or_skip().await else {
        return;
    };
    let actors = fixture.actors;

    for (vault, token) in fixture.vaults.iter().zip(&fixture.tokens) {
        assert_eq!(vault.token().await.unwrap(), token.address());
        assert_eq!(vault.management().await.unwrap(), actors.management);
        assert_eq!(vault.deposit_limit().await.unwrap(), U256::MAX);
        assert_eq!(vault.total_assets().await.unwrap(), U256::ZERO);
    }
    assert_eq!(fixture.strategy.keeper().await.unwrap(), actors.keeper);

    for (token, amount) in fixture.tokens.iter().zip(fixture.amounts) {
        assert_eq!(amount, U256::from(10_000u64) * U256::from(10u64).pow(U256::from(token.decimals)));
        assert!(token.balance_of(actors.user).await.unwrap() >= amount);
        assert!(token.balance_of(actors.governance).await.unwrap() >= amount);
    }
}

#[tokio::test]
#[ignore = "Requires ETH_RPC_URL environment variable and build artifacts"]
async fn test_operation() {
    let Some(mut fixture) = fixture_or_skip().await else {
        return;
    };

    let report = scenario::basic_operation(&mut fixture)
        .await
        .expect("Operation scenario failed");

    // two deposits, two estimates, two withdrawals
    assert_eq!(report.len(), 6);
    assert_eq!(report.checks[0].rule, CheckRule::Exact);
    assert!(report.checks[2..].iter().all(|check| check.rule
        == CheckRule::Approx {
            rel: RelativeTolerance::DEFAULT,
            base: ToleranceBase::Actual,
        }));

    for (vault, token) in fixture.vaults.iter().zip(&fixture.tokens) {
        assert_eq!(vault.balance_of(fixture.actors.user).await.unwrap(), U256::ZERO);
        assert_eq!(
            token
                .client
                .allowance(fixture.actors.user, vault.address())
                .await
                .unwrap(),
            U256::ZERO,
            "deposit should consume the {} approval",
            token.symbol
        );
    }
}

#[tokio::test]
#[ignore = "Requires ETH_RPC_URL environment variable and build artifacts"]
async fn test_profitable_harvest() {
    let Some(mut fixture) = fixture_or_skip().await else {
        return;
    };

    let report = scenario::profitable_harvest(&mut fixture, ProfitSource::TradingFees)
        .await
        .expect("Profitable harvest with trading fees failed");

    let last = report.checks.last().unwrap();
    assert_eq!(last.label, "profit parity");
    assert!(last.expected > U256::ZERO);
    assert!(last.actual > U256::ZERO);

    let router = fixture.router.address();
    for token in &fixture.tokens {
        let swapped = U256::from(SWAP_ROUNDS) * funding_amount(token.decimals);
        assert_eq!(
            token.client.allowance(fixture.actors.user, router).await.unwrap(),
            U256::from(SWAP_ALLOWANCE) - swapped,
            "router should have pulled every {} swap through the allowance",
            token.symbol
        );
    }
}

#[tokio::test]
#[ignore = "Requires ETH_RPC_URL environment variable and build artifacts"]
async fn test_profitable_harvest_from_transfer() {
    let Some(mut fixture) = fixture_or_skip().await else {
        return;
    };
    let amounts = fixture.amounts;

    scenario::profitable_harvest(&mut fixture, ProfitSource::Transfer)
        .await
        .expect("Profitable harvest with transferred profit failed");

    for ((vault, token), amount) in fixture.vaults.iter().zip(&fixture.tokens).zip(amounts) {
        assert_eq!(
            token.balance_of(vault.address()).await.unwrap(),
            transfer_profit(amount),
            "{} vault should hold exactly the transferred profit",
            token.symbol
        );
    }
}
