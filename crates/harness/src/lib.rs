//! Fork harness for a yield strategy shared by two vaults.
//!
//! Spawns an Anvil fork of Ethereum mainnet, deploys a USDT vault, a USDC
//! vault and one strategy bound to both, funds the test accounts from known
//! token holders and drives the operation scenarios, recording every balance
//! check in a [`ScenarioReport`].
//!
//! # Example
//!
//! ```no_run
//! use pairvault_harness::{scenario, Fixture, HarnessConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pairvault_harness::HarnessError> {
//!     let config = HarnessConfig::from_env()?;
//!     let mut fixture = Fixture::setup(&config).await?;
//!
//!     let report = scenario::basic_operation(&mut fixture).await?;
//!     for check in &report.checks {
//!         tracing::info!(label = %check.label, actual = %check.actual, "passed");
//!     }
//!     Ok(())
//! }
//! ```

pub mod actors;
pub mod approx;
pub mod chain;
pub mod config;
pub mod error;
pub mod fixture;
pub mod report;
pub mod scenario;
pub mod tokens;

pub use actors::{Actors, Role, GOVERNANCE};
pub use approx::RelativeTolerance;
pub use chain::Chain;
pub use config::{ArtifactConfig, ForkConfig, HarnessConfig};
pub use error::{HarnessError, Result};
pub use fixture::Fixture;
pub use report::{CheckRecord, CheckRule, ScenarioReport, ToleranceBase};
pub use scenario::ProfitSource;
pub use tokens::{Token, TokenSpec, TOKEN_PAIR};
