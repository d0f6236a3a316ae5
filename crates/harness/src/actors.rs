//! Role-labeled accounts.

use alloy::primitives::{address, Address};
use serde::Serialize;

use crate::chain::Chain;
use crate::error::{HarnessError, Result};

/// Mainnet governance multisig, impersonated on the fork.
pub const GOVERNANCE: Address = address!("FEB4acf3df3cDEA7399794D0869ef76A6EfAff52");

/// What an account is used for in the fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Governance,
    User,
    Rewards,
    Guardian,
    Management,
    Strategist,
    Keeper,
}

impl Role {
    /// Roles taken from the dev account pool, in pool index order.
    pub const POOL_ROLES: [Role; 6] = [
        Role::User,
        Role::Rewards,
        Role::Guardian,
        Role::Management,
        Role::Strategist,
        Role::Keeper,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Governance => "governance",
            Role::User => "user",
            Role::Rewards => "rewards",
            Role::Guardian => "guardian",
            Role::Management => "management",
            Role::Strategist => "strategist",
            Role::Keeper => "keeper",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One address per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actors {
    pub governance: Address,
    pub user: Address,
    pub rewards: Address,
    pub guardian: Address,
    pub management: Address,
    pub strategist: Address,
    pub keeper: Address,
}

impl Actors {
    /// Assign pool accounts to roles by index; governance comes from outside
    /// the pool.
    pub fn from_pool(pool: &[Address], governance: Address) -> Result<Self> {
        let needed = Role::POOL_ROLES.len();
        if pool.len() < needed {
            return Err(HarnessError::AccountPoolExhausted {
                needed,
                available: pool.len(),
            });
        }

        Ok(Self {
            governance,
            user: pool[0],
            rewards: pool[1],
            guardian: pool[2],
            management: pool[3],
            strategist: pool[4],
            keeper: pool[5],
        })
    }

    /// Allocate the roles on `chain` and impersonate mainnet governance.
    pub async fn provision(chain: &Chain) -> Result<Self> {
        let actors = Self::from_pool(chain.accounts(), GOVERNANCE)?;
        chain.impersonate(actors.governance).await?;

        for role in Role::POOL_ROLES {
            tracing::debug!(%role, address = %actors.get(role), "actor");
        }
        Ok(actors)
    }

    pub fn get(&self, role: Role) -> Address {
        match role {
            Role::Governance => self.governance,
            Role::User => self.user,
            Role::Rewards => self.rewards,
            Role::Guardian => self.guardian,
            Role::Management => self.management,
            Role::Strategist => self.strategist,
            Role::Keeper => self.keeper,
        }
    }
}
