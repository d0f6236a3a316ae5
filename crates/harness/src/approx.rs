//! Relative tolerance comparison on token amounts.
//!
//! Amounts stay as integers. The tolerance is a [`Decimal`], so the check is
//! done as `|value - reference| * 10^scale <= mantissa * reference` in `U256`
//! and no precision is lost to floating point.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::Serialize;

/// A non-negative tolerance relative to a reference amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RelativeTolerance(Decimal);

impl RelativeTolerance {
    /// `1e-5`, used for balance checks.
    pub const DEFAULT: Self = Self(Decimal::from_parts(1, 0, 0, false, 5));

    /// `1e-3`, used when comparing profits between the two vaults.
    pub const PROFIT_PARITY: Self = Self(Decimal::from_parts(1, 0, 0, false, 3));

    /// Returns `None` for negative tolerances.
    pub fn new(rel: Decimal) -> Option<Self> {
        if rel.is_sign_negative() && !rel.is_zero() {
            return None;
        }
        Some(Self(rel))
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    /// Whether `value` lies within this tolerance of `reference`, the
    /// bound being `rel * reference`.
    ///
    /// A `reference` of zero only matches a `value` of zero.
    pub fn approx_eq(self, reference: U256, value: U256) -> bool {
        let diff = if value > reference {
            value - reference
        } else {
            reference - value
        };
        if diff.is_zero() {
            return true;
        }

        // mantissa is non-negative and at most 96 bits
        let mantissa = U256::from(self.0.mantissa().unsigned_abs());
        let denominator = U256::from(10u64).pow(U256::from(self.0.scale()));

        match (diff.checked_mul(denominator), mantissa.checked_mul(reference)) {
            (Some(lhs), Some(rhs)) => lhs <= rhs,
            // the bound alone overflows, so any representable diff is inside it
            (Some(_), None) => true,
            // scale both sides down; only reachable with amounts near U256::MAX
            (None, _) => {
                if mantissa.is_zero() {
                    return false;
                }
                diff / mantissa <= reference / denominator
            }
        }
    }
}

impl Default for RelativeTolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for RelativeTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rel {}", self.0)
    }
}
