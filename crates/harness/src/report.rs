//! Checks performed by a scenario and the report collecting them.

use alloy_primitives::U256;
use serde::{Serialize, Serializer};

use crate::approx::RelativeTolerance;
use crate::error::{HarnessError, Result};

/// Which side of an approximate check the tolerance is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceBase {
    Expected,
    Actual,
}

impl std::fmt::Display for ToleranceBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToleranceBase::Expected => f.write_str("expected"),
            ToleranceBase::Actual => f.write_str("actual"),
        }
    }
}

/// How an observed amount is compared with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckRule {
    Exact,
    /// Within `rel` of whichever amount `base` names.
    Approx { rel: RelativeTolerance, base: ToleranceBase },
    /// Strictly greater than zero; `expected` is unused.
    Positive,
}

impl CheckRule {
    pub fn holds(self, expected: U256, actual: U256) -> bool {
        match self {
            CheckRule::Exact => actual == expected,
            CheckRule::Approx {
                rel,
                base: ToleranceBase::Expected,
            } => rel.approx_eq(expected, actual),
            CheckRule::Approx {
                rel,
                base: ToleranceBase::Actual,
            } => rel.approx_eq(actual, expected),
            CheckRule::Positive => !actual.is_zero(),
        }
    }
}

impl std::fmt::Display for CheckRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckRule::Exact => f.write_str("exact"),
            CheckRule::Approx { rel, base } => write!(f, "approx {} of {}", rel, base),
            CheckRule::Positive => f.write_str("> 0"),
        }
    }
}

/// One passed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRecord {
    pub label: String,
    pub rule: CheckRule,
    #[serde(serialize_with = "as_decimal")]
    pub expected: U256,
    #[serde(serialize_with = "as_decimal")]
    pub actual: U256,
}

/// Everything a scenario checked, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub checks: Vec<CheckRecord>,
}

impl ScenarioReport {
    pub fn new(scenario: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            checks: Vec::new(),
        }
    }

    /// Record a check, or fail with [`HarnessError::CheckFailed`] if it does
    /// not hold.
    pub fn check(
        &mut self,
        label: impl Into<String>,
        rule: CheckRule,
        expected: U256,
        actual: U256,
    ) -> Result<()> {
        let label = label.into();
        if !rule.holds(expected, actual) {
            tracing::error!(check = %label, %rule, %expected, %actual, "check failed");
            return Err(HarnessError::CheckFailed {
                check: label,
                rule,
                expected,
                actual,
            });
        }

        tracing::debug!(check = %label, %rule, %actual, "check passed");
        self.checks.push(CheckRecord {
            label,
            rule,
            expected,
            actual,
        });
        Ok(())
    }

    pub fn check_exact(&mut self, label: impl Into<String>, expected: U256, actual: U256) -> Result<()> {
        self.check(label, CheckRule::Exact, expected, actual)
    }

    pub fn check_approx(
        &mut self,
        label: impl Into<String>,
        rel: RelativeTolerance,
        base: ToleranceBase,
        expected: U256,
        actual: U256,
    ) -> Result<()> {
        self.check(label, CheckRule::Approx { rel, base }, expected, actual)
    }

    pub fn check_positive(&mut self, label: impl Into<String>, actual: U256) -> Result<()> {
        self.check(label, CheckRule::Positive, U256::ZERO, actual)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

fn as_decimal<S: Serializer>(value: &U256, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
