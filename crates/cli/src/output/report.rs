//! Table and summary formatting for scenario reports.

use colored::Colorize;
use pairvault_harness::{CheckRecord, CheckRule, ScenarioReport};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "Check")]
    label: String,
    #[tabled(rename = "Rule")]
    rule: String,
    #[tabled(rename = "Expected")]
    expected: String,
    #[tabled(rename = "Actual")]
    actual: String,
}

impl From<&CheckRecord> for CheckRow {
    fn from(check: &CheckRecord) -> Self {
        let expected = match check.rule {
            CheckRule::Positive => "-".to_string(),
            _ => check.expected.to_string(),
        };

        Self {
            label: check.label.clone(),
            rule: check.rule.to_string(),
            expected,
            actual: check.actual.to_string(),
        }
    }
}

pub fn format_report_table(report: &ScenarioReport) -> String {
    if report.is_empty() {
        return "No checks recorded.".to_string();
    }

    let rows: Vec<CheckRow> = report.checks.iter().map(CheckRow::from).collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}

/// One line naming the scenario and how many checks passed.
pub fn format_report_summary(report: &ScenarioReport) -> String {
    format!(
        "{} {}: {} checks passed",
        "PASS".green().bold(),
        report.scenario.bold(),
        report.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use pairvault_harness::{RelativeTolerance, ToleranceBase};

    fn report() -> ScenarioReport {
        let mut report = ScenarioReport::new("profitable_harvest");
        report
            .check_exact(
                "USDT vault balance after deposit",
                U256::from(10_000_000_000u64),
                U256::from(10_000_000_000u64),
            )
            .unwrap();
        report
            .check_approx(
                "estimated USDT assets",
                RelativeTolerance::DEFAULT,
                ToleranceBase::Actual,
                U256::from(10_000_000_000u64),
                U256::from(9_999_999_000u64),
            )
            .unwrap();
        report.check_positive("USDC vault profit", U256::from(12_345u64)).unwrap();
        report
    }

    #[test]
    fn test_table_lists_every_check() {
        let table = format_report_table(&report());

        assert!(table.contains("Check"));
        assert!(table.contains("USDT vault balance after deposit"));
        assert!(table.contains("approx rel 0.00001 of actual"));
        assert!(table.contains("9999999000"));
        assert!(table.contains("> 0"));
    }

    #[test]
    fn test_positive_check_has_no_expected_value() {
        let report = report();
        let row = CheckRow::from(&report.checks[2]);
        assert_eq!(row.expected, "-");
        assert_eq!(row.actual, "12345");

        let record: &CheckRecord = &report.checks[0];
        assert_eq!(CheckRow::from(record).expected, "10000000000");
    }

    #[test]
    fn test_empty_report() {
        let report = ScenarioReport::new("operation");
        assert_eq!(format_report_table(&report), "No checks recorded.");
    }

    #[test]
    fn test_summary() {
        colored::control::set_override(false);
        assert_eq!(
            format_report_summary(&report()),
            "PASS profitable_harvest: 3 checks passed"
        );
    }
}
