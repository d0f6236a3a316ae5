//! Scenario commands: set up a fresh fixture, run one scenario, print the
//! report.

use anyhow::{Context, Result};
use pairvault_harness::{scenario, Fixture, ScenarioReport};

use crate::cli::{OutputFormat, ProfitableHarvestArgs, RunArgs};
use crate::output::{format_report_summary, format_report_table};

async fn setup(args: &RunArgs) -> Result<Fixture> {
    let config = args.harness_config()?;
    Fixture::setup(&config)
        .await
        .context("Failed to set up the vault pair fixture")
}

pub async fn run_operation(args: &RunArgs, format: OutputFormat) -> Result<()> {
    let mut fixture = setup(args).await?;
    let report = scenario::basic_operation(&mut fixture)
        .await
        .context("Operation scenario failed")?;

    print_report(&report, format)
}

pub async fn run_profitable_harvest(args: &ProfitableHarvestArgs, format: OutputFormat) -> Result<()> {
    let mut fixture = setup(&args.run).await?;
    let report = scenario::profitable_harvest(&mut fixture, args.profit_source.into())
        .await
        .context("Profitable harvest scenario failed")?;

    print_report(&report, format)
}

fn print_report(report: &ScenarioReport, format: OutputFormat) -> Result<()> {
    tracing::info!(scenario = %report.scenario, checks = report.len(), "scenario passed");

    match format {
        OutputFormat::Table => {
            println!("{}", format_report_table(report));
            println!("{}", format_report_summary(report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            println!("{}", json);
        }
    }

    Ok(())
}
