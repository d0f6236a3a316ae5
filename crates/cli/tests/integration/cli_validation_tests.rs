//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::pairvault_cmd;

#[test]
fn test_help_output() {
    pairvault_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pairvault"))
        .stdout(predicate::str::contains("operation"))
        .stdout(predicate::str::contains("profitable-harvest"));
}

#[test]
fn test_operation_help_lists_flags() {
    pairvault_cmd()
        .args(["operation", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--rpc-url"))
        .stdout(predicate::str::contains("--fork-block"))
        .stdout(predicate::str::contains("--vault-artifact"))
        .stdout(predicate::str::contains("--strategy-artifact"));
}

#[test]
fn test_profitable_harvest_help_lists_profit_sources() {
    pairvault_cmd()
        .args(["profitable-harvest", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--profit-source"))
        .stdout(predicate::str::contains("trading-fees"))
        .stdout(predicate::str::contains("transfer"));
}

#[test]
fn test_invalid_command() {
    pairvault_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_missing_command() {
    pairvault_cmd().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_operation_requires_rpc_url() {
    pairvault_cmd()
        .arg("operation")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"))
        .stderr(predicate::str::contains("--rpc-url"));
}

#[test]
fn test_invalid_profit_source() {
    pairvault_cmd()
        .args([
            "profitable-harvest",
            "--rpc-url",
            "http://127.0.0.1:8545",
            "--profit-source",
            "airdrop",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_format() {
    pairvault_cmd()
        .args(["--format", "xml", "operation", "--rpc-url", "http://127.0.0.1:8545"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_fork_block() {
    pairvault_cmd()
        .args(["operation", "--rpc-url", "http://127.0.0.1:8545", "--fork-block", "latest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_anvil_env_is_reported() {
    pairvault_cmd()
        .args(["operation", "--rpc-url", "http://127.0.0.1:8545"])
        .env("ANVIL_RETRIES", "five")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for ANVIL_RETRIES"));
}
