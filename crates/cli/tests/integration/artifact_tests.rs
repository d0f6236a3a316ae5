//! Failures loading build artifacts.
//!
//! Artifacts are read before Anvil is spawned, so these run without a node
//! or network access.

use predicates::prelude::*;
use tempfile::tempdir;

use super::helpers::{pairvault_cmd, write_artifact};

const UNREACHABLE_RPC: &str = "http://127.0.0.1:1";

#[test]
fn test_missing_vault_artifact() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("Vault.json");

    pairvault_cmd()
        .args(["operation", "--rpc-url", UNREACHABLE_RPC, "--vault-artifact"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to set up the vault pair fixture"))
        .stderr(predicate::str::contains("Invalid artifact"));
}

#[test]
fn test_unlinked_strategy_artifact() {
    let dir = tempdir().unwrap();
    let vault = write_artifact(dir.path(), "Vault.json", r#"{"contractName": "Vault", "bytecode": "0x6080"}"#);
    let strategy = write_artifact(
        dir.path(),
        "Strategy.json",
        r#"{"bytecode": {"object": "0x6080__$0123456789abcdef0123456789abcdef01$__"}}"#,
    );

    pairvault_cmd()
        .args(["profitable-harvest", "--rpc-url", UNREACHABLE_RPC, "--vault-artifact"])
        .arg(&vault)
        .arg("--strategy-artifact")
        .arg(&strategy)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bytecode is not hex"));
}

#[test]
fn test_empty_bytecode_artifact() {
    let dir = tempdir().unwrap();
    let vault = write_artifact(dir.path(), "Vault.json", r#"{"contractName": "IVault", "bytecode": "0x"}"#);

    pairvault_cmd()
        .env("VAULT_ARTIFACT", &vault)
        .args(["operation", "--rpc-url", UNREACHABLE_RPC])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty bytecode"));
}
