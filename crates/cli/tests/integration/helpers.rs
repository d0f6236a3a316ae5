//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use pairvault_harness::config;

/// Environment variables the CLI and the fork config read.
const CLI_ENV: [&str; 8] = [
    config::ETH_RPC_URL,
    config::FORK_BLOCK_NUMBER,
    config::VAULT_ARTIFACT,
    config::STRATEGY_ARTIFACT,
    config::ANVIL_COMPUTE_UNITS_PER_SECOND,
    config::ANVIL_RETRIES,
    config::ANVIL_FORK_RETRY_BACKOFF,
    config::ANVIL_TIMEOUT,
];

/// Create a CLI command that ignores the caller's environment.
pub fn pairvault_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pairvault").unwrap();
    for name in CLI_ENV {
        cmd.env_remove(name);
    }
    cmd
}

/// Write an artifact file into `dir` and return its path.
pub fn write_artifact(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
