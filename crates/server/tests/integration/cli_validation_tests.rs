//! CLI argument validation tests.
//!
//! These tests verify that the binary rejects bad configuration before it
//! binds a socket, without requiring network access.

use predicates::prelude::*;

use super::helpers::{fixture_path, ydaemon_cmd};

#[test]
fn test_help_output() {
    ydaemon_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--subgraph"))
        .stdout(predicate::str::contains("--blacklist"))
        .stdout(predicate::str::contains("--reference-snapshot"))
        .stdout(predicate::str::contains("YDAEMON_SUBGRAPHS"));
}

#[test]
fn test_version_output() {
    ydaemon_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ydaemon"));
}

#[test]
fn test_malformed_subgraph_pair() {
    ydaemon_cmd()
        .args(["--subgraph", "https://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_malformed_blacklist_address() {
    ydaemon_cmd()
        .args(["--subgraph", "1=https://example.com", "--blacklist", "1=0x1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_port() {
    ydaemon_cmd()
        .args(["--subgraph", "1=https://example.com", "--port", "70000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_no_subgraph_configured() {
    ydaemon_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("At least one subgraph"));
}

#[test]
fn test_missing_reference_snapshot() {
    ydaemon_cmd()
        .args([
            "--subgraph",
            "1=https://example.com",
            "--reference-snapshot",
            "/nonexistent/reference.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference snapshot"));
}

#[test]
fn test_bad_chain_key_in_reference_snapshot() {
    // The vault fixture is valid JSON but not keyed by chain ID
    ydaemon_cmd()
        .args([
            "--subgraph",
            "1=https://example.com",
            "--reference-snapshot",
            &fixture_path("vault_null"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference snapshot"));
}
