// sovad-cli/tests/classify_commands.rs
// ============================================================================
// Module: CLI Command Tests
// Description: Integration tests for validate, hash, and classify workflows.
// Purpose: Ensure the binary reports results and fails closed on bad input.
// Dependencies: sovad binary, rules/sovad_rules.json
// ============================================================================
//! ## Overview
//! Runs the CLI binary against the shipped ruleset document and ensures
//! malformed documents and records fail closed with explicit errors.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Shipped ruleset document bytes.
const RULESET_DOCUMENT: &str = include_str!("../../../rules/sovad_rules.json");

fn sovad_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sovad"))
}

fn temp_root(label: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock drift").as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("sovad-cli-{label}-{nanos}"));
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

fn write_ruleset(root: &PathBuf) -> PathBuf {
    let path = root.join("sovad_rules.json");
    fs::write(&path, RULESET_DOCUMENT).expect("write ruleset");
    path
}

fn cleanup(path: &PathBuf) {
    let _ = fs::remove_dir_all(path);
}

// ============================================================================
// SECTION: Validate and Hash
// ============================================================================

/// Verifies validation succeeds for the shipped ruleset document.
#[test]
fn cli_validate_accepts_shipped_ruleset() {
    let root = temp_root("validate-ok");
    let rules = write_ruleset(&root);

    let output = Command::new(sovad_bin())
        .args(["validate", "--rules", rules.to_string_lossy().as_ref()])
        .output()
        .expect("validate");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sovad-acmg-2015"));
    assert!(stdout.contains("is valid"));
    cleanup(&root);
}

/// Verifies validation fails closed on a malformed document.
#[test]
fn cli_validate_rejects_malformed_document() {
    let root = temp_root("validate-bad");
    let rules = root.join("broken.json");
    fs::write(&rules, "{not json").expect("write ruleset");

    let output = Command::new(sovad_bin())
        .args(["validate", "--rules", rules.to_string_lossy().as_ref()])
        .output()
        .expect("validate");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load ruleset"));
    cleanup(&root);
}

/// Verifies the hash command prints a stable hex digest.
#[test]
fn cli_hash_prints_stable_digest() {
    let root = temp_root("hash");
    let rules = write_ruleset(&root);

    let first = Command::new(sovad_bin())
        .args(["hash", "--rules", rules.to_string_lossy().as_ref()])
        .output()
        .expect("hash");
    let second = Command::new(sovad_bin())
        .args(["hash", "--rules", rules.to_string_lossy().as_ref()])
        .output()
        .expect("hash");

    assert!(first.status.success());
    let digest = String::from_utf8_lossy(&first.stdout).trim().to_string();
    assert_eq!(digest.len(), 64);
    assert_eq!(first.stdout, second.stdout);
    cleanup(&root);
}

// ============================================================================
// SECTION: Classify
// ============================================================================

/// Verifies inline classification reports the expected label.
#[test]
fn cli_classify_reports_expected_label() {
    let root = temp_root("classify-inline");
    let rules = write_ruleset(&root);

    let output = Command::new(sovad_bin())
        .args([
            "classify",
            "--rules",
            rules.to_string_lossy().as_ref(),
            "--counts",
            r#"{"PVS": 1, "PM": 1}"#,
        ])
        .output()
        .expect("classify");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"pathogenicity\": \"Likely pathogenic\""));
    assert!(stdout.contains("lp.pvs-pm"));
    cleanup(&root);
}

/// Verifies file-based classification matches inline classification.
#[test]
fn cli_classify_accepts_counts_file() {
    let root = temp_root("classify-file");
    let rules = write_ruleset(&root);
    let counts = root.join("counts.json");
    fs::write(&counts, r#"{"PA": 1}"#).expect("write counts");

    let output = Command::new(sovad_bin())
        .args([
            "classify",
            "--rules",
            rules.to_string_lossy().as_ref(),
            "--counts-file",
            counts.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("classify");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"pathogenicity\": \"Pathogenic\""));
    cleanup(&root);
}

/// Verifies malformed evidence records fail closed.
#[test]
fn cli_classify_rejects_unknown_criterion() {
    let root = temp_root("classify-bad");
    let rules = write_ruleset(&root);

    let output = Command::new(sovad_bin())
        .args([
            "classify",
            "--rules",
            rules.to_string_lossy().as_ref(),
            "--counts",
            r#"{"XX": 1}"#,
        ])
        .output()
        .expect("classify");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse evidence counts"));
    cleanup(&root);
}

/// Verifies classification without a counts input fails closed.
#[test]
fn cli_classify_requires_counts_input() {
    let root = temp_root("classify-missing");
    let rules = write_ruleset(&root);

    let output = Command::new(sovad_bin())
        .args(["classify", "--rules", rules.to_string_lossy().as_ref()])
        .output()
        .expect("classify");

    assert!(!output.status.success());
    cleanup(&root);
}
