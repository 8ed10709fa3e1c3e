// sovad-core/tests/digest.rs
// ============================================================================
// Module: Canonical Digest Tests
// Description: Tests for RFC 8785 canonical digesting of ruleset documents.
// Purpose: Ensure digests ignore formatting and track document content.
// Dependencies: sovad-core, serde_json
// ============================================================================
//! ## Overview
//! Verifies digest shape, formatting-independence of canonical digests, and
//! sensitivity to document content changes.

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

use sovad_core::DigestAlgorithm;
use sovad_core::RulesetSpec;
use sovad_core::RulesetVersion;
use sovad_core::digest::digest_bytes;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Compact ruleset document.
const COMPACT_DOCUMENT: &str = r#"{"ruleset_id":"digest-test","version":"1","default_verdict":"Uncertain significance","conflict_verdict":"Uncertain significance","rules":[{"rule_id":"b.ba","verdict":"Benign","when":[{"criterion":"BA","min":1}]}]}"#;

/// Same document with reordered keys and extra whitespace.
const REFORMATTED_DOCUMENT: &str = r#"{
  "version": "1",
  "ruleset_id": "digest-test",
  "conflict_verdict": "Uncertain significance",
  "default_verdict": "Uncertain significance",
  "rules": [
    { "when": [ { "min": 1, "criterion": "BA" } ], "verdict": "Benign", "rule_id": "b.ba" }
  ]
}"#;

fn parse(document: &str) -> RulesetSpec {
    serde_json::from_str(document).expect("parse ruleset")
}

// ============================================================================
// SECTION: Digest Shape
// ============================================================================

/// Verifies byte digests are lowercase hex of the expected width.
#[test]
fn digest_bytes_produces_lowercase_hex() {
    let digest = digest_bytes(DigestAlgorithm::Sha256, b"sovad");
    assert_eq!(digest.algorithm, DigestAlgorithm::Sha256);
    assert_eq!(digest.value.len(), 64);
    assert!(digest.value.chars().all(|ch| ch.is_ascii_hexdigit()));
    assert_eq!(digest.value, digest.value.to_lowercase());
}

// ============================================================================
// SECTION: Canonicalization
// ============================================================================

/// Verifies formatting and key order never change the canonical digest.
#[test]
fn canonical_digest_ignores_formatting_and_key_order() {
    let compact = parse(COMPACT_DOCUMENT).canonical_digest().expect("digest");
    let reformatted = parse(REFORMATTED_DOCUMENT).canonical_digest().expect("digest");
    assert_eq!(compact, reformatted);
}

/// Verifies content changes move the canonical digest.
#[test]
fn canonical_digest_tracks_document_content() {
    let original = parse(COMPACT_DOCUMENT);
    let mut bumped = original.clone();
    bumped.version = RulesetVersion::new("2");

    let first = original.canonical_digest().expect("digest");
    let second = bumped.canonical_digest().expect("digest");
    assert_ne!(first.value, second.value);
}
