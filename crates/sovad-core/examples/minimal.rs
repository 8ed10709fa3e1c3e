// crates/sovad-core/examples/minimal.rs
// ============================================================================
// Module: Sovad Minimal Example
// Description: Minimal end-to-end classification using the shipped ruleset.
// Purpose: Demonstrate decision creation and evidence evaluation.
// Dependencies: sovad-core
// ============================================================================

//! ## Overview
//! Loads the shipped ruleset document, evaluates one evidence record, and
//! prints the resulting evaluation as JSON.

#![allow(clippy::print_stdout, reason = "Example output goes to stdout.")]

use sovad_core::Criterion;
use sovad_core::DecisionEngine;
use sovad_core::EvidenceCounts;

/// Shipped ruleset document bytes.
const RULESET_DOCUMENT: &str = include_str!("../../../rules/sovad_rules.json");

/// Classifies a PVS1 + PM1 record against the shipped ruleset.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let decision = DecisionEngine::new().create_decision(RULESET_DOCUMENT.as_bytes())?;

    let record = EvidenceCounts::new().with(Criterion::Pvs, 1).with(Criterion::Pm, 1);
    let evaluation = decision.evaluate(&record);

    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}
