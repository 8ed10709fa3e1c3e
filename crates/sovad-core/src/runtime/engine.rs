// sovad-core/src/runtime/engine.rs
// ============================================================================
// Module: Sovad Decision Engine
// Description: Ruleset loading and deterministic evidence evaluation.
// Purpose: Produce reusable decision handles and classification evaluations.
// Dependencies: crate::core, serde, serde_json
// ============================================================================

//! ## Overview
//! The decision engine turns ruleset document bytes into a validated, hashed,
//! reusable [`Decision`] handle. Evaluation is pure and reentrant: a handle is
//! immutable after construction and safe to share across threads. Each
//! evaluation reports the final label together with a deterministic trace of
//! the rules that fired and the digest of the document that produced it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::EvidenceCounts;
use crate::core::Pathogenicity;
use crate::core::Polarity;
use crate::core::RuleId;
use crate::core::RulesetDigest;
use crate::core::RulesetError;
use crate::core::RulesetSpec;
use crate::core::digest::DigestError;

// ============================================================================
// SECTION: Decision Engine
// ============================================================================

/// Factory for decision handles built from ruleset documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    /// Creates a new decision engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses, validates, and hashes a ruleset document into a handle.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError`] when the document fails to parse, violates a
    /// ruleset invariant, or cannot be canonically digested.
    pub fn create_decision(&self, document: &[u8]) -> Result<Decision, DecisionError> {
        let ruleset: RulesetSpec = serde_json::from_slice(document)
            .map_err(|err| DecisionError::Parse(err.to_string()))?;
        self.create_decision_from_spec(ruleset)
    }

    /// Validates and hashes an already-parsed ruleset into a handle.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError`] when validation or digesting fails.
    pub fn create_decision_from_spec(
        &self,
        ruleset: RulesetSpec,
    ) -> Result<Decision, DecisionError> {
        ruleset.validate()?;
        let digest = ruleset.canonical_digest()?;
        Ok(Decision {
            ruleset,
            digest,
        })
    }
}

// ============================================================================
// SECTION: Decision Handle
// ============================================================================

/// Reusable, immutable decision handle over a validated ruleset.
#[derive(Debug, Clone)]
pub struct Decision {
    /// Validated ruleset document.
    ruleset: RulesetSpec,
    /// Canonical digest of the ruleset document.
    digest: RulesetDigest,
}

impl Decision {
    /// Returns the validated ruleset document.
    #[must_use]
    pub const fn ruleset(&self) -> &RulesetSpec {
        &self.ruleset
    }

    /// Returns the canonical digest of the ruleset document.
    #[must_use]
    pub const fn digest(&self) -> &RulesetDigest {
        &self.digest
    }

    /// Evaluates an evidence record into a classification.
    ///
    /// Every rule is tested against the record; the strongest firing verdict
    /// is taken independently per polarity side. When both sides fire the
    /// document's conflict verdict applies; when neither fires the default
    /// verdict applies.
    #[must_use]
    pub fn evaluate(&self, counts: &EvidenceCounts) -> Evaluation {
        let mut fired_rules = Vec::new();
        let mut benign_verdict: Option<Pathogenicity> = None;
        let mut pathogenic_verdict: Option<Pathogenicity> = None;

        for rule in &self.ruleset.rules {
            if !rule.fires(counts) {
                continue;
            }
            fired_rules.push(rule.rule_id.clone());
            match rule.verdict.polarity() {
                Some(Polarity::Benign) => {
                    benign_verdict = Some(stronger(benign_verdict, rule.verdict));
                }
                Some(Polarity::Pathogenic) => {
                    pathogenic_verdict = Some(stronger(pathogenic_verdict, rule.verdict));
                }
                // Validation rejects non-directional verdicts at load time.
                None => {}
            }
        }

        let pathogenicity = match (benign_verdict, pathogenic_verdict) {
            (Some(_), Some(_)) => self.ruleset.conflict_verdict,
            (Some(verdict), None) | (None, Some(verdict)) => verdict,
            (None, None) => self.ruleset.default_verdict,
        };

        Evaluation {
            pathogenicity,
            benign_verdict,
            pathogenic_verdict,
            fired_rules,
            ruleset_digest: self.digest.clone(),
        }
    }
}

/// Returns the stronger of the current side verdict and a candidate.
fn stronger(current: Option<Pathogenicity>, candidate: Pathogenicity) -> Pathogenicity {
    match current {
        Some(verdict) if verdict.strength() >= candidate.strength() => verdict,
        _ => candidate,
    }
}

// ============================================================================
// SECTION: Evaluation Result
// ============================================================================

/// Deterministic classification result for one evidence record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Final classification label.
    pub pathogenicity: Pathogenicity,
    /// Strongest benign-side verdict that fired, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benign_verdict: Option<Pathogenicity>,
    /// Strongest pathogenic-side verdict that fired, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathogenic_verdict: Option<Pathogenicity>,
    /// Identifiers of every rule that fired, in document order.
    pub fired_rules: Vec<RuleId>,
    /// Canonical digest of the ruleset document that produced this result.
    pub ruleset_digest: RulesetDigest,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while constructing a decision handle.
#[derive(Debug, Error)]
pub enum DecisionError {
    /// Ruleset document bytes failed to parse as JSON.
    #[error("failed to parse ruleset document: {0}")]
    Parse(String),
    /// Ruleset document violated a validation invariant.
    #[error(transparent)]
    Invalid(#[from] RulesetError),
    /// Ruleset document could not be canonically digested.
    #[error(transparent)]
    Digest(#[from] DigestError),
}
