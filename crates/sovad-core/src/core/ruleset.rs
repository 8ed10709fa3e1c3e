// sovad-core/src/core/ruleset.rs
// ============================================================================
// Module: Sovad Ruleset Specification
// Description: Ruleset document model, combining rules, and count bounds.
// Purpose: Define canonical Sovad ruleset documents with validation helpers.
// Dependencies: crate::core::{criteria, digest, identifiers, pathogenicity}, serde
// ============================================================================

//! ## Overview
//! A ruleset document encodes the ACMG-style classification policy as an
//! ordered decision table of combining rules. Each rule couples a directional
//! verdict with a conjunction of count bounds over evidence criteria.
//! Documents are validated at load time to fail closed on malformed policies.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::criteria::Criterion;
use crate::core::criteria::EvidenceCounts;
use crate::core::digest::DEFAULT_DIGEST_ALGORITHM;
use crate::core::digest::DigestAlgorithm;
use crate::core::digest::DigestError;
use crate::core::digest::RulesetDigest;
use crate::core::identifiers::RuleId;
use crate::core::identifiers::RulesetId;
use crate::core::identifiers::RulesetVersion;
use crate::core::pathogenicity::Pathogenicity;

// ============================================================================
// SECTION: Count Bounds
// ============================================================================

/// Inclusive bound on the count of a single evidence criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBound {
    /// Criterion the bound applies to.
    pub criterion: Criterion,
    /// Minimum count required for the bound to hold.
    pub min: u32,
    /// Optional maximum count allowed for the bound to hold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl CountBound {
    /// Returns true when the bound holds against an evidence record.
    ///
    /// Criteria absent from the record count zero.
    #[must_use]
    pub fn holds(&self, counts: &EvidenceCounts) -> bool {
        let count = counts.count(self.criterion);
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

// ============================================================================
// SECTION: Combining Rules
// ============================================================================

/// Single combining rule mapping a conjunction of bounds to a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombiningRule {
    /// Stable identifier for the rule, unique within the document.
    pub rule_id: RuleId,
    /// Verdict produced when the rule fires. Must be directional.
    pub verdict: Pathogenicity,
    /// Count bounds that must all hold for the rule to fire.
    pub when: Vec<CountBound>,
}

impl CombiningRule {
    /// Returns true when every bound holds against an evidence record.
    #[must_use]
    pub fn fires(&self, counts: &EvidenceCounts) -> bool {
        self.when.iter().all(|bound| bound.holds(counts))
    }
}

// ============================================================================
// SECTION: Ruleset Specification
// ============================================================================

/// Canonical ruleset document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetSpec {
    /// Ruleset identifier.
    pub ruleset_id: RulesetId,
    /// Ruleset version identifier.
    pub version: RulesetVersion,
    /// Verdict returned when no rule fires.
    pub default_verdict: Pathogenicity,
    /// Verdict returned when both polarity sides fire.
    pub conflict_verdict: Pathogenicity,
    /// Combining rules in document order.
    pub rules: Vec<CombiningRule>,
}

impl RulesetSpec {
    /// Computes the canonical digest of the ruleset document.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Canonicalization`] when serialization fails.
    pub fn canonical_digest(&self) -> Result<RulesetDigest, DigestError> {
        crate::core::digest::digest_canonical_json(DEFAULT_DIGEST_ALGORITHM, self)
    }

    /// Computes the canonical digest using a specific algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Canonicalization`] when serialization fails.
    pub fn canonical_digest_with(
        &self,
        algorithm: DigestAlgorithm,
    ) -> Result<RulesetDigest, DigestError> {
        crate::core::digest::digest_canonical_json(algorithm, self)
    }

    /// Validates the ruleset document invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RulesetError`] when validation fails.
    pub fn validate(&self) -> Result<(), RulesetError> {
        if self.rules.is_empty() {
            return Err(RulesetError::MissingRules);
        }

        ensure_unique_rule_ids(&self.rules)?;
        ensure_rules_directional(&self.rules)?;
        ensure_bounds_well_formed(&self.rules)?;
        ensure_bounds_match_verdict_polarity(&self.rules)?;

        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Ruleset document validation errors.
#[derive(Debug, Error)]
pub enum RulesetError {
    /// Document contains no combining rules.
    #[error("ruleset must define at least one combining rule")]
    MissingRules,
    /// Duplicate rule identifiers detected.
    #[error("duplicate rule identifier: {0}")]
    DuplicateRuleId(String),
    /// Rule has no count bounds.
    #[error("rule {0} has an empty bound list")]
    EmptyBounds(String),
    /// Rule verdict is the uncertain label.
    #[error("rule {0} must carry a directional verdict")]
    UncertainVerdict(String),
    /// Bound can never constrain anything (zero minimum, no maximum).
    #[error("rule {0} has a vacuous bound on {1}")]
    VacuousBound(String, Criterion),
    /// Bound minimum exceeds its maximum.
    #[error("rule {0} has an inverted bound on {1}")]
    InvertedBound(String, Criterion),
    /// Bound criterion polarity disagrees with the rule verdict.
    #[error("rule {0} bounds {1} against a verdict of opposite polarity")]
    PolarityMismatch(String, Criterion),
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Ensures rule identifiers are unique within the document.
fn ensure_unique_rule_ids(rules: &[CombiningRule]) -> Result<(), RulesetError> {
    for (index, rule) in rules.iter().enumerate() {
        if rules.iter().skip(index + 1).any(|other| other.rule_id == rule.rule_id) {
            return Err(RulesetError::DuplicateRuleId(rule.rule_id.to_string()));
        }
    }
    Ok(())
}

/// Ensures every rule carries a directional verdict.
fn ensure_rules_directional(rules: &[CombiningRule]) -> Result<(), RulesetError> {
    for rule in rules {
        if rule.verdict.polarity().is_none() {
            return Err(RulesetError::UncertainVerdict(rule.rule_id.to_string()));
        }
    }
    Ok(())
}

/// Ensures bounds are non-empty, non-vacuous, and internally consistent.
fn ensure_bounds_well_formed(rules: &[CombiningRule]) -> Result<(), RulesetError> {
    for rule in rules {
        if rule.when.is_empty() {
            return Err(RulesetError::EmptyBounds(rule.rule_id.to_string()));
        }
        for bound in &rule.when {
            if bound.min == 0 && bound.max.is_none() {
                return Err(RulesetError::VacuousBound(rule.rule_id.to_string(), bound.criterion));
            }
            if let Some(max) = bound.max
                && bound.min > max
            {
                return Err(RulesetError::InvertedBound(rule.rule_id.to_string(), bound.criterion));
            }
        }
    }
    Ok(())
}

/// Ensures bounded criteria share the polarity of the rule verdict.
///
/// A rule reads only its own side's counts; cross-side constraints would make
/// the per-side combination in the runtime ambiguous.
fn ensure_bounds_match_verdict_polarity(rules: &[CombiningRule]) -> Result<(), RulesetError> {
    for rule in rules {
        let Some(polarity) = rule.verdict.polarity() else {
            continue;
        };
        for bound in &rule.when {
            if bound.criterion.polarity() != polarity {
                return Err(RulesetError::PolarityMismatch(
                    rule.rule_id.to_string(),
                    bound.criterion,
                ));
            }
        }
    }
    Ok(())
}
