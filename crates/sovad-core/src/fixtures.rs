// sovad-core/src/fixtures.rs
// ============================================================================
// Module: Sovad Expected-Evaluation Tables
// Description: Ordered expected-classification tables and flattening.
// Purpose: Shared vocabulary for acceptance suites over sampled records.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! An expected-evaluation table groups sampled evidence records under the
//! label they must classify to. Flattening turns the grouped table into an
//! ordered list of single cases while preserving table order and case count.
//! The table samples equivalence classes only; it is not an exhaustive
//! specification of the classification function.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::EvidenceCounts;
use crate::core::Pathogenicity;

// ============================================================================
// SECTION: Table Types
// ============================================================================

/// Group of sampled records expected to classify to one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedGroup {
    /// Expected classification label for every record in the group.
    pub pathogenicity: Pathogenicity,
    /// Sampled evidence records in table order.
    pub cases: Vec<EvidenceCounts>,
}

/// Single expected-classification case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedCase {
    /// Evidence record to classify.
    pub counts: EvidenceCounts,
    /// Expected classification label.
    pub pathogenicity: Pathogenicity,
}

// ============================================================================
// SECTION: Flattening
// ============================================================================

/// Flattens a grouped expected table into an ordered case list.
///
/// The output length equals the sum of group lengths, and the nth case
/// carries the label of the group that contained the nth record scanned in
/// table order.
#[must_use]
pub fn flatten_expected(groups: &[ExpectedGroup]) -> Vec<ExpectedCase> {
    groups
        .iter()
        .flat_map(|group| {
            group.cases.iter().map(|counts| ExpectedCase {
                counts: counts.clone(),
                pathogenicity: group.pathogenicity,
            })
        })
        .collect()
}
