// sovad-core/src/core/criteria.rs
// ============================================================================
// Module: Sovad Evidence Criteria
// Description: ACMG evidence-criterion codes and per-variant count records.
// Purpose: Provide the canonical classification input model for Sovad.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Evidence criteria are the closed set of ACMG/AMP strength-tier codes that
//! classification rules combine. An [`EvidenceCounts`] record maps criteria to
//! non-negative counts; criteria absent from a record implicitly count zero.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Polarity
// ============================================================================

/// Direction of an evidence criterion or classification verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Evidence supporting a benign interpretation.
    Benign,
    /// Evidence supporting a pathogenic interpretation.
    Pathogenic,
}

// ============================================================================
// SECTION: Criteria
// ============================================================================

/// Closed set of ACMG/AMP evidence-criterion codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Criterion {
    /// Benign stand-alone evidence.
    #[serde(rename = "BA")]
    Ba,
    /// Benign strong evidence.
    #[serde(rename = "BS")]
    Bs,
    /// Benign supporting evidence.
    #[serde(rename = "BP")]
    Bp,
    /// Pathogenic stand-alone evidence.
    #[serde(rename = "PA")]
    Pa,
    /// Pathogenic very strong evidence.
    #[serde(rename = "PVS")]
    Pvs,
    /// Pathogenic strong evidence.
    #[serde(rename = "PS")]
    Ps,
    /// Pathogenic moderate evidence.
    #[serde(rename = "PM")]
    Pm,
    /// Pathogenic supporting evidence.
    #[serde(rename = "PP")]
    Pp,
}

impl Criterion {
    /// Returns the canonical upper-case code for the criterion.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ba => "BA",
            Self::Bs => "BS",
            Self::Bp => "BP",
            Self::Pa => "PA",
            Self::Pvs => "PVS",
            Self::Ps => "PS",
            Self::Pm => "PM",
            Self::Pp => "PP",
        }
    }

    /// Returns the polarity of the criterion.
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Ba | Self::Bs | Self::Bp => Polarity::Benign,
            Self::Pa | Self::Pvs | Self::Ps | Self::Pm | Self::Pp => Polarity::Pathogenic,
        }
    }

    /// Returns all criteria in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Ba,
            Self::Bs,
            Self::Bp,
            Self::Pa,
            Self::Pvs,
            Self::Ps,
            Self::Pm,
            Self::Pp,
        ]
    }

    /// Parses a criterion from its canonical code.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "BA" => Some(Self::Ba),
            "BS" => Some(Self::Bs),
            "BP" => Some(Self::Bp),
            "PA" => Some(Self::Pa),
            "PVS" => Some(Self::Pvs),
            "PS" => Some(Self::Ps),
            "PM" => Some(Self::Pm),
            "PP" => Some(Self::Pp),
            _ => None,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Evidence Counts
// ============================================================================

/// Per-variant evidence record mapping criteria to non-negative counts.
///
/// Serializes as a JSON object keyed by criterion code, for example
/// `{"PVS": 1, "PM": 1}`. Criteria absent from the record count zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceCounts(BTreeMap<Criterion, u32>);

impl EvidenceCounts {
    /// Creates an empty evidence record.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns a copy of the record with the given criterion count set.
    #[must_use]
    pub fn with(mut self, criterion: Criterion, count: u32) -> Self {
        self.0.insert(criterion, count);
        self
    }

    /// Sets the count for a criterion.
    pub fn set(&mut self, criterion: Criterion, count: u32) {
        self.0.insert(criterion, count);
    }

    /// Returns the count for a criterion, defaulting to zero when absent.
    #[must_use]
    pub fn count(&self, criterion: Criterion) -> u32 {
        self.0.get(&criterion).copied().unwrap_or(0)
    }

    /// Returns true when the record lists no criteria.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over listed criteria and their counts in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, u32)> + '_ {
        self.0.iter().map(|(criterion, count)| (*criterion, *count))
    }
}

impl FromIterator<(Criterion, u32)> for EvidenceCounts {
    fn from_iter<I: IntoIterator<Item = (Criterion, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
