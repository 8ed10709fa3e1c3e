// sovad-core/src/core/pathogenicity.rs
// ============================================================================
// Module: Sovad Classification Labels
// Description: The five ordered variant-pathogenicity classification labels.
// Purpose: Provide the canonical classification output model for Sovad.
// Dependencies: crate::core::criteria, serde
// ============================================================================

//! ## Overview
//! Classification labels are the closed, ordered set of five pathogenicity
//! categories. The serialized forms are part of the external contract surface
//! and match the ACMG wording exactly (`"Likely benign"`, not `likely_benign`).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::criteria::Polarity;

// ============================================================================
// SECTION: Pathogenicity
// ============================================================================

/// Variant-pathogenicity classification label.
///
/// Ordering runs from benign-most to pathogenic-most.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Pathogenicity {
    /// Benign classification.
    #[serde(rename = "Benign")]
    Benign,
    /// Likely benign classification.
    #[serde(rename = "Likely benign")]
    LikelyBenign,
    /// Uncertain significance classification.
    #[serde(rename = "Uncertain significance")]
    UncertainSignificance,
    /// Likely pathogenic classification.
    #[serde(rename = "Likely pathogenic")]
    LikelyPathogenic,
    /// Pathogenic classification.
    #[serde(rename = "Pathogenic")]
    Pathogenic,
}

impl Pathogenicity {
    /// Returns the canonical label string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Benign => "Benign",
            Self::LikelyBenign => "Likely benign",
            Self::UncertainSignificance => "Uncertain significance",
            Self::LikelyPathogenic => "Likely pathogenic",
            Self::Pathogenic => "Pathogenic",
        }
    }

    /// Returns all labels in canonical order (benign-most first).
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Benign,
            Self::LikelyBenign,
            Self::UncertainSignificance,
            Self::LikelyPathogenic,
            Self::Pathogenic,
        ]
    }

    /// Parses a label from its canonical string form.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Benign" => Some(Self::Benign),
            "Likely benign" => Some(Self::LikelyBenign),
            "Uncertain significance" => Some(Self::UncertainSignificance),
            "Likely pathogenic" => Some(Self::LikelyPathogenic),
            "Pathogenic" => Some(Self::Pathogenic),
            _ => None,
        }
    }

    /// Returns the polarity of the label, or `None` for the uncertain label.
    #[must_use]
    pub const fn polarity(self) -> Option<Polarity> {
        match self {
            Self::Benign | Self::LikelyBenign => Some(Polarity::Benign),
            Self::LikelyPathogenic | Self::Pathogenic => Some(Polarity::Pathogenic),
            Self::UncertainSignificance => None,
        }
    }

    /// Returns the strength rank of the label within its polarity side.
    ///
    /// Definitive labels outrank their likely counterparts; the uncertain
    /// label ranks zero on both sides.
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Benign | Self::Pathogenic => 2,
            Self::LikelyBenign | Self::LikelyPathogenic => 1,
            Self::UncertainSignificance => 0,
        }
    }
}

impl fmt::Display for Pathogenicity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
