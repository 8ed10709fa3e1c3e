// sovad-core/src/core/mod.rs
// ============================================================================
// Module: Sovad Core Types
// Description: Canonical Sovad ruleset schema and classification structures.
// Purpose: Provide stable, serializable types for Sovad documents and results.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Sovad core types define evidence criteria, classification labels, ruleset
//! documents, and canonical digests. These types are the canonical source of
//! truth for any derived surfaces (CLI output, fixture tables, or SDKs).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod criteria;
pub mod digest;
pub mod identifiers;
pub mod pathogenicity;
pub mod ruleset;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use criteria::Criterion;
pub use criteria::EvidenceCounts;
pub use criteria::Polarity;
pub use digest::DEFAULT_DIGEST_ALGORITHM;
pub use digest::DigestAlgorithm;
pub use digest::DigestError;
pub use digest::RulesetDigest;
pub use identifiers::RuleId;
pub use identifiers::RulesetId;
pub use identifiers::RulesetVersion;
pub use pathogenicity::Pathogenicity;
pub use ruleset::CombiningRule;
pub use ruleset::CountBound;
pub use ruleset::RulesetError;
pub use ruleset::RulesetSpec;
