// sovad-core/src/lib.rs
// ============================================================================
// Module: Sovad Core Library
// Description: Public API surface for the Sovad core.
// Purpose: Expose core types, fixture tables, and runtime helpers.
// Dependencies: crate::{core, fixtures, runtime}
// ============================================================================

//! ## Overview
//! Sovad core provides deterministic ACMG-style variant-pathogenicity
//! classification over JSON ruleset documents. It is policy-free: the
//! combining rules live in the document, the engine only executes them.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod fixtures;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use fixtures::ExpectedCase;
pub use fixtures::ExpectedGroup;
pub use fixtures::flatten_expected;
pub use runtime::Decision;
pub use runtime::DecisionEngine;
pub use runtime::DecisionError;
pub use runtime::Evaluation;
