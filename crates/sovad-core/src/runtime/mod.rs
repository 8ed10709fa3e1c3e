// sovad-core/src/runtime/mod.rs
// ============================================================================
// Module: Sovad Runtime
// Description: Decision engine runtime for ruleset evaluation.
// Purpose: Expose the engine, handle, and evaluation surfaces.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime hosts the decision engine that loads ruleset documents and
//! evaluates evidence records deterministically.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod engine;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use engine::Decision;
pub use engine::DecisionEngine;
pub use engine::DecisionError;
pub use engine::Evaluation;
