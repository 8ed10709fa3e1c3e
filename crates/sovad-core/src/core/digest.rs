// sovad-core/src/core/digest.rs
// ============================================================================
// Module: Sovad Canonical Digests
// Description: RFC 8785 JSON canonicalization and content digesting.
// Purpose: Provide deterministic provenance digests for ruleset documents.
// Dependencies: serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! Ruleset documents are digested over their RFC 8785 (JCS) canonical JSON so
//! that formatting and key order never change the digest. Every evaluation
//! reports the digest of the document that produced it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest as _;
use sha2::Sha256;
use thiserror::Error;

// ============================================================================
// SECTION: Digest Algorithm
// ============================================================================

/// Supported digest algorithms for Sovad artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestAlgorithm {
    /// SHA-256 digesting (FIPS-friendly default).
    Sha256,
}

/// Default digest algorithm for Sovad.
pub const DEFAULT_DIGEST_ALGORITHM: DigestAlgorithm = DigestAlgorithm::Sha256;

// ============================================================================
// SECTION: Digest
// ============================================================================

/// Deterministic content digest representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetDigest {
    /// Digest algorithm identifier.
    pub algorithm: DigestAlgorithm,
    /// Lowercase hex-encoded digest bytes.
    pub value: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when computing canonical digests.
#[derive(Debug, Error)]
pub enum DigestError {
    /// JSON canonicalization failed.
    #[error("failed to canonicalize json: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Digest Helpers
// ============================================================================

/// Returns canonical JSON bytes for a serializable value using RFC 8785.
///
/// # Errors
///
/// Returns [`DigestError::Canonicalization`] when serialization fails.
pub fn canonical_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, DigestError> {
    serde_jcs::to_vec(value).map_err(|err| DigestError::Canonicalization(err.to_string()))
}

/// Digests a serializable value over its canonical JSON form.
///
/// # Errors
///
/// Returns [`DigestError::Canonicalization`] when serialization fails.
pub fn digest_canonical_json<T: Serialize + ?Sized>(
    algorithm: DigestAlgorithm,
    value: &T,
) -> Result<RulesetDigest, DigestError> {
    let bytes = canonical_json_bytes(value)?;
    Ok(digest_bytes(algorithm, &bytes))
}

/// Digests raw bytes using the provided algorithm.
#[must_use]
pub fn digest_bytes(algorithm: DigestAlgorithm, bytes: &[u8]) -> RulesetDigest {
    match algorithm {
        DigestAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(bytes);
            RulesetDigest {
                algorithm: DigestAlgorithm::Sha256,
                value: hex_encode(&hasher.finalize()),
            }
        }
    }
}

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
