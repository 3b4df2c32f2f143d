//! Truncated hash primitive
//!
//! This module wraps SHA-256 and restricts its output to the low `b`
//! bits, producing fixed-width domain elements. Both searchers operate
//! exclusively on this restricted domain.

use crate::domain::element::DomainElement;
use sha2::{Digest, Sha256};

/// Compute the full-width SHA-256 digest of `input`
pub fn sha256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize().into()
}

/// Compute the SHA-256 digest of `input` truncated to its low `bit_length` bits
///
/// The digest is read as a big-endian unsigned integer and masked to
/// `bit_length` bits. Callers must hold a validated configuration;
/// [`crate::AttackConfig`] enforces `1 <= bit_length <= 256` before any
/// search begins.
pub fn truncated_hash(input: &[u8], bit_length: u32) -> DomainElement {
    debug_assert!(bit_length >= 1 && bit_length <= crate::constants::DIGEST_BITS);
    let digest = sha256(input);
    DomainElement::from_digest(&digest, bit_length)
}

/// One application of the truncated hash viewed as a self-map on its own domain
///
/// The element's canonical byte form goes back in as hash input, so the
/// output width always equals the input width and iteration is
/// well-defined.
pub fn self_map_step(x: &DomainElement) -> DomainElement {
    truncated_hash(x.as_bytes(), x.bit_length())
}
