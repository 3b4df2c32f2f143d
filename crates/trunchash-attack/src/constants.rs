//! Attack defaults and hash function parameters

// =============================================================================
// Hash function parameters
// =============================================================================

/// SHA-256 output width in bits
pub const DIGEST_BITS: u32 = 256;

// =============================================================================
// Attack defaults
// =============================================================================

/// Default truncation width in bits
pub const DEFAULT_BIT_LENGTH: u32 = 40;

/// Default attempt budget shared by both searchers
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_200_000;

/// Default length of random preimage strings (big-space searcher only)
pub const DEFAULT_INPUT_LENGTH: usize = 10;

/// Alphabet used when sampling random preimage strings
pub const SAMPLE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
