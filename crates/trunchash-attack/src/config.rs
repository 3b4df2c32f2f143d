//! Attack configuration and error taxonomy
//!
//! A configuration is validated once, before any search work begins.
//! Budget exhaustion is deliberately *not* part of the error taxonomy:
//! "no collision found" is a valid terminal outcome and is reported as
//! the `None` arm of each searcher's result.

use crate::constants::{
    DEFAULT_BIT_LENGTH, DEFAULT_INPUT_LENGTH, DEFAULT_MAX_ATTEMPTS, DIGEST_BITS,
};
use thiserror::Error;

/// Configuration errors raised before a search starts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttackError {
    /// Truncation width outside `1..=DIGEST_BITS`
    #[error("bit length {requested} is outside the supported range 1..={digest_bits}")]
    BitLengthOutOfRange { requested: u32, digest_bits: u32 },
    /// Truncation width not representable as whole hex digits
    #[error("bit length {0} is not a multiple of 4 (required for the fixed-width hex domain)")]
    BitLengthNotNibbleAligned(u32),
    /// Attempt budget of zero
    #[error("attempt budget must be at least 1")]
    ZeroAttemptBudget,
    /// Preimage length of zero
    #[error("input length must be at least 1")]
    ZeroInputLength,
}

/// Immutable parameters for one attack invocation
///
/// Construct through [`AttackConfig::new`] so the bounds are checked up
/// front; the searchers assume a validated configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackConfig {
    bit_length: u32,
    max_attempts: u64,
    input_length: usize,
}

impl AttackConfig {
    /// Create a validated configuration
    ///
    /// # Arguments
    /// * `bit_length` - Truncated hash width in bits (1..=256)
    /// * `max_attempts` - Iteration budget for either searcher
    /// * `input_length` - Length of random preimage strings (big-space only)
    pub fn new(
        bit_length: u32,
        max_attempts: u64,
        input_length: usize,
    ) -> Result<Self, AttackError> {
        if bit_length == 0 || bit_length > DIGEST_BITS {
            return Err(AttackError::BitLengthOutOfRange {
                requested: bit_length,
                digest_bits: DIGEST_BITS,
            });
        }
        if max_attempts == 0 {
            return Err(AttackError::ZeroAttemptBudget);
        }
        if input_length == 0 {
            return Err(AttackError::ZeroInputLength);
        }

        Ok(Self {
            bit_length,
            max_attempts,
            input_length,
        })
    }

    /// Truncated hash width in bits
    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }

    /// Iteration budget
    pub fn max_attempts(&self) -> u64 {
        self.max_attempts
    }

    /// Length of random preimage strings
    pub fn input_length(&self) -> usize {
        self.input_length
    }

    /// Reject widths that do not map to whole hex digits
    ///
    /// The small-space self-map feeds fixed-width hex output back in as
    /// input, so it only accepts nibble-aligned widths.
    pub fn require_nibble_aligned(&self) -> Result<(), AttackError> {
        if self.bit_length.is_multiple_of(4) {
            Ok(())
        } else {
            Err(AttackError::BitLengthNotNibbleAligned(self.bit_length))
        }
    }
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            bit_length: DEFAULT_BIT_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            input_length: DEFAULT_INPUT_LENGTH,
        }
    }
}
