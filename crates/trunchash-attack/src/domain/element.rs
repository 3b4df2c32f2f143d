//! Fixed-width domain element representation
//!
//! A domain element is a bit string of the configured truncation width
//! `b`, stored as `ceil(b/8)` big-endian bytes with the unused high bits
//! of the top byte cleared. The canonical text form is exactly
//! `ceil(b/4)` lowercase hex digits, left-padded with `0`.
//!
//! The fixed width matters: the small-space searcher feeds elements back
//! into the hash as input, and that composition is only well-defined if
//! output width always equals input width.

use rand::RngCore;
use std::fmt;

/// One element of the truncated-hash domain
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DomainElement {
    bit_length: u32,
    bytes: Vec<u8>,
}

impl DomainElement {
    /// Take the low `bit_length` bits of a big-endian digest
    ///
    /// Equivalent to `digest_int & ((1 << bit_length) - 1)` on the digest
    /// read as one big-endian unsigned integer.
    pub(crate) fn from_digest(digest: &[u8], bit_length: u32) -> Self {
        debug_assert!(bit_length >= 1);
        debug_assert!(bit_length as usize <= digest.len() * 8);

        let byte_width = bit_length.div_ceil(8) as usize;
        let mut bytes = digest[digest.len() - byte_width..].to_vec();

        let partial_bits = bit_length % 8;
        if partial_bits != 0 {
            bytes[0] &= (1u8 << partial_bits) - 1;
        }

        Self { bit_length, bytes }
    }

    /// Sample a uniformly random element of the `bit_length`-bit domain
    pub fn random<R: RngCore + ?Sized>(bit_length: u32, rng: &mut R) -> Self {
        let byte_width = bit_length.div_ceil(8) as usize;
        let mut bytes = vec![0u8; byte_width];
        rng.fill_bytes(&mut bytes);

        let partial_bits = bit_length % 8;
        if partial_bits != 0 {
            bytes[0] &= (1u8 << partial_bits) - 1;
        }

        Self { bit_length, bytes }
    }

    /// Width of this element in bits
    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }

    /// Canonical big-endian byte form, used as hash input by the self-map
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of hex digits in the canonical text form of a `bit_length`-bit element
    pub fn hex_width(bit_length: u32) -> usize {
        bit_length.div_ceil(4) as usize
    }

    /// Canonical lowercase hex form, exactly `ceil(bit_length/4)` digits
    pub fn to_hex(&self) -> String {
        let full = hex::encode(&self.bytes);
        // The byte form may carry one extra leading nibble; the mask
        // guarantees it is zero, so trimming to the hex width is lossless.
        let width = Self::hex_width(self.bit_length);
        full[full.len() - width..].to_string()
    }
}

impl fmt::Display for DomainElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_from_digest_takes_low_bits() {
        let digest = [0x12u8, 0x34, 0x56, 0x78];

        let low8 = DomainElement::from_digest(&digest, 8);
        assert_eq!(low8.as_bytes(), &[0x78]);

        let low16 = DomainElement::from_digest(&digest, 16);
        assert_eq!(low16.as_bytes(), &[0x56, 0x78]);
    }

    #[test]
    fn test_from_digest_masks_partial_top_byte() {
        let digest = [0xffu8, 0xff, 0xff, 0xff];

        let low12 = DomainElement::from_digest(&digest, 12);
        assert_eq!(low12.as_bytes(), &[0x0f, 0xff]);

        let low4 = DomainElement::from_digest(&digest, 4);
        assert_eq!(low4.as_bytes(), &[0x0f]);
    }

    #[test]
    fn test_hex_width_rounds_up() {
        assert_eq!(DomainElement::hex_width(4), 1);
        assert_eq!(DomainElement::hex_width(8), 2);
        assert_eq!(DomainElement::hex_width(10), 3);
        assert_eq!(DomainElement::hex_width(12), 3);
        assert_eq!(DomainElement::hex_width(40), 10);
        assert_eq!(DomainElement::hex_width(256), 64);
    }

    #[test]
    fn test_to_hex_is_fixed_width() {
        // A digest of zeros must not lose its leading zero digits
        let digest = [0u8; 32];
        let element = DomainElement::from_digest(&digest, 40);
        assert_eq!(element.to_hex(), "0000000000");
    }

    #[test]
    fn test_to_hex_trims_pad_nibble() {
        // 12-bit elements are stored in 2 bytes but render as 3 digits
        let digest = [0xffu8; 4];
        let element = DomainElement::from_digest(&digest, 12);
        assert_eq!(element.to_hex(), "fff");
    }

    #[test]
    fn test_random_respects_mask() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let element = DomainElement::random(4, &mut rng);
            assert_eq!(element.as_bytes().len(), 1);
            assert!(element.as_bytes()[0] <= 0x0f);
        }
    }

    #[test]
    fn test_equality_on_canonical_form() {
        let digest = [0xabu8; 4];
        let a = DomainElement::from_digest(&digest, 16);
        let b = DomainElement::from_digest(&digest, 16);
        assert_eq!(a, b);

        // Same bits, different width: not the same element
        let c = DomainElement::from_digest(&digest, 24);
        assert_ne!(a.to_hex().len(), c.to_hex().len());
    }
}
