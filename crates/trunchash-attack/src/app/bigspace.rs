//! Big-space birthday attack
//!
//! The naïve strategy: sample fresh random preimages, hash each through
//! the truncation primitive, and keep every probe in a lookup table
//! keyed by truncated value. The first repeated key with a different
//! stored preimage is the collision. Memory grows with the attempt
//! budget; this is the reference strategy used to validate the
//! small-space searcher.

use crate::config::AttackConfig;
use crate::constants::SAMPLE_ALPHABET;
use crate::domain::element::DomainElement;
use crate::domain::hash::truncated_hash;
use rand::Rng;
use rustc_hash::FxHashMap;

/// A colliding pair of preimage strings and their shared truncated hash
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreimageCollision {
    /// Preimage stored first
    pub first: String,
    /// Preimage that hit the same table key
    pub second: String,
    /// The truncated hash both preimages produce
    pub digest: DomainElement,
}

/// Run the big-space attack
///
/// Draws up to `max_attempts` random preimages of `input_length`
/// lowercase letters. The first-seen preimage for each truncated value
/// is retained; resampling the same string never counts as a collision.
///
/// Returns `None` when the budget is exhausted without a collision.
pub fn search<R: Rng + ?Sized>(config: &AttackConfig, rng: &mut R) -> Option<PreimageCollision> {
    // Mapping truncated hash -> first preimage that produced it
    let mut table: FxHashMap<DomainElement, String> = FxHashMap::default();

    for _ in 0..config.max_attempts() {
        let candidate = random_preimage(config.input_length(), rng);
        let digest = truncated_hash(candidate.as_bytes(), config.bit_length());

        match table.get(&digest) {
            Some(stored) if *stored != candidate => {
                return Some(PreimageCollision {
                    first: stored.clone(),
                    second: candidate,
                    digest,
                });
            }
            // Resampled an already-probed string; not a collision
            Some(_) => {}
            None => {
                table.insert(digest, candidate);
            }
        }
    }

    None
}

/// Sample a random string of `length` letters from the attack alphabet
fn random_preimage<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| SAMPLE_ALPHABET[rng.gen_range(0..SAMPLE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_preimage_alphabet_and_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let s = random_preimage(10, &mut rng);
            assert_eq!(s.len(), 10);
            assert!(s.bytes().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_search_finds_valid_collision_in_small_domain() {
        // 8-bit domain, 10k draws: a collision is certain in practice
        let config = AttackConfig::new(8, 10_000, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let collision = search(&config, &mut rng).expect("collision in 8-bit domain");
        assert_ne!(collision.first, collision.second);

        // Verify independently of the search by re-hashing both preimages
        let left = truncated_hash(collision.first.as_bytes(), 8);
        let right = truncated_hash(collision.second.as_bytes(), 8);
        assert_eq!(left, right);
        assert_eq!(left, collision.digest);
    }

    #[test]
    fn test_equal_preimages_never_count() {
        // Single-letter inputs over a full-width hash: every probe after
        // the 26th resamples a known string, and none of those may be
        // reported as a collision.
        let config = AttackConfig::new(256, 1_000, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(search(&config, &mut rng), None);
    }

    #[test]
    fn test_exhaustion_is_deterministic() {
        // 64-bit domain, 10 draws: accidental collision is negligible
        let config = AttackConfig::new(64, 10, 10).unwrap();

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(search(&config, &mut rng), None);
        }
    }
}
