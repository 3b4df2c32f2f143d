//! Small-space birthday attack
//!
//! The truncation primitive becomes a self-map on its own domain by
//! feeding the fixed-width output back in as input. The searcher runs
//! Floyd's tortoise-and-hare from a random starting element, then a
//! recovery pass that turns the meeting point into an actual colliding
//! pair of distinct elements. Memory cost is O(1): only the current
//! pointer values are ever held.

use crate::config::{AttackConfig, AttackError};
use crate::domain::cycle::{find_meeting_point, recover_collision};
use crate::domain::element::DomainElement;
use crate::domain::hash::self_map_step;
use rand::Rng;

/// A colliding pair of domain elements and their shared image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementCollision {
    /// Element on the tail side of the trajectory
    pub left: DomainElement,
    /// Element on the cycle side of the trajectory
    pub right: DomainElement,
    /// The common image: `f(left) == f(right)`
    pub image: DomainElement,
    /// Step count at which the detection pointers met
    pub meeting_steps: u64,
}

/// Run the small-space attack from a random starting element
///
/// Requires a nibble-aligned `bit_length` so the fixed-width hex domain
/// round-trips exactly; rejected with
/// [`AttackError::BitLengthNotNibbleAligned`] before any hashing.
///
/// `Ok(None)` means the budget was exhausted (or the trajectory was
/// degenerate) without producing a distinct pair.
pub fn search<R: Rng + ?Sized>(
    config: &AttackConfig,
    rng: &mut R,
) -> Result<Option<ElementCollision>, AttackError> {
    config.require_nibble_aligned()?;

    let start = DomainElement::random(config.bit_length(), rng);
    search_from(&start, config)
}

/// Run the small-space attack from a caller-chosen starting element
///
/// Deterministic: the whole trajectory is a function of `start`.
/// Re-running with the same element always reports the same outcome.
pub fn search_from(
    start: &DomainElement,
    config: &AttackConfig,
) -> Result<Option<ElementCollision>, AttackError> {
    config.require_nibble_aligned()?;
    debug_assert_eq!(start.bit_length(), config.bit_length());

    // Phase 1: tortoise-and-hare until the pointers meet
    let Some(meeting) = find_meeting_point(start, self_map_step, config.max_attempts()) else {
        return Ok(None);
    };

    // Phase 2: walk head from the start and tail from the meeting value,
    // one application each per step, to the first distinct pair with a
    // common image. The Phase 1 step count is the loop bound, verbatim.
    let Some((left, right)) = recover_collision(start, &meeting.value, self_map_step, meeting.steps)
    else {
        return Ok(None);
    };

    let image = self_map_step(&left);
    debug_assert_eq!(image, self_map_step(&right));

    Ok(Some(ElementCollision {
        left,
        right,
        image,
        meeting_steps: meeting.steps,
    }))
}
