//! Cycle detection over a finite self-map
//!
//! Iterating a self-map `f` from any starting point traces a ρ-shaped
//! trajectory: a tail of length `μ >= 0` merging into a cycle of length
//! `λ >= 1`. Floyd's tortoise-and-hare finds a meeting point in the
//! cycle with O(1) memory; a second aligned pass recovers two distinct
//! points with the same image.
//!
//! Both passes are generic over the self-map so they can be exercised
//! with synthetic functional graphs of known shape.

/// Outcome of the tortoise-and-hare pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeetingPoint<T> {
    /// Value at which the two pointers met (`f^steps(start)`)
    pub value: T,
    /// Number of slow-pointer advances taken to meet, always >= 1
    pub steps: u64,
}

/// Phase 1: find a meeting point of the slow and fast pointers
///
/// Advances `slow` by one application of `f` and `fast` by two per step,
/// both from `start`. A meeting is guaranteed within `μ + λ` steps on
/// any finite functional graph; `max_steps` bounds the work when the
/// caller cannot afford that many applications.
///
/// Returns `None` if the pointers have not met after `max_steps` steps.
pub fn find_meeting_point<T, F>(start: &T, f: F, max_steps: u64) -> Option<MeetingPoint<T>>
where
    T: Clone + PartialEq,
    F: Fn(&T) -> T,
{
    let mut slow = start.clone();
    let mut fast = start.clone();

    for step in 1..=max_steps {
        slow = f(&slow);
        fast = f(&f(&fast));

        if slow == fast {
            return Some(MeetingPoint {
                value: slow,
                steps: step,
            });
        }
    }

    None
}

/// Phase 2: recover a colliding pair from a meeting point
///
/// A meeting point only proves `f^i(start) == f^(2i)(start)`; it is not
/// itself a collision. Walking `head` from `start` and `tail` from the
/// meeting value, one application each per step, the two trajectories
/// join at the cycle entry: the first step where `f(head) == f(tail)`
/// while `head != tail` yields the collision.
///
/// `steps` must be the step count reported by [`find_meeting_point`];
/// it bounds the walk, since the tail length `μ` never exceeds it.
///
/// Returns `None` in the degenerate case where `start` already lies on
/// the cycle (`head` and `tail` are never distinct), rather than
/// looping or fabricating a pair.
pub fn recover_collision<T, F>(start: &T, meeting: &T, f: F, steps: u64) -> Option<(T, T)>
where
    T: Clone + PartialEq,
    F: Fn(&T) -> T,
{
    let mut head = start.clone();
    let mut tail = meeting.clone();

    for _ in 1..=steps {
        let next_head = f(&head);
        let next_tail = f(&tail);

        if next_head == next_tail && head != tail {
            return Some((head, tail));
        }

        head = next_head;
        tail = next_tail;
    }

    None
}
