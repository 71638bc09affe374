//! Driver rotation planning.
//!
//! # Algorithm
//!
//! 1. Count stints per roster driver over the history plus the ongoing stint.
//! 2. Remaining slots = planned stints − stints so far (ongoing included).
//! 3. For each slot, take the driver with the fewest stints (roster order
//!    breaks ties), append it to the order and bump its count.
//!
//! This is a greedy round robin: stint counts never spread by more than
//! one once every driver has caught up. It does not prevent the first
//! planned stint from repeating the ongoing driver.
//!
//! # Complexity
//! O(s * d) for s slots and d drivers.

use tracing::debug;

use crate::models::{Roster, Stint};

/// Computes the driver for each remaining stint slot.
///
/// `planned_stints` is the total number of stints in the race
/// (pit stops + 1). Returns an empty order when no slots remain.
pub fn rotation_order(
    roster: &Roster,
    history: &[Stint],
    current_driver: &str,
    planned_stints: usize,
) -> Vec<String> {
    let mut counts = stint_counts(roster, history);
    if let Some(idx) = roster.position(current_driver) {
        counts[idx] += 1;
    }

    let stints_so_far = history.len() + 1;
    let slots = planned_stints.saturating_sub(stints_so_far);

    let mut order = Vec::with_capacity(slots);
    for _ in 0..slots {
        // min_by_key keeps the first minimum, i.e. the earliest roster entry
        let Some(next) = (0..counts.len()).min_by_key(|&i| counts[i]) else {
            break;
        };
        counts[next] += 1;
        if let Some(driver) = roster.get(next) {
            order.push(driver.to_string());
        }
    }

    debug!(slots, ?order, "rotation order computed");
    order
}

/// Stint count per roster driver, in roster order.
pub fn stint_counts(roster: &Roster, stints: &[Stint]) -> Vec<usize> {
    roster
        .iter()
        .map(|d| stints.iter().filter(|s| s.is_driven_by(d)).count())
        .collect()
}

/// Difference between the highest and lowest stint count.
pub fn count_spread(counts: &[usize]) -> usize {
    let max = counts.iter().copied().max().unwrap_or(0);
    let min = counts.iter().copied().min().unwrap_or(0);
    max - min
}
