//! Stint seeding.
//!
//! Builds the working list the balancer grows: the ongoing stint with its
//! elapsed time, then one placeholder per rotation entry at the minimum
//! duration. The order is fixed and later used as index positions.

use chrono::{Duration, NaiveTime};

use crate::models::Stint;

/// Builds the seeded future-stint list.
///
/// The ongoing stint's duration is `reference_time - current_stint_start`,
/// floored at zero. Placeholders carry `min_stint` and no swap.
pub fn seed_stints(
    rotation: &[String],
    current_driver: &str,
    current_stint_start: NaiveTime,
    reference_time: NaiveTime,
    min_stint: Duration,
) -> Vec<Stint> {
    let elapsed = reference_time
        .signed_duration_since(current_stint_start)
        .max(Duration::zero());

    let mut stints = Vec::with_capacity(rotation.len() + 1);
    stints.push(Stint::new(current_driver, elapsed).with_start(current_stint_start));
    stints.extend(rotation.iter().map(|d| Stint::new(d.as_str(), min_stint)));
    stints
}
