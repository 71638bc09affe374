//! Stint planning: rotation, seeding, balancing.
//!
//! # Algorithm
//!
//! `RaceStrategy` chains three greedy stages:
//!
//! 1. **Rotation** assigns each remaining stint slot to the driver with
//!    the fewest stints so far.
//! 2. **Seeding** lays out the ongoing stint and one minimum-duration
//!    placeholder per slot.
//! 3. **Balancing** hands out the drivable budget one increment at a time
//!    to the driver with the least total drive time.
//!
//! None of the stages is optimal in general; together they give an evenly
//! alternating plan whose drive times sit within one increment of each
//! other whenever the history allows it.
//!
//! # Summary
//!
//! `PlanSummary` reports per-driver totals, spreads and overshoot.

mod balancer;
mod rotation;
mod seeder;
mod strategy;
mod summary;

pub use balancer::{
    future_drive_time, least_time_driver, shortest_stint_index, BalanceOutcome, Balancer,
};
pub use rotation::{count_spread, rotation_order, stint_counts};
pub use seeder::seed_stints;
pub use strategy::{Clock, FixedClock, RaceStrategy, SystemClock};
pub use summary::PlanSummary;
