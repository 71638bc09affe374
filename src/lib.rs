//! Endurance-race stint planning.
//!
//! Given the race rules, a driver roster and the stints driven so far,
//! computes the rest of the race: who drives each remaining stint and for
//! how long, so that drivers alternate evenly, the plan fills exactly the
//! remaining drivable time, and total drive time is balanced.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `RaceRules`, `PlannerConfig`, `Roster`,
//!   `Stint`, `StintLedger`, `RaceClock`, `RacePlan`, `Advisory`
//! - **`planner`**: Rotation, seeding and balancing, driven by `RaceStrategy`
//! - **`validation`**: Input integrity checks (roster, rules, requests)
//! - **`report`**: Plain-text rendering of plans
//! - **`error`**: `PlanError`
//!
//! # Time Model
//!
//! Times of day are `chrono::NaiveTime` with no date; spans are
//! `chrono::Duration`. Every time-dependent call takes its reference time
//! explicitly, so plans are reproducible.
//!
//! # Logging
//!
//! The crate emits `tracing` events and installs no subscriber.

pub mod error;
pub mod models;
pub mod planner;
pub mod report;
pub mod validation;

pub use error::{PlanError, Result};
