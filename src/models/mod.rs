//! Race planning domain models.
//!
//! Provides the data types the planner consumes and produces: race rules,
//! the driver roster, stints, the completed-stint ledger, the race clock
//! and the resulting plan.
//!
//! # Domain Mappings
//!
//! | stint-planner | Scheduling term |
//! |---------------|-----------------|
//! | Driver | Resource |
//! | Stint | Assignment |
//! | StintLedger | Executed schedule prefix |
//! | RacePlan | Schedule |
//! | Advisory | Soft-constraint violation |

pub mod clock;
mod ledger;
mod plan;
mod roster;
mod rules;
mod stint;

pub use clock::{add_time, format_duration, subtract_time, RaceClock};
pub use ledger::StintLedger;
pub use plan::{Advisory, AdvisoryKind, RacePlan};
pub use roster::Roster;
pub use rules::{PlannerConfig, RaceRules};
pub use stint::{drive_time, total_time, Stint};
