//! Plan quality metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Driver total | History + future drive time per driver |
//! | Spread | Highest minus lowest driver total |
//! | Stint spread | Highest minus lowest stint count |
//! | Future total | Sum of future stint durations |
//! | Overshoot | Future total minus drivable budget |

use chrono::Duration;

use super::rotation::{count_spread, stint_counts};
use crate::models::{RacePlan, Roster};

/// Balance indicators for a race plan.
#[derive(Debug, Clone)]
pub struct PlanSummary {
    /// Drive time per driver over the full race, in roster order.
    pub driver_totals: Vec<(String, Duration)>,
    /// Stint count per driver over the full race, in roster order.
    pub stint_counts: Vec<usize>,
    /// Highest minus lowest driver total.
    pub spread: Duration,
    /// Highest minus lowest stint count.
    pub stint_spread: usize,
    /// Sum of future stint durations.
    pub future_total: Duration,
    /// Future total beyond the drivable budget.
    pub overshoot: Duration,
}

impl PlanSummary {
    /// Computes the summary of a plan.
    pub fn calculate(plan: &RacePlan, roster: &Roster) -> Self {
        let driver_totals: Vec<(String, Duration)> = roster
            .iter()
            .map(|d| (d.to_string(), plan.drive_time(d)))
            .collect();

        let max = driver_totals.iter().map(|(_, t)| *t).max();
        let min = driver_totals.iter().map(|(_, t)| *t).min();
        let spread = match (max, min) {
            (Some(max), Some(min)) => max - min,
            _ => Duration::zero(),
        };

        let counts = stint_counts(roster, &plan.full_race());

        Self {
            driver_totals,
            stint_spread: count_spread(&counts),
            stint_counts: counts,
            spread,
            future_total: plan.future_drive_time(),
            overshoot: plan.overshoot(),
        }
    }

    /// Total of one driver, if on the roster.
    pub fn total_for(&self, driver: &str) -> Option<Duration> {
        self.driver_totals
            .iter()
            .find(|(d, _)| d == driver)
            .map(|(_, t)| *t)
    }

    /// Whether drive time is balanced within `tolerance`.
    pub fn is_balanced_within(&self, tolerance: Duration) -> bool {
        self.spread <= tolerance
    }
}
