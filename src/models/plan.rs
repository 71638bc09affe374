//! Race plan (planner output).
//!
//! A plan is the history snapshot followed by the projected future stints.
//! The first future stint is the one currently on track. Advisories carry
//! non-fatal findings such as stints that run past the kart runtime limit.

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use super::clock::duration_secs;
use super::stint::{drive_time, total_time};
use super::Stint;

/// A complete race plan: what was driven plus what is projected.
#[derive(Debug, Clone, Serialize)]
pub struct RacePlan {
    /// Completed stints, oldest first.
    pub history: Vec<Stint>,
    /// Ongoing stint followed by the planned stints.
    pub future: Vec<Stint>,
    /// Reference time the plan was computed for.
    pub reference_time: NaiveTime,
    /// Drivable time the future stints were balanced against.
    #[serde(with = "duration_secs")]
    pub drivable_time: Duration,
    /// Balancing steps applied.
    pub increments: usize,
    /// Non-fatal findings.
    pub advisories: Vec<Advisory>,
}

/// A non-fatal finding attached to a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    /// Type of finding.
    pub kind: AdvisoryKind,
    /// Index into [`RacePlan::full_race`], when the finding concerns a stint.
    pub stint_index: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of advisories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AdvisoryKind {
    /// A planned stint is longer than the kart runtime limit.
    KartRuntimeExceeded,
    /// No drivable time is left; the race is effectively over.
    NoDrivableTime,
}

impl Advisory {
    /// Creates a kart runtime advisory.
    pub fn kart_runtime_exceeded(stint_index: usize, message: impl Into<String>) -> Self {
        Self {
            kind: AdvisoryKind::KartRuntimeExceeded,
            stint_index: Some(stint_index),
            message: message.into(),
        }
    }

    /// Creates an end-of-race advisory.
    pub fn no_drivable_time(message: impl Into<String>) -> Self {
        Self {
            kind: AdvisoryKind::NoDrivableTime,
            stint_index: None,
            message: message.into(),
        }
    }
}

impl RacePlan {
    /// History and future concatenated, for full-race display.
    pub fn full_race(&self) -> Vec<Stint> {
        self.history
            .iter()
            .chain(self.future.iter())
            .cloned()
            .collect()
    }

    /// Index of the ongoing stint within [`full_race`](Self::full_race).
    pub fn ongoing_index(&self) -> usize {
        self.history.len()
    }

    /// The stint currently on track.
    pub fn ongoing(&self) -> Option<&Stint> {
        self.future.first()
    }

    /// Planned stints after the ongoing one.
    pub fn upcoming(&self) -> &[Stint] {
        self.future.get(1..).unwrap_or(&[])
    }

    /// Total drive time of `driver` over history and future.
    pub fn drive_time(&self, driver: &str) -> Duration {
        drive_time(driver, &self.history) + drive_time(driver, &self.future)
    }

    /// Total duration of the future stints.
    pub fn future_drive_time(&self) -> Duration {
        total_time(&self.future)
    }

    /// Future time beyond the drivable budget.
    pub fn overshoot(&self) -> Duration {
        self.future_drive_time() - self.drivable_time
    }

    /// Whether the plan carries no advisories.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Number of stints in the full race.
    pub fn stint_count(&self) -> usize {
        self.history.len() + self.future.len()
    }
}
