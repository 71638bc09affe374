//! Append-only record of completed stints.
//!
//! Insertion order is chronological order. The stop and swap counters are
//! a cache over the stint sequence and always agree with it:
//! every appended stint ended with a stop, and stints flagged `swap`
//! additionally consumed a kart swap.

use chrono::Duration;
use serde::Serialize;
use tracing::debug;

use super::stint::drive_time;
use super::{Roster, Stint};
use crate::error::PlanError;
use crate::validation::validate_stint;

/// History of completed stints for one race.
#[derive(Debug, Clone, Serialize)]
pub struct StintLedger {
    roster: Roster,
    stints: Vec<Stint>,
    stops_taken: u32,
    swaps_taken: u32,
}

impl StintLedger {
    /// Creates an empty ledger for a roster.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            stints: Vec::new(),
            stops_taken: 0,
            swaps_taken: 0,
        }
    }

    /// Records a completed stint.
    ///
    /// Rejects drivers that are not on the roster and durations outside
    /// zero to one day. The ledger is left untouched in both cases.
    pub fn append(&mut self, stint: Stint) -> Result<(), PlanError> {
        if !self.roster.contains(&stint.driver) {
            return Err(PlanError::UnknownDriver {
                driver: stint.driver,
            });
        }
        validate_stint(&stint).map_err(PlanError::Configuration)?;

        self.stops_taken += 1;
        if stint.swap {
            self.swaps_taken += 1;
        }
        debug!(
            driver = %stint.driver,
            duration_s = stint.duration.num_seconds(),
            swap = stint.swap,
            stops_taken = self.stops_taken,
            swaps_taken = self.swaps_taken,
            "stint recorded"
        );
        self.stints.push(stint);
        Ok(())
    }

    /// Completed stints, oldest first.
    pub fn stints(&self) -> &[Stint] {
        &self.stints
    }

    /// Roster this ledger validates against.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of completed stints.
    pub fn len(&self) -> usize {
        self.stints.len()
    }

    /// Whether no stint has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.stints.is_empty()
    }

    /// Pit stops taken so far.
    pub fn stops_taken(&self) -> u32 {
        self.stops_taken
    }

    /// Kart swaps taken so far.
    pub fn swaps_taken(&self) -> u32 {
        self.swaps_taken
    }

    /// Driver of the most recent completed stint.
    pub fn last_driver(&self) -> Option<&str> {
        self.stints.last().map(|s| s.driver.as_str())
    }

    /// Stint count per roster driver, in roster order.
    pub fn stint_counts(&self) -> Vec<usize> {
        self.roster
            .iter()
            .map(|d| self.stints.iter().filter(|s| s.is_driven_by(d)).count())
            .collect()
    }

    /// Completed drive time of `driver`.
    pub fn drive_time(&self, driver: &str) -> Duration {
        drive_time(driver, &self.stints)
    }
}
