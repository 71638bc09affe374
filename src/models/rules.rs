//! Race rules and planner settings.
//!
//! Both types deserialize from JSON with every field optional; missing
//! fields fall back to the documented defaults. Durations are encoded as
//! whole seconds and times of day as `"HH:MM:SS"`.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use super::clock::{duration_secs, RaceClock};
use crate::error::PlanError;

/// Immutable race configuration.
///
/// # Defaults
///
/// | Field | Default |
/// |-------|---------|
/// | `num_pitstops` | 15 |
/// | `num_kart_swaps` | 2 |
/// | `race_duration` | 6h |
/// | `race_start` | 11:30 |
/// | `pit_duration` | 20s |
/// | `swap_duration` | 3min |
/// | `max_kart_runtime` | 2h15m |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceRules {
    /// Pit stops budgeted for the race.
    pub num_pitstops: u32,
    /// Kart swaps budgeted for the race.
    pub num_kart_swaps: u32,
    /// Total race length.
    #[serde(with = "duration_secs")]
    pub race_duration: Duration,
    /// Green-flag time of day.
    pub race_start: NaiveTime,
    /// Time lost per pit stop.
    #[serde(with = "duration_secs")]
    pub pit_duration: Duration,
    /// Time lost per kart swap.
    #[serde(with = "duration_secs")]
    pub swap_duration: Duration,
    /// Advisory upper bound on a single stint. Reported, never enforced.
    #[serde(with = "duration_secs")]
    pub max_kart_runtime: Duration,
}

impl Default for RaceRules {
    fn default() -> Self {
        Self {
            num_pitstops: 15,
            num_kart_swaps: 2,
            race_duration: Duration::hours(6),
            race_start: NaiveTime::from_hms_opt(11, 30, 0).unwrap_or_default(),
            pit_duration: Duration::seconds(20),
            swap_duration: Duration::minutes(3),
            max_kart_runtime: Duration::hours(2) + Duration::minutes(15),
        }
    }
}

impl RaceRules {
    /// Creates rules with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses rules from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the number of budgeted pit stops.
    pub fn with_pitstops(mut self, count: u32) -> Self {
        self.num_pitstops = count;
        self
    }

    /// Sets the number of budgeted kart swaps.
    pub fn with_kart_swaps(mut self, count: u32) -> Self {
        self.num_kart_swaps = count;
        self
    }

    /// Sets the race length.
    pub fn with_race_duration(mut self, duration: Duration) -> Self {
        self.race_duration = duration;
        self
    }

    /// Sets the green-flag time.
    pub fn with_race_start(mut self, start: NaiveTime) -> Self {
        self.race_start = start;
        self
    }

    /// Sets the time lost per pit stop.
    pub fn with_pit_duration(mut self, duration: Duration) -> Self {
        self.pit_duration = duration;
        self
    }

    /// Sets the time lost per kart swap.
    pub fn with_swap_duration(mut self, duration: Duration) -> Self {
        self.swap_duration = duration;
        self
    }

    /// Sets the advisory kart runtime limit.
    pub fn with_max_kart_runtime(mut self, duration: Duration) -> Self {
        self.max_kart_runtime = duration;
        self
    }

    /// Total number of stints the race is planned around (stops + 1).
    pub fn planned_stints(&self) -> usize {
        self.num_pitstops as usize + 1
    }

    /// Race clock derived from these rules.
    pub fn clock(&self) -> RaceClock {
        RaceClock::new(self)
    }
}

/// Tuning knobs for stint seeding and balancing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Duration each placeholder stint starts from (default 2 min).
    #[serde(with = "duration_secs")]
    pub min_stint: Duration,
    /// Amount added per balancing step (default 1 min).
    #[serde(with = "duration_secs")]
    pub increment: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_stint: Duration::minutes(2),
            increment: Duration::minutes(1),
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the placeholder stint duration.
    pub fn with_min_stint(mut self, duration: Duration) -> Self {
        self.min_stint = duration;
        self
    }

    /// Sets the balancing increment.
    pub fn with_increment(mut self, duration: Duration) -> Self {
        self.increment = duration;
        self
    }
}
