//! Stint model.
//!
//! A stint is one continuous driving turn by a single driver. Completed
//! stints are frozen once recorded; planned stints only ever change their
//! `duration`, and only while the balancer owns them.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use super::clock::duration_secs;

/// One continuous driving turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stint {
    /// Driver identifier.
    pub driver: String,
    /// Time on track.
    #[serde(with = "duration_secs")]
    pub duration: Duration,
    /// Whether this stint followed a kart swap.
    #[serde(default)]
    pub swap: bool,
    /// Time of day the stint started, when known.
    #[serde(default)]
    pub start: Option<NaiveTime>,
}

impl Stint {
    /// Creates a stint without a swap or known start time.
    pub fn new(driver: impl Into<String>, duration: Duration) -> Self {
        Self {
            driver: driver.into(),
            duration,
            swap: false,
            start: None,
        }
    }

    /// Creates a stint lasting whole minutes.
    pub fn minutes(driver: impl Into<String>, minutes: i64) -> Self {
        Self::new(driver, Duration::minutes(minutes))
    }

    /// Marks the stint as following a kart swap.
    pub fn with_swap(mut self, swap: bool) -> Self {
        self.swap = swap;
        self
    }

    /// Sets the start time.
    pub fn with_start(mut self, start: NaiveTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Whether this stint belongs to `driver`.
    #[inline]
    pub fn is_driven_by(&self, driver: &str) -> bool {
        self.driver == driver
    }
}

/// Total time driven by `driver` in any stint sequence.
///
/// Works on history, planned stints, or both; it makes no assumption about
/// where the slice came from.
pub fn drive_time(driver: &str, stints: &[Stint]) -> Duration {
    stints
        .iter()
        .filter(|s| s.is_driven_by(driver))
        .fold(Duration::zero(), |acc, s| acc + s.duration)
}

/// Total duration of a stint sequence.
pub fn total_time(stints: &[Stint]) -> Duration {
    stints
        .iter()
        .fold(Duration::zero(), |acc, s| acc + s.duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stint_builder() {
        let start = NaiveTime::from_hms_opt(12, 35, 0).unwrap();
        let s = Stint::minutes("Joe", 9).with_swap(true).with_start(start);

        assert_eq!(s.driver, "Joe");
        assert_eq!(s.duration, Duration::minutes(9));
        assert!(s.swap);
        assert_eq!(s.start, Some(start));
    }

    #[test]
    fn test_stint_no_start() {
        let s = Stint::minutes("Joe", 9);
        assert!(!s.swap);
        assert_eq!(s.start, None);
    }

    #[test]
    fn test_drive_time() {
        let stints = vec![
            Stint::minutes("Pedro", 24),
            Stint::minutes("Karim", 28),
            Stint::minutes("Pedro", 20),
        ];
        assert_eq!(drive_time("Pedro", &stints), Duration::minutes(44));
        assert_eq!(drive_time("Karim", &stints), Duration::minutes(28));
        assert_eq!(drive_time("Joe", &stints), Duration::zero());
        assert_eq!(total_time(&stints), Duration::minutes(72));
    }

    #[test]
    fn test_drive_time_empty() {
        assert_eq!(drive_time("Pedro", &[]), Duration::zero());
    }

    #[test]
    fn test_stint_json() {
        let s: Stint = serde_json::from_str(r#"{"driver": "Karim", "duration": 1680}"#).unwrap();
        assert_eq!(s, Stint::minutes("Karim", 28));
    }
}
