//! Time-of-day arithmetic and the race clock.
//!
//! # Time Model
//! Wall-clock times are `NaiveTime` values with no date component.
//! Spans are `chrono::Duration` (integral, second resolution or finer).
//! Adding past midnight wraps around, matching a clock on the pit wall.
//!
//! # Budget
//! The drivable budget is the race time still to run minus the time that
//! the outstanding pit stops and kart swaps will cost:
//!
//! ```text
//! drivable = (race_end - now)
//!          - (stops_total - stops_taken) * pit_duration
//!          - (swaps_total - swaps_taken) * swap_duration
//! ```

use chrono::{Duration, NaiveTime};

use super::RaceRules;

/// Adds a span to a time of day, wrapping past midnight.
#[inline]
pub fn add_time(time: NaiveTime, span: Duration) -> NaiveTime {
    time.overflowing_add_signed(span).0
}

/// Subtracts a span from a time of day, wrapping past midnight.
#[inline]
pub fn subtract_time(time: NaiveTime, span: Duration) -> NaiveTime {
    time.overflowing_sub_signed(span).0
}

/// Derives race-end and remaining-time figures from the race rules.
///
/// Every query takes the reference time explicitly; the clock never reads
/// the system time itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceClock {
    /// Green-flag time of day.
    pub race_start: NaiveTime,
    /// Total race length.
    pub race_duration: Duration,
    /// Pit stops budgeted for the whole race.
    pub stops_total: u32,
    /// Kart swaps budgeted for the whole race.
    pub swaps_total: u32,
    /// Time lost per pit stop.
    pub pit_duration: Duration,
    /// Time lost per kart swap.
    pub swap_duration: Duration,
}

impl RaceClock {
    /// Creates a clock from race rules.
    pub fn new(rules: &RaceRules) -> Self {
        Self {
            race_start: rules.race_start,
            race_duration: rules.race_duration,
            stops_total: rules.num_pitstops,
            swaps_total: rules.num_kart_swaps,
            pit_duration: rules.pit_duration,
            swap_duration: rules.swap_duration,
        }
    }

    /// Chequered-flag time of day.
    pub fn race_end_time(&self) -> NaiveTime {
        add_time(self.race_start, self.race_duration)
    }

    /// Race time left at `now`.
    ///
    /// Negative once the race is over; callers treat that as "no time left".
    pub fn race_time_remaining(&self, now: NaiveTime) -> Duration {
        self.race_end_time().signed_duration_since(now)
    }

    /// Time left at `now` that can actually be spent driving.
    ///
    /// Race time left minus [`reserved_time`](Self::reserved_time).
    /// Saturates instead of overflowing.
    pub fn drivable_time_remaining(
        &self,
        now: NaiveTime,
        stops_taken: u32,
        swaps_taken: u32,
    ) -> Duration {
        self.race_time_remaining(now)
            .checked_sub(&self.reserved_time(stops_taken, swaps_taken))
            .unwrap_or_else(Duration::min_value)
    }

    /// Time reserved for stops and swaps that have not happened yet.
    ///
    /// Outstanding stops and swaps are clamped at zero, so taking more stops
    /// than budgeted never hands back time that was already lost.
    pub fn reserved_time(&self, stops_taken: u32, swaps_taken: u32) -> Duration {
        let stops = scale(self.pit_duration, self.stops_total.saturating_sub(stops_taken));
        let swaps = scale(self.swap_duration, self.swaps_total.saturating_sub(swaps_taken));
        stops.checked_add(&swaps).unwrap_or_else(Duration::max_value)
    }
}

fn scale(span: Duration, count: u32) -> Duration {
    i32::try_from(count)
        .ok()
        .and_then(|count| span.checked_mul(count))
        .unwrap_or_else(Duration::max_value)
}

/// Formats a span as `H:MM:SS`, with a leading `-` when negative.
pub fn format_duration(span: Duration) -> String {
    let total = span.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    format!(
        "{sign}{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// `serde(with)` helper encoding a `Duration` as whole seconds.
pub(crate) mod duration_secs {
    use chrono::Duration;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(span: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(span.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        Duration::try_seconds(secs)
            .ok_or_else(|| de::Error::custom(format!("duration out of range: {secs}s")))
    }
}
