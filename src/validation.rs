//! Input validation for race planning.
//!
//! Checks structural integrity of the roster, race rules, planner settings
//! and plan requests before any planning runs. Detects:
//! - Empty rosters, blank or duplicate driver names
//! - Non-positive race duration, negative time losses
//! - Durations beyond one day, stop or swap counts beyond [`MAX_STOPS`]
//! - Negative or over-long completed stints
//! - Zero or negative balancing increments
//! - Current driver missing from the roster
//! - Ongoing stint starting after the reference time
//!
//! Every check runs; all detected issues are reported together.

use chrono::{Duration, NaiveTime};
use std::collections::HashSet;

use crate::models::{PlannerConfig, RaceRules, Roster, Stint};

/// Upper bound on budgeted pit stops and kart swaps.
pub const MAX_STOPS: u32 = 1_000;

/// Longest accepted span. The race clock works on times of day.
pub fn max_span() -> Duration {
    Duration::hours(24)
}

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The roster has no drivers.
    EmptyRoster,
    /// A driver name is empty or whitespace.
    BlankDriver,
    /// Two roster entries share the same name.
    DuplicateDriver,
    /// Race duration is zero or negative.
    NonPositiveRaceDuration,
    /// A time loss or limit is negative.
    NegativeDuration,
    /// A duration is longer than one day.
    DurationOutOfRange,
    /// More pit stops or kart swaps than [`MAX_STOPS`].
    TooManyStops,
    /// Balancing increment is zero or negative.
    NonPositiveIncrement,
    /// The current driver is not on the roster.
    UnknownDriver,
    /// The ongoing stint starts after the reference time.
    StintStartAfterReference,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn check_span(errors: &mut Vec<ValidationError>, field: &str, value: Duration) {
    if value < Duration::zero() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeDuration,
            format!("{field} must not be negative, got {}s", value.num_seconds()),
        ));
    } else if value > max_span() {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationOutOfRange,
            format!(
                "{field} must not exceed {}s, got {}s",
                max_span().num_seconds(),
                value.num_seconds()
            ),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a driver list.
///
/// Checks:
/// 1. At least one driver
/// 2. No blank names
/// 3. No duplicate names
pub fn validate_roster(drivers: &[String]) -> ValidationResult {
    let mut errors = Vec::new();

    if drivers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster has no drivers",
        ));
    }

    let mut seen = HashSet::new();
    for (idx, d) in drivers.iter().enumerate() {
        if d.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankDriver,
                format!("Driver #{} has a blank name", idx + 1),
            ));
        }
        if !seen.insert(d.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDriver,
                format!("Duplicate driver: {d}"),
            ));
        }
    }

    finish(errors)
}

/// Validates race rules.
///
/// Checks:
/// 1. `race_duration > 0`
/// 2. `pit_duration`, `swap_duration`, `max_kart_runtime` are non-negative
/// 3. Every duration is at most one day
/// 4. `num_pitstops` and `num_kart_swaps` are at most [`MAX_STOPS`]
pub fn validate_rules(rules: &RaceRules) -> ValidationResult {
    let mut errors = Vec::new();

    if rules.race_duration <= Duration::zero() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveRaceDuration,
            format!(
                "race_duration must be positive, got {}s",
                rules.race_duration.num_seconds()
            ),
        ));
    } else {
        check_span(&mut errors, "race_duration", rules.race_duration);
    }

    for (field, value) in [
        ("pit_duration", rules.pit_duration),
        ("swap_duration", rules.swap_duration),
        ("max_kart_runtime", rules.max_kart_runtime),
    ] {
        check_span(&mut errors, field, value);
    }

    for (field, count) in [
        ("num_pitstops", rules.num_pitstops),
        ("num_kart_swaps", rules.num_kart_swaps),
    ] {
        if count > MAX_STOPS {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooManyStops,
                format!("{field} must not exceed {MAX_STOPS}, got {count}"),
            ));
        }
    }

    finish(errors)
}

/// Validates planner settings.
pub fn validate_planner_config(config: &PlannerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.increment <= Duration::zero() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveIncrement,
            format!(
                "increment must be positive, got {}s",
                config.increment.num_seconds()
            ),
        ));
    } else {
        check_span(&mut errors, "increment", config.increment);
    }
    check_span(&mut errors, "min_stint", config.min_stint);

    finish(errors)
}

/// Validates a completed stint before it enters the ledger.
///
/// The duration must lie within zero and one day.
pub fn validate_stint(stint: &Stint) -> ValidationResult {
    let mut errors = Vec::new();
    check_span(
        &mut errors,
        &format!("duration of {}'s stint", stint.driver),
        stint.duration,
    );
    finish(errors)
}

/// Validates a plan request against the roster.
///
/// Checks:
/// 1. `current_driver` is on the roster
/// 2. `current_stint_start` is not after `reference_time`
pub fn validate_request(
    roster: &Roster,
    current_driver: &str,
    current_stint_start: NaiveTime,
    reference_time: NaiveTime,
) -> ValidationResult {
    let mut errors = Vec::new();

    if !roster.contains(current_driver) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnknownDriver,
            format!("Current driver '{current_driver}' is not on the roster"),
        ));
    }

    if current_stint_start > reference_time {
        errors.push(ValidationError::new(
            ValidationErrorKind::StintStartAfterReference,
            format!(
                "Ongoing stint starts at {current_stint_start}, after reference time {reference_time}"
            ),
        ));
    }

    finish(errors)
}
