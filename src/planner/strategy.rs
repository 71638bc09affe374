//! Race strategy session.
//!
//! # Pipeline
//!
//! 1. Sample the reference time (explicit, or the clock exactly once).
//! 2. Compute the drivable budget from the race clock and the ledger.
//! 3. Rotation: assign a driver to every remaining stint slot.
//! 4. Seeding: ongoing stint + minimum-duration placeholders.
//! 5. Balancing: grow placeholders until the budget is consumed.
//! 6. Flag stints beyond the kart runtime limit.
//!
//! The computation is a pure function of the ledger snapshot, roster,
//! rules and reference time.

use chrono::{Duration, Local, NaiveTime};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{rotation_order, seed_stints, Balancer};
use crate::error::PlanError;
use crate::models::{
    format_duration, Advisory, PlannerConfig, RacePlan, RaceRules, Roster, Stint, StintLedger,
};
use crate::validation::{validate_planner_config, validate_request, validate_rules};

/// Source of the current time of day.
pub trait Clock: Send + Sync + Debug {
    /// Current time of day.
    fn now(&self) -> NaiveTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock frozen at a given time, for offline planning and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// A planning session for one race.
///
/// Owns the race rules and the ledger of completed stints, and produces
/// balanced plans for the rest of the race.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use stint_planner::models::{RaceRules, Roster, Stint};
/// use stint_planner::planner::RaceStrategy;
///
/// let roster = Roster::new(["Pedro", "Karim", "Joe"]).unwrap();
/// let mut strategy = RaceStrategy::new(roster, RaceRules::default()).unwrap();
/// strategy.add_stint(Stint::minutes("Pedro", 24)).unwrap();
/// strategy.add_stint(Stint::minutes("Karim", 28)).unwrap();
/// strategy.add_stint(Stint::minutes("Pedro", 20)).unwrap();
///
/// let plan = strategy
///     .plan(
///         "Joe",
///         NaiveTime::from_hms_opt(12, 35, 0).unwrap(),
///         NaiveTime::from_hms_opt(12, 44, 0),
///     )
///     .unwrap();
/// assert_eq!(plan.future.len(), 13);
/// assert_eq!(plan.ongoing().unwrap().driver, "Joe");
/// ```
#[derive(Debug, Clone)]
pub struct RaceStrategy {
    rules: RaceRules,
    config: PlannerConfig,
    ledger: StintLedger,
    clock: Arc<dyn Clock>,
}

impl RaceStrategy {
    /// Creates a session, validating the rules.
    pub fn new(roster: Roster, rules: RaceRules) -> Result<Self, PlanError> {
        validate_rules(&rules).map_err(PlanError::Configuration)?;
        Ok(Self {
            rules,
            config: PlannerConfig::default(),
            ledger: StintLedger::new(roster),
            clock: Arc::new(SystemClock),
        })
    }

    /// Sets the planner configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the clock sampled when no reference time is given.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Records a completed stint.
    pub fn add_stint(&mut self, stint: Stint) -> Result<(), PlanError> {
        self.ledger.append(stint)
    }

    /// Race rules.
    pub fn rules(&self) -> &RaceRules {
        &self.rules
    }

    /// Planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Driver roster.
    pub fn roster(&self) -> &Roster {
        self.ledger.roster()
    }

    /// Completed-stint ledger.
    pub fn ledger(&self) -> &StintLedger {
        &self.ledger
    }

    /// Drivable time left at `now`, given the stops and swaps taken so far.
    pub fn drivable_time_remaining(&self, now: NaiveTime) -> Duration {
        self.rules.clock().drivable_time_remaining(
            now,
            self.ledger.stops_taken(),
            self.ledger.swaps_taken(),
        )
    }

    /// Plans the rest of the race.
    ///
    /// # Arguments
    /// * `current_driver` - Driver currently on track.
    /// * `current_stint_start` - When the ongoing stint started.
    /// * `reference_time` - "Now" for the plan; the clock is sampled once
    ///   when `None`.
    ///
    /// # Errors
    /// [`PlanError::Configuration`] for an unknown current driver, a stint
    /// start after the reference time, or invalid planner settings.
    /// [`PlanError::Invariant`] if balancing finds no stint to extend.
    pub fn plan(
        &self,
        current_driver: &str,
        current_stint_start: NaiveTime,
        reference_time: Option<NaiveTime>,
    ) -> Result<RacePlan, PlanError> {
        let reference_time = reference_time.unwrap_or_else(|| self.clock.now());

        let mut errors = Vec::new();
        if let Err(e) = validate_planner_config(&self.config) {
            errors.extend(e);
        }
        if let Err(e) = validate_request(
            self.roster(),
            current_driver,
            current_stint_start,
            reference_time,
        ) {
            errors.extend(e);
        }
        if !errors.is_empty() {
            return Err(PlanError::Configuration(errors));
        }

        let roster = self.roster();
        let history = self.ledger.stints();
        let budget = self.drivable_time_remaining(reference_time);
        debug!(
            %reference_time,
            budget_s = budget.num_seconds(),
            stops_taken = self.ledger.stops_taken(),
            swaps_taken = self.ledger.swaps_taken(),
            "planning race"
        );

        let rotation = rotation_order(roster, history, current_driver, self.rules.planned_stints());
        let seeded = seed_stints(
            &rotation,
            current_driver,
            current_stint_start,
            reference_time,
            self.config.min_stint,
        );
        let outcome = Balancer::new(roster, history)
            .with_increment(self.config.increment)
            .balance(seeded, budget)?;

        let advisories = self.advisories(&outcome.stints, budget);

        Ok(RacePlan {
            history: history.to_vec(),
            future: outcome.stints,
            reference_time,
            drivable_time: budget,
            increments: outcome.increments,
            advisories,
        })
    }

    fn advisories(&self, future: &[Stint], budget: Duration) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        if budget <= Duration::zero() {
            info!(budget_s = budget.num_seconds(), "no drivable time left");
            advisories.push(Advisory::no_drivable_time(format!(
                "No drivable time left ({})",
                format_duration(budget)
            )));
        }

        let limit = self.rules.max_kart_runtime;
        let offset = self.ledger.len();
        for (i, stint) in future.iter().enumerate() {
            if stint.duration > limit {
                warn!(
                    driver = %stint.driver,
                    stint = offset + i + 1,
                    duration_s = stint.duration.num_seconds(),
                    limit_s = limit.num_seconds(),
                    "planned stint exceeds kart runtime"
                );
                advisories.push(Advisory::kart_runtime_exceeded(
                    offset + i,
                    format!(
                        "Stint #{} ({}) runs {} against a kart limit of {}",
                        offset + i + 1,
                        stint.driver,
                        format_duration(stint.duration),
                        format_duration(limit)
                    ),
                ));
            }
        }

        advisories
    }
}
