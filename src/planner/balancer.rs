//! Drive-time balancing.
//!
//! # Algorithm
//!
//! Grow the seeded future stints one increment at a time until their total
//! exceeds the drivable budget:
//!
//! 1. `total` = Σ over roster drivers of their future drive time.
//! 2. Stop once `total > budget`.
//! 3. Pick the driver with the least history + future time (roster order
//!    breaks ties).
//! 4. Extend that driver's shortest future stint (lowest index on ties) by
//!    one increment.
//!
//! Each step adds exactly one increment to `total` while the budget stays
//! fixed, so the loop runs at most `budget / increment + 1` times and ends
//! with an overshoot of at most one increment.
//!
//! # Invariant
//! Seeding gives every rotated driver a placeholder. If the least-time
//! driver has no future stint anyway, the run is aborted with
//! [`PlanError::Invariant`].

use chrono::Duration;
use tracing::{debug, error, trace};

use crate::error::PlanError;
use crate::models::{drive_time, Roster, Stint};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Result of a balancing run.
#[derive(Debug, Clone)]
pub struct BalanceOutcome {
    /// Future stints with their final durations, in seeded order.
    pub stints: Vec<Stint>,
    /// Number of increments applied.
    pub increments: usize,
}

/// Greedy least-time balancer over a fixed history snapshot.
#[derive(Debug, Clone)]
pub struct Balancer<'a> {
    roster: &'a Roster,
    history: &'a [Stint],
    increment: Duration,
}

impl<'a> Balancer<'a> {
    /// Creates a balancer with a one-minute increment.
    pub fn new(roster: &'a Roster, history: &'a [Stint]) -> Self {
        Self {
            roster,
            history,
            increment: Duration::minutes(1),
        }
    }

    /// Sets the increment added per step.
    pub fn with_increment(mut self, increment: Duration) -> Self {
        self.increment = increment;
        self
    }

    /// Grows `future` until its total drive time exceeds `budget`.
    ///
    /// A budget already below the seeded total leaves the stints untouched.
    pub fn balance(
        &self,
        mut future: Vec<Stint>,
        budget: Duration,
    ) -> Result<BalanceOutcome, PlanError> {
        if self.increment <= Duration::zero() {
            return Err(PlanError::Configuration(vec![ValidationError::new(
                ValidationErrorKind::NonPositiveIncrement,
                format!(
                    "increment must be positive, got {}s",
                    self.increment.num_seconds()
                ),
            )]));
        }

        let mut total = future_drive_time(self.roster, &future);
        let mut increments = 0usize;

        while budget >= total {
            let Some(target) = least_time_driver(self.roster, self.history, &future) else {
                break;
            };
            let Some(idx) = shortest_stint_index(target, &future) else {
                error!(
                    driver = target,
                    planned = future.len(),
                    "least-time driver has no planned stint"
                );
                return Err(PlanError::Invariant {
                    driver: target.to_string(),
                    snapshot: future,
                });
            };

            future[idx].duration += self.increment;
            increments += 1;
            trace!(driver = target, stint = idx, "extended stint");

            total = future_drive_time(self.roster, &future);
        }

        debug!(
            increments,
            budget_s = budget.num_seconds(),
            total_s = total.num_seconds(),
            "balancing finished"
        );

        Ok(BalanceOutcome {
            stints: future,
            increments,
        })
    }
}

/// Sum of future drive time over the roster drivers.
pub fn future_drive_time(roster: &Roster, future: &[Stint]) -> Duration {
    roster
        .iter()
        .fold(Duration::zero(), |acc, d| acc + drive_time(d, future))
}

/// Driver with the least combined history + future time.
///
/// Roster order breaks ties. `None` only for an empty roster.
pub fn least_time_driver<'r>(
    roster: &'r Roster,
    history: &[Stint],
    future: &[Stint],
) -> Option<&'r str> {
    // min_by_key keeps the first minimum, i.e. the earliest roster entry
    roster
        .iter()
        .min_by_key(|d| drive_time(d, history) + drive_time(d, future))
}

/// Index of `driver`'s shortest stint; the lowest index wins ties.
///
/// Index 0 is a valid answer.
pub fn shortest_stint_index(driver: &str, stints: &[Stint]) -> Option<usize> {
    stints
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_driven_by(driver))
        .min_by_key(|(_, s)| s.duration)
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{rotation_order, seed_stints};
    use chrono::NaiveTime;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn pair() -> Roster {
        Roster::new(["A", "B"]).unwrap()
    }

    fn minutes(stints: &[Stint]) -> Vec<i64> {
        stints.iter().map(|s| s.duration.num_minutes()).collect()
    }

    #[test]
    fn test_shortest_stint_index_zero_is_valid() {
        let stints = vec![Stint::minutes("A", 1), Stint::minutes("B", 0), Stint::minutes("A", 2)];
        assert_eq!(shortest_stint_index("A", &stints), Some(0));
        assert_eq!(shortest_stint_index("B", &stints), Some(1));
        assert_eq!(shortest_stint_index("C", &stints), None);
    }

    #[test]
    fn test_shortest_stint_index_first_on_tie() {
        let stints = vec![Stint::minutes("A", 5), Stint::minutes("A", 3), Stint::minutes("A", 3)];
        assert_eq!(shortest_stint_index("A", &stints), Some(1));
    }

    #[test]
    fn test_least_time_driver_roster_order_on_tie() {
        let roster = pair();
        let history = vec![Stint::minutes("B", 10)];
        let future = vec![Stint::minutes("A", 10)];
        assert_eq!(least_time_driver(&roster, &history, &future), Some("A"));

        let future = vec![Stint::minutes("A", 11)];
        assert_eq!(least_time_driver(&roster, &history, &future), Some("B"));
    }

    #[test]
    fn test_balance_small_case() {
        let roster = pair();
        let future = vec![Stint::minutes("A", 0), Stint::minutes("B", 2), Stint::minutes("A", 2)];

        let outcome = Balancer::new(&roster, &[])
            .balance(future, Duration::minutes(10))
            .unwrap();

        // Stops at the first total above the budget: 4 + 7 = 11
        assert_eq!(outcome.increments, 7);
        assert_eq!(minutes(&outcome.stints), vec![3, 5, 3]);
        assert_eq!(future_drive_time(&roster, &outcome.stints), Duration::minutes(11));
    }

    #[test]
    fn test_balance_respects_history() {
        let roster = pair();
        let history = vec![Stint::minutes("A", 20)];
        let future = vec![Stint::minutes("A", 2), Stint::minutes("B", 2)];

        let outcome = Balancer::new(&roster, &history)
            .balance(future, Duration::minutes(30))
            .unwrap();

        // B catches up to A's 22 minutes, then both alternate
        let a = drive_time("A", &history) + drive_time("A", &outcome.stints);
        let b = drive_time("B", &history) + drive_time("B", &outcome.stints);
        assert_eq!(outcome.increments, 27);
        assert_eq!(a, Duration::minutes(26));
        assert_eq!(b, Duration::minutes(25));
    }

    #[test]
    fn test_balance_no_budget() {
        let roster = pair();
        let future = vec![Stint::minutes("A", 5), Stint::minutes("B", 2)];

        for budget in [Duration::minutes(-30), Duration::zero(), Duration::minutes(6)] {
            let outcome = Balancer::new(&roster, &[])
                .balance(future.clone(), budget)
                .unwrap();
            assert_eq!(outcome.increments, 0);
            assert_eq!(outcome.stints, future);
        }
    }

    #[test]
    fn test_balance_invariant_violation() {
        let roster = pair();
        let history = vec![Stint::minutes("A", 60)];
        let future = vec![Stint::minutes("A", 1)];

        let err = Balancer::new(&roster, &history)
            .balance(future, Duration::minutes(30))
            .unwrap_err();
        match err {
            PlanError::Invariant { driver, snapshot } => {
                assert_eq!(driver, "B");
                assert_eq!(snapshot, vec![Stint::minutes("A", 1)]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_balance_rejects_zero_increment() {
        let roster = pair();
        let err = Balancer::new(&roster, &[])
            .with_increment(Duration::zero())
            .balance(vec![Stint::minutes("A", 1)], Duration::minutes(5))
            .unwrap_err();
        assert!(matches!(err, PlanError::Configuration(_)));
    }

    #[test]
    fn test_balance_sub_minute_increment() {
        let roster = pair();
        let future = vec![Stint::minutes("A", 0), Stint::minutes("B", 0)];
        let outcome = Balancer::new(&roster, &[])
            .with_increment(Duration::seconds(30))
            .balance(future, Duration::seconds(90))
            .unwrap();

        assert_eq!(outcome.increments, 4);
        assert_eq!(future_drive_time(&roster, &outcome.stints), Duration::seconds(120));
    }

    #[test]
    fn test_balance_properties_random() {
        let mut rng = StdRng::seed_from_u64(2024);
        let start = NaiveTime::from_hms_opt(11, 30, 0).unwrap();

        for _ in 0..150 {
            let n = rng.random_range(1..5);
            let names: Vec<String> = (0..n).map(|i| format!("D{i}")).collect();
            let roster = Roster::new(names.clone()).unwrap();

            let history: Vec<Stint> = (0..rng.random_range(0..8))
                .map(|_| Stint::minutes(names[rng.random_range(0..n)].clone(), rng.random_range(5..40)))
                .collect();
            let current = names[rng.random_range(0..n)].clone();
            let planned = history.len() + 1 + rng.random_range(0..12);
            let elapsed = Duration::minutes(rng.random_range(0..30));
            let increment = if rng.random_bool(0.5) {
                Duration::minutes(1)
            } else {
                Duration::seconds(30)
            };
            let budget = Duration::minutes(rng.random_range(-20..400));

            let rotation = rotation_order(&roster, &history, &current, planned);
            let seeded = seed_stints(&rotation, &current, start, start + elapsed, Duration::minutes(2));
            let everyone_planned = roster.iter().all(|d| seeded.iter().any(|s| s.is_driven_by(d)));

            let result = Balancer::new(&roster, &history)
                .with_increment(increment)
                .balance(seeded.clone(), budget);
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(PlanError::Invariant { .. }) if !everyone_planned => continue,
                Err(e) => panic!("unexpected error: {e}"),
            };

            let before = future_drive_time(&roster, &seeded);
            let after = future_drive_time(&roster, &outcome.stints);

            // Each step adds exactly one increment
            assert_eq!(after - before, increment * outcome.increments as i32);

            // Bounded iteration count
            let bound = (budget - before).num_seconds().max(0) / increment.num_seconds() + 1;
            assert!(outcome.increments as i64 <= bound);

            // Time-exactness: first total above the budget
            if outcome.increments > 0 {
                assert!(after > budget);
                assert!(after - budget <= increment);
            } else {
                assert!(before > budget);
            }

            // Order and identity are preserved; only durations grow
            assert_eq!(outcome.stints.len(), seeded.len());
            for (a, b) in seeded.iter().zip(&outcome.stints) {
                assert_eq!(a.driver, b.driver);
                assert!(b.duration >= a.duration);
            }

            // Every driver that received time ends within one increment of the least-time driver
            let totals: Vec<Duration> = roster
                .iter()
                .map(|d| drive_time(d, &history) + drive_time(d, &outcome.stints))
                .collect();
            let min_total = *totals.iter().min().unwrap();
            for (i, d) in roster.iter().enumerate() {
                if drive_time(d, &outcome.stints) > drive_time(d, &seeded) {
                    assert!(totals[i] - min_total <= increment);
                }
            }
        }
    }
}
