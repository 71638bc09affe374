//! Driver roster.
//!
//! The roster is an ordered set of unique driver identifiers. Its order is
//! the tie-break order everywhere in planning: when two drivers are equally
//! eligible, the one listed first wins.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::validation::validate_roster;

/// Ordered, non-empty set of unique drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    drivers: Vec<String>,
}

impl Roster {
    /// Creates a roster, rejecting empty lists and duplicate names.
    pub fn new<I, S>(drivers: I) -> Result<Self, PlanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let drivers: Vec<String> = drivers.into_iter().map(Into::into).collect();
        validate_roster(&drivers).map_err(PlanError::Configuration)?;
        Ok(Self { drivers })
    }

    /// Number of drivers.
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Always `false` for a validated roster.
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Whether `driver` is on the roster.
    pub fn contains(&self, driver: &str) -> bool {
        self.position(driver).is_some()
    }

    /// Roster index of `driver`.
    pub fn position(&self, driver: &str) -> Option<usize> {
        self.drivers.iter().position(|d| d == driver)
    }

    /// Driver at roster index `idx`.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.drivers.get(idx).map(String::as_str)
    }

    /// Drivers in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.drivers.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = PlanError;

    fn try_from(drivers: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(drivers)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.drivers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_roster_order() {
        let r = Roster::new(["Pedro", "Karim", "Joe"]).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.position("Karim"), Some(1));
        assert_eq!(r.get(2), Some("Joe"));
        assert!(r.contains("Pedro"));
        assert!(!r.contains("Manuel"));
        assert_eq!(r.iter().collect::<Vec<_>>(), vec!["Pedro", "Karim", "Joe"]);
    }

    #[test]
    fn test_roster_rejects_empty() {
        let err = Roster::new(Vec::<String>::new()).unwrap_err();
        match err {
            PlanError::Configuration(errors) => {
                assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyRoster));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_roster_rejects_duplicates() {
        let err = Roster::new(["Pedro", "Joe", "Pedro"]).unwrap_err();
        assert!(matches!(err, PlanError::Configuration(_)));
    }

    #[test]
    fn test_roster_json() {
        let r: Roster = serde_json::from_str(r#"["Pedro", "Karim"]"#).unwrap();
        assert_eq!(r.get(0), Some("Pedro"));
        assert!(serde_json::from_str::<Roster>("[]").is_err());
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"["Pedro","Karim"]"#);
    }
}
