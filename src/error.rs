//! Error types for race planning.

use thiserror::Error;

use crate::models::Stint;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum PlanError {
    /// Rules, roster, or plan request failed validation.
    #[error("invalid configuration: {}", join_messages(.0))]
    Configuration(Vec<ValidationError>),

    /// A completed stint names a driver that is not on the roster.
    #[error("unknown driver '{driver}'")]
    UnknownDriver { driver: String },

    /// The balancer picked a driver with no planned stint to extend.
    ///
    /// Cannot happen with correct seeding; the computation is aborted.
    #[error(
        "internal invariant violated: no planned stint for least-time driver '{driver}' \
         ({} planned stints)", .snapshot.len()
    )]
    Invariant { driver: String, snapshot: Vec<Stint> },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;
