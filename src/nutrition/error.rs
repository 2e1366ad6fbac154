//! Calculator error types

use chrono::NaiveDate;
use thiserror::Error;

/// Why a profile was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileIssue {
    #[error("{field} must be greater than 0 (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("unknown gender '{0}'. Valid values: male, female")]
    UnknownGender(String),

    #[error("unknown activity level '{0}'. Valid values: sedentary, light, moderate, active, very_active")]
    UnknownActivityLevel(String),

    #[error("unparseable target date '{0}' (expected YYYY-MM-DD)")]
    UnparseableDate(String),

    #[error("target date {target} is not in the future ({days} days from today)")]
    TargetDateNotInFuture { target: NaiveDate, days: i64 },
}

/// Nutrition calculator error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(#[from] ProfileIssue),

    #[error("Insufficient weight history: need at least 2 samples, found {samples}")]
    InsufficientHistory { samples: usize },

    #[error("Degenerate goal: target weight equals initial weight ({initial_weight} kg)")]
    DegenerateGoal { initial_weight: f64 },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for calculator operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Reject non-finite and non-positive values for a named field
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, ProfileIssue> {
    if !value.is_finite() {
        return Err(ProfileIssue::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ProfileIssue::NonPositive { field, value });
    }
    Ok(value)
}
