//! Weight goal progress

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{require_positive, PlanError, PlanResult};
use crate::models::WeightHistory;

/// Signed share of the goal covered so far, in percent (two decimals)
///
/// Not clamped: overshooting the target gives more than 100, moving away
/// from it gives a negative value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressPercentage(f64);

impl ProgressPercentage {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ProgressPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Progress from the first recorded weight towards `target_weight`
pub fn compute_progress(history: &WeightHistory, target_weight: f64) -> PlanResult<ProgressPercentage> {
    require_positive("target_weight", target_weight)?;

    let (initial, current) = match (history.first(), history.latest()) {
        (Some(first), Some(latest)) if history.len() >= 2 => {
            (first.checked_weight()?, latest.checked_weight()?)
        }
        _ => {
            return Err(PlanError::InsufficientHistory {
                samples: history.len(),
            })
        }
    };

    let span = target_weight - initial;
    if span == 0.0 {
        return Err(PlanError::DegenerateGoal {
            initial_weight: initial,
        });
    }

    let percent = (current - initial) / span * 100.0;
    Ok(ProgressPercentage((percent * 100.0).round() / 100.0))
}
