//! Calculator configuration
//!
//! Goal multipliers and projection granularity, overridable from the
//! environment.

use serde::{Deserialize, Serialize};

pub const SURPLUS_MULTIPLIER_VAR: &str = "NUTRIPLAN_SURPLUS_MULTIPLIER";
pub const DEFICIT_MULTIPLIER_VAR: &str = "NUTRIPLAN_DEFICIT_MULTIPLIER";
pub const PROJECTION_STEP_DAYS_VAR: &str = "NUTRIPLAN_PROJECTION_STEP_DAYS";

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Applied to TDEE when the target weight is above the current weight
    pub surplus_multiplier: f64,
    /// Applied to TDEE when losing or maintaining
    pub deficit_multiplier: f64,
    /// Spacing of projected weight points
    pub projection_step_days: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            surplus_multiplier: 1.15,
            deficit_multiplier: 0.85,
            projection_step_days: 7,
        }
    }
}

impl PlanConfig {
    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    ///
    /// Unparseable or non-positive values are logged and the default kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            surplus_multiplier: positive_f64(&lookup, SURPLUS_MULTIPLIER_VAR)
                .unwrap_or(defaults.surplus_multiplier),
            deficit_multiplier: positive_f64(&lookup, DEFICIT_MULTIPLIER_VAR)
                .unwrap_or(defaults.deficit_multiplier),
            projection_step_days: positive_u32(&lookup, PROJECTION_STEP_DAYS_VAR)
                .unwrap_or(defaults.projection_step_days),
        }
    }

    /// Multiplier for a signed weight difference (target - current)
    pub fn goal_multiplier(&self, weight_difference: f64) -> f64 {
        if weight_difference > 0.0 {
            self.surplus_multiplier
        } else {
            self.deficit_multiplier
        }
    }
}

fn positive_f64<F>(lookup: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => {
            tracing::warn!(key, value = %raw, "ignoring invalid multiplier, using default");
            None
        }
    }
}

fn positive_u32<F>(lookup: &F, key: &str) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            tracing::warn!(key, value = %raw, "ignoring invalid day count, using default");
            None
        }
    }
}
