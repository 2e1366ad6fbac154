//! Meal record model
//!
//! Logged meals as persisted by the record store.

use serde::{Deserialize, Serialize};

use super::plan::Meal;
use crate::nutrition::error::{PlanError, PlanResult};

/// A logged meal row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    pub meal_type: String,
    #[serde(default)]
    pub food: String,
    pub calories: i64,
}

impl MealRecord {
    /// Resolve the meal slot, rejecting unknown meal types and negative calories
    pub fn meal(&self) -> PlanResult<Meal> {
        let meal = Meal::from_str(&self.meal_type).ok_or_else(|| {
            PlanError::InvalidRecord(format!(
                "unknown meal type '{}'. Valid types: breakfast, lunch, dinner, snack",
                self.meal_type
            ))
        })?;

        if self.calories < 0 {
            return Err(PlanError::InvalidRecord(format!(
                "calories must not be negative (got {} for {})",
                self.calories, self.meal_type
            )));
        }

        Ok(meal)
    }
}
