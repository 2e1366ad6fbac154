//! Daily calorie plan model
//!
//! The calculator's outputs: a daily target split across meals, the
//! intermediate values behind it, and projected weight points.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Meal slot enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(Meal::Breakfast),
            "lunch" => Some(Meal::Lunch),
            "dinner" => Some(Meal::Dinner),
            "snack" | "snacks" => Some(Meal::Snack),
            _ => None,
        }
    }

    /// Share of the daily total assigned to this meal
    pub fn ratio(&self) -> f64 {
        match self {
            Meal::Breakfast => 0.25,
            Meal::Lunch => 0.35,
            Meal::Dinner => 0.30,
            Meal::Snack => 0.10,
        }
    }
}

/// Recommended daily intake and its meal split (kcal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCaloriePlan {
    pub total: i64,
    pub breakfast: i64,
    pub lunch: i64,
    pub dinner: i64,
    pub snack: i64,
}

impl DailyCaloriePlan {
    /// Split a daily total into meals
    ///
    /// Each meal is rounded independently, so the meal sum may differ from
    /// `total` by 1 kcal. `total` is kept as given.
    pub fn from_total(total: i64) -> Self {
        let share = |meal: Meal| (total as f64 * meal.ratio()).round() as i64;
        Self {
            total,
            breakfast: share(Meal::Breakfast),
            lunch: share(Meal::Lunch),
            dinner: share(Meal::Dinner),
            snack: share(Meal::Snack),
        }
    }

    pub fn meal(&self, meal: Meal) -> i64 {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Dinner => self.dinner,
            Meal::Snack => self.snack,
        }
    }

    pub fn meals(&self) -> [(Meal, i64); 4] {
        Meal::ALL.map(|meal| (meal, self.meal(meal)))
    }

    /// Sum of the rounded meal values
    pub fn meal_sum(&self) -> i64 {
        self.breakfast + self.lunch + self.dinner + self.snack
    }
}

/// Intermediate values of a calorie estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieBreakdown {
    pub bmr: f64,
    pub tdee: f64,
    pub goal_multiplier: f64,
    pub goal_adjusted_tdee: f64,
    pub weight_difference: f64, // kg, target - current
    pub days_until_target: i64,
    pub daily_adjustment: f64,
}

/// A daily plan together with how it was derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieEstimate {
    pub plan: DailyCaloriePlan,
    pub breakdown: CalorieBreakdown,
}

/// One point of a projected weight trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedWeight {
    pub day: i64,
    pub date: NaiveDate,
    pub weight: f64, // kg, one decimal
}
