//! Data models
//!
//! Value types exchanged with the record store and the presentation layer.

mod dates;
mod meal_record;
mod plan;
mod profile;
mod weight;

pub use dates::{parse_date, parse_timestamp};
pub use meal_record::MealRecord;
pub use plan::{CalorieBreakdown, CalorieEstimate, DailyCaloriePlan, Meal, ProjectedWeight};
pub use profile::{ActivityLevel, Gender, ProfileRecord, UserProfile};
pub use weight::{WeightHistory, WeightRecord, WeightSample};
