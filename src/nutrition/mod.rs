//! Nutrition plan calculation module
//!
//! Calorie targets, meal splits, goal progress and weight projections.
//! Everything here is pure: inputs arrive as arguments, nothing is read
//! from the environment or the clock.

pub mod calories;
pub mod error;
pub mod intake;
pub mod progress;
pub mod projection;

pub use calories::{basal_metabolic_rate, compute_daily_calories, estimate_daily_calories, KCAL_PER_KG};
pub use error::{PlanError, PlanResult, ProfileIssue};
pub use intake::{summarize_intake, IntakeSummary, MealIntakeStatus};
pub use progress::{compute_progress, ProgressPercentage};
pub use projection::project_weight;
