//! Nutrition Plan MCP Tools
//!
//! Tools for calorie targets, goal progress, weight projections and intake
//! summaries.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::PlanConfig;
use crate::models::{
    parse_date, CalorieBreakdown, DailyCaloriePlan, MealRecord, ProfileRecord, ProjectedWeight,
    WeightHistory, WeightRecord,
};
use crate::nutrition::{self, IntakeSummary};

/// Meal calories for display
#[derive(Debug, Serialize)]
pub struct MealCalories {
    pub meal: String,
    pub calories: i64,
}

/// Response for calculate_nutrition_plan
#[derive(Debug, Serialize)]
pub struct NutritionPlanResponse {
    pub daily_calories: i64,
    pub meals: Vec<MealCalories>,
    pub breakdown: CalorieBreakdown,
    pub activity_level: String,
    pub calculated_for: String,
    pub target_date: String,
}

/// Response for calculate_goal_progress
#[derive(Debug, Serialize)]
pub struct GoalProgressResponse {
    pub progress_percent: f64,
    pub progress_formatted: String,
    pub initial_weight: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    pub first_recorded_at: String,
    pub latest_recorded_at: String,
    pub samples: usize,
}

/// Response for project_weight_trajectory
#[derive(Debug, Serialize)]
pub struct WeightProjectionResponse {
    pub points: Vec<ProjectedWeight>,
    pub days_until_target: i64,
    pub step_days: u32,
}

/// Response for summarize_meal_intake
#[derive(Debug, Serialize)]
pub struct MealIntakeResponse {
    #[serde(flatten)]
    pub summary: IntakeSummary,
    pub over_plan: bool,
}

/// Resolve the reference date, defaulting to the local calendar date
fn resolve_today(today: Option<&str>) -> Result<NaiveDate, String> {
    match today {
        Some(s) => parse_date(s).ok_or_else(|| format!("Invalid date: '{}' (expected YYYY-MM-DD)", s)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn meal_calories(plan: &DailyCaloriePlan) -> Vec<MealCalories> {
    plan.meals()
        .into_iter()
        .map(|(meal, calories)| MealCalories {
            meal: meal.as_str().to_string(),
            calories,
        })
        .collect()
}

/// Calculate the daily calorie target and meal split for a profile
pub fn calculate_nutrition_plan(
    config: &PlanConfig,
    record: &ProfileRecord,
    today: Option<&str>,
) -> Result<NutritionPlanResponse, String> {
    let today = resolve_today(today)?;
    let profile = record.to_profile().map_err(|e| e.to_string())?;

    let estimate = nutrition::estimate_daily_calories(&profile, today, config)
        .map_err(|e| e.to_string())?;

    Ok(NutritionPlanResponse {
        daily_calories: estimate.plan.total,
        meals: meal_calories(&estimate.plan),
        breakdown: estimate.breakdown,
        activity_level: profile.activity_level.display_name().to_string(),
        calculated_for: today.format("%Y-%m-%d").to_string(),
        target_date: profile.target_date.format("%Y-%m-%d").to_string(),
    })
}

/// Calculate progress towards a target weight from recorded weights
pub fn calculate_goal_progress(
    records: &[WeightRecord],
    target_weight: f64,
) -> Result<GoalProgressResponse, String> {
    let history = WeightHistory::from_records(records).map_err(|e| e.to_string())?;
    let progress = nutrition::compute_progress(&history, target_weight).map_err(|e| e.to_string())?;

    // compute_progress guarantees at least two samples
    let (first, latest) = match (history.first(), history.latest()) {
        (Some(first), Some(latest)) => (first, latest),
        _ => return Err("Weight history is empty".to_string()),
    };

    Ok(GoalProgressResponse {
        progress_percent: progress.value(),
        progress_formatted: progress.to_string(),
        initial_weight: first.weight,
        current_weight: latest.weight,
        target_weight,
        first_recorded_at: first.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
        latest_recorded_at: latest.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
        samples: history.len(),
    })
}

/// Project the weight trajectory from today to the target date
pub fn project_weight_trajectory(
    config: &PlanConfig,
    record: &ProfileRecord,
    today: Option<&str>,
    step_days: Option<u32>,
) -> Result<WeightProjectionResponse, String> {
    let today = resolve_today(today)?;
    let profile = record.to_profile().map_err(|e| e.to_string())?;
    let step_days = step_days.unwrap_or(config.projection_step_days);

    let points = nutrition::project_weight(&profile, today, step_days).map_err(|e| e.to_string())?;

    Ok(WeightProjectionResponse {
        points,
        days_until_target: profile.days_until_target(today),
        step_days,
    })
}

/// Compare logged meals with a daily calorie target
pub fn summarize_meal_intake(
    daily_calories: i64,
    records: &[MealRecord],
) -> Result<MealIntakeResponse, String> {
    if daily_calories <= 0 {
        return Err("daily_calories must be greater than 0".to_string());
    }

    let plan = DailyCaloriePlan::from_total(daily_calories);
    let summary = nutrition::summarize_intake(&plan, records).map_err(|e| e.to_string())?;
    let over_plan = summary.total_remaining < 0;

    Ok(MealIntakeResponse { summary, over_plan })
}
