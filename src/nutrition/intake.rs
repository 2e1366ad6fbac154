//! Logged intake against a daily plan

use serde::{Deserialize, Serialize};

use super::error::{PlanError, PlanResult};
use crate::models::{DailyCaloriePlan, Meal, MealRecord};

/// Planned vs. consumed calories for one meal slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealIntakeStatus {
    pub meal: Meal,
    pub planned: i64,
    pub consumed: i64,
    pub remaining: i64, // negative when over plan
    pub entries: usize,
}

/// Planned vs. consumed calories for a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeSummary {
    pub meals: Vec<MealIntakeStatus>,
    pub total_planned: i64,
    pub total_consumed: i64,
    pub total_remaining: i64,
}

fn calorie_overflow() -> PlanError {
    PlanError::InvalidRecord("calorie totals exceed the supported range".to_string())
}

/// Sum logged meals per slot and compare with the plan
pub fn summarize_intake(plan: &DailyCaloriePlan, records: &[MealRecord]) -> PlanResult<IntakeSummary> {
    let mut consumed = [0i64; 4];
    let mut entries = [0usize; 4];

    for record in records {
        let slot = record.meal()? as usize;
        consumed[slot] = consumed[slot]
            .checked_add(record.calories)
            .ok_or_else(calorie_overflow)?;
        entries[slot] += 1;
    }

    let meals = plan
        .meals()
        .into_iter()
        .map(|(meal, planned)| {
            let slot = meal as usize;
            Ok(MealIntakeStatus {
                meal,
                planned,
                consumed: consumed[slot],
                remaining: planned.checked_sub(consumed[slot]).ok_or_else(calorie_overflow)?,
                entries: entries[slot],
            })
        })
        .collect::<PlanResult<Vec<_>>>()?;

    let total_consumed = consumed
        .iter()
        .try_fold(0i64, |acc, c| acc.checked_add(*c))
        .ok_or_else(calorie_overflow)?;

    Ok(IntakeSummary {
        meals,
        total_planned: plan.total,
        total_consumed,
        total_remaining: plan
            .total
            .checked_sub(total_consumed)
            .ok_or_else(calorie_overflow)?,
    })
}
