//! nutriplan Status Tool
//!
//! Provides runtime status information about the nutriplan service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::{BUILD_NUMBER, BUILD_TIMESTAMP, VERSION};
use crate::config::PlanConfig;

/// Plan calculation instructions for AI assistants
pub const PLAN_INSTRUCTIONS: &str = r#"
# Nutrition Plan Instructions

This guide explains how to use the nutriplan tools.

## Getting the Current Date

Every tool that depends on "today" accepts an optional `today` parameter
(YYYY-MM-DD). When omitted, the server's local date is used. Pass it
explicitly when the user is in another timezone or asks "what if".

## Daily Calorie Target

**Tool:** `calculate_nutrition_plan`

Required fields:
- `gender`: male | female
- `age`: years
- `height`: cm
- `current_weight`, `target_weight`: kg
- `target_date`: YYYY-MM-DD, must be after `today`
- `activity_level`: sedentary | light | moderate | active | very_active

The result is the daily total plus a split of 25% breakfast, 35% lunch,
30% dinner and 10% snack. Each meal is rounded on its own, so the meals
may add up to 1 kcal more or less than the total.

Unknown activity levels are rejected. Ask the user which level fits
rather than guessing.

## Goal Progress

**Tool:** `calculate_goal_progress`

Pass every recorded weight (`weight` in kg, `recorded_at` timestamp) and
the target weight. At least two weights are required. Progress compares
the earliest and the latest weight; values above 100% mean the target was
passed, negative values mean the weight moved away from the target.

## Weight Projection

**Tool:** `project_weight_trajectory`

Same profile fields as `calculate_nutrition_plan`, plus optional
`step_days` (default 7). Returns a straight-line path from the current
weight to the target weight.

## Meal Intake

**Tool:** `summarize_meal_intake`

Pass the daily calorie target and the day's logged meals
(`meal_type`, `food`, `calories`). Returns planned, consumed and
remaining calories per meal.
"#;

/// nutriplan service status
#[derive(Debug, Serialize)]
pub struct NutriplanStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub config: PlanConfig,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for the nutriplan service
pub struct StatusTracker {
    start_time: Instant,
    config: PlanConfig,
}

impl StatusTracker {
    pub fn new(config: PlanConfig) -> Self {
        Self {
            start_time: Instant::now(),
            config,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> NutriplanStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutriplanStatus {
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            version: VERSION,
            config: self.config.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_config_and_process() {
        let tracker = StatusTracker::new(PlanConfig::default());
        let status = tracker.get_status();
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.config, PlanConfig::default());
        assert_eq!(status.version, crate::build_info::VERSION);
    }
}
