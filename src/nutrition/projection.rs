//! Projected weight trajectory
//!
//! Linear path from the current weight to the target weight, sampled at a
//! fixed spacing, for charting expected progress.

use chrono::{Duration, NaiveDate};

use super::calories::validated_days_until_target;
use super::error::{PlanError, PlanResult};
use crate::models::{ProjectedWeight, UserProfile};

/// Largest trajectory a single request may produce
pub const MAX_PROJECTION_POINTS: i64 = 1000;

/// Project weight from today to the target date
///
/// Points fall on day 0, every `step_days`, and always on the target date.
/// Requests that would exceed [`MAX_PROJECTION_POINTS`] fail with
/// `InvalidArgument`; widen the step for distant targets.
pub fn project_weight(
    profile: &UserProfile,
    today: NaiveDate,
    step_days: u32,
) -> PlanResult<Vec<ProjectedWeight>> {
    if step_days == 0 {
        return Err(PlanError::InvalidArgument(
            "step_days must be greater than 0".to_string(),
        ));
    }

    let days = validated_days_until_target(profile, today)?;

    // day 0 plus every step before the target, plus the target itself
    let step = i64::from(step_days);
    let point_count = (days + step - 1) / step + 1;
    if point_count > MAX_PROJECTION_POINTS {
        return Err(PlanError::InvalidArgument(format!(
            "{} days at a {}-day step needs {} points (limit {}); use a larger step_days",
            days, step_days, point_count, MAX_PROJECTION_POINTS
        )));
    }

    let difference = profile.weight_difference();

    let point = |day: i64| ProjectedWeight {
        day,
        date: today + Duration::days(day),
        weight: round_tenth(profile.current_weight + difference * day as f64 / days as f64),
    };

    let mut points: Vec<ProjectedWeight> = (0..days)
        .step_by(step_days as usize)
        .map(point)
        .collect();
    points.push(point(days));

    Ok(points)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender};
    use crate::nutrition::error::ProfileIssue;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn profile(days: i64) -> UserProfile {
        UserProfile {
            gender: Gender::Male,
            age: 30,
            height: 175.0,
            current_weight: 80.0,
            target_weight: 75.0,
            target_date: today() + Duration::days(days),
            activity_level: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_weekly_points_end_on_target() {
        let points = project_weight(&profile(30), today(), 7).unwrap();
        let days: Vec<i64> = points.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![0, 7, 14, 21, 28, 30]);

        let first = points.first().unwrap();
        assert_eq!(first.weight, 80.0);
        assert_eq!(first.date, today());

        let last = points.last().unwrap();
        assert_eq!(last.weight, 75.0);
        assert_eq!(last.date, today() + Duration::days(30));

        // 80 - 5 * 14 / 30
        assert_eq!(points[2].weight, 77.7);
    }

    #[test]
    fn test_step_landing_on_target_is_not_duplicated() {
        let points = project_weight(&profile(28), today(), 7).unwrap();
        let days: Vec<i64> = points.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![0, 7, 14, 21, 28]);
    }

    #[test]
    fn test_step_longer_than_horizon() {
        let points = project_weight(&profile(3), today(), 7).unwrap();
        let days: Vec<i64> = points.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![0, 3]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            project_weight(&profile(30), today(), 0),
            Err(PlanError::InvalidArgument(_))
        ));
        assert!(matches!(
            project_weight(&profile(0), today(), 7),
            Err(PlanError::InvalidProfile(ProfileIssue::TargetDateNotInFuture { .. }))
        ));
    }

    #[test]
    fn test_point_count_is_capped() {
        let mut distant = profile(0);
        distant.target_date = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert!(matches!(
            project_weight(&distant, today(), 1),
            Err(PlanError::InvalidArgument(_))
        ));

        // 999 daily steps plus the target date is exactly the limit
        let points = project_weight(&profile(999), today(), 1).unwrap();
        assert_eq!(points.len() as i64, MAX_PROJECTION_POINTS);
        assert!(matches!(
            project_weight(&profile(1000), today(), 1),
            Err(PlanError::InvalidArgument(_))
        ));

        // a wider step brings the same horizon back under the limit
        assert!(project_weight(&profile(3650), today(), 7).is_ok());
    }
}
