//! Daily calorie target calculation
//!
//! Harris-Benedict BMR, activity-scaled TDEE, a goal multiplier, and a
//! linear adjustment spreading the required weight change over the days
//! left until the target date.

use chrono::NaiveDate;

use super::error::{PlanResult, ProfileIssue};
use crate::config::PlanConfig;
use crate::models::{CalorieBreakdown, CalorieEstimate, DailyCaloriePlan, Gender, UserProfile};

/// Energy equivalent of one kilogram of body mass change (kcal)
pub const KCAL_PER_KG: f64 = 7700.0;

/// Basal metabolic rate (revised Harris-Benedict)
pub fn basal_metabolic_rate(gender: Gender, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let age = f64::from(age);
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Check a profile against `today`, returning the positive day count to the target
pub(crate) fn validated_days_until_target(
    profile: &UserProfile,
    today: NaiveDate,
) -> PlanResult<i64> {
    profile.validate()?;

    let days = profile.days_until_target(today);
    if days <= 0 {
        return Err(ProfileIssue::TargetDateNotInFuture {
            target: profile.target_date,
            days,
        }
        .into());
    }
    Ok(days)
}

/// Round to whole kcal, rejecting values an `i64` cannot hold
fn to_whole_kcal(kcal: f64) -> Result<i64, ProfileIssue> {
    let rounded = kcal.round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if !rounded.is_finite() || rounded.abs() >= i64::MAX as f64 {
        return Err(ProfileIssue::OutOfRange {
            field: "daily_calories",
            value: kcal,
        });
    }
    Ok(rounded as i64)
}

/// Estimate the daily target with configurable goal multipliers
pub fn estimate_daily_calories(
    profile: &UserProfile,
    today: NaiveDate,
    config: &PlanConfig,
) -> PlanResult<CalorieEstimate> {
    let days_until_target = validated_days_until_target(profile, today)?;

    let bmr = basal_metabolic_rate(
        profile.gender,
        profile.current_weight,
        profile.height,
        profile.age,
    );
    let tdee = bmr * profile.activity_level.multiplier();

    let weight_difference = profile.weight_difference();
    let goal_multiplier = config.goal_multiplier(weight_difference);
    let goal_adjusted_tdee = tdee * goal_multiplier;

    let daily_adjustment = weight_difference * KCAL_PER_KG / days_until_target as f64;
    let total = to_whole_kcal(goal_adjusted_tdee + daily_adjustment)?;

    tracing::debug!(
        bmr,
        tdee,
        goal_adjusted_tdee,
        daily_adjustment,
        days_until_target,
        total,
        "computed daily calorie estimate"
    );

    Ok(CalorieEstimate {
        plan: DailyCaloriePlan::from_total(total),
        breakdown: CalorieBreakdown {
            bmr,
            tdee,
            goal_multiplier,
            goal_adjusted_tdee,
            weight_difference,
            days_until_target,
            daily_adjustment,
        },
    })
}

/// Compute the recommended daily plan with the default goal multipliers
pub fn compute_daily_calories(profile: &UserProfile, today: NaiveDate) -> PlanResult<DailyCaloriePlan> {
    estimate_daily_calories(profile, today, &PlanConfig::default()).map(|e| e.plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, ProfileRecord};
    use crate::nutrition::error::PlanError;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn male_cutting() -> UserProfile {
        UserProfile {
            gender: Gender::Male,
            age: 30,
            height: 175.0,
            current_weight: 80.0,
            target_weight: 75.0,
            target_date: today() + Duration::days(30),
            activity_level: ActivityLevel::Moderate,
        }
    }

    fn female_bulking() -> UserProfile {
        UserProfile {
            gender: Gender::Female,
            age: 25,
            height: 165.0,
            current_weight: 60.0,
            target_weight: 65.0,
            target_date: today() + Duration::days(60),
            activity_level: ActivityLevel::Light,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_male_bmr() {
        // 88.362 + 13.397*80 + 4.799*175 - 5.677*30
        assert_close(basal_metabolic_rate(Gender::Male, 80.0, 175.0, 30), 1829.637);
    }

    #[test]
    fn test_female_bmr() {
        // 447.593 + 9.247*60 + 3.098*165 - 4.330*25
        assert_close(basal_metabolic_rate(Gender::Female, 60.0, 165.0, 25), 1405.333);
    }

    #[test]
    fn test_male_weight_loss_fixture() {
        let estimate = estimate_daily_calories(&male_cutting(), today(), &PlanConfig::default())
            .unwrap();
        let b = &estimate.breakdown;

        assert_close(b.bmr, 1829.637);
        assert_close(b.tdee, 1829.637 * 1.55);
        assert_eq!(b.goal_multiplier, 0.85);
        assert_close(b.goal_adjusted_tdee, 1829.637 * 1.55 * 0.85);
        assert_eq!(b.weight_difference, -5.0);
        assert_eq!(b.days_until_target, 30);
        assert_close(b.daily_adjustment, -38500.0 / 30.0);

        assert_eq!(
            estimate.plan,
            DailyCaloriePlan {
                total: 1127,
                breakfast: 282,
                lunch: 394,
                dinner: 338,
                snack: 113,
            }
        );
    }

    #[test]
    fn test_female_weight_gain_fixture() {
        let plan = compute_daily_calories(&female_bulking(), today()).unwrap();
        // 1405.333 * 1.375 * 1.15 + 5 * 7700 / 60 = 2863.85
        assert_eq!(plan.total, 2864);
        assert_eq!(plan.breakfast, 716);
        assert_eq!(plan.lunch, 1002);
        assert_eq!(plan.dinner, 859);
        assert_eq!(plan.snack, 286);
        assert_eq!(plan.meal_sum(), 2863);
    }

    #[test]
    fn test_maintenance_uses_deficit_multiplier() {
        let mut profile = male_cutting();
        profile.target_weight = profile.current_weight;
        let estimate = estimate_daily_calories(&profile, today(), &PlanConfig::default()).unwrap();
        assert_eq!(estimate.breakdown.goal_multiplier, 0.85);
        assert_eq!(estimate.breakdown.daily_adjustment, 0.0);
        assert_eq!(
            estimate.plan.total,
            (1829.637_f64 * 1.55 * 0.85).round() as i64
        );
    }

    #[test]
    fn test_custom_goal_multipliers() {
        let config = PlanConfig {
            surplus_multiplier: 1.0,
            deficit_multiplier: 1.0,
            ..PlanConfig::default()
        };
        let estimate = estimate_daily_calories(&male_cutting(), today(), &config).unwrap();
        assert_eq!(estimate.breakdown.goal_multiplier, 1.0);
        assert_close(estimate.breakdown.goal_adjusted_tdee, 1829.637 * 1.55);
    }

    #[test]
    fn test_deterministic() {
        let profile = female_bulking();
        let first = compute_daily_calories(&profile, today()).unwrap();
        for _ in 0..10 {
            assert_eq!(compute_daily_calories(&profile, today()).unwrap(), first);
        }
    }

    #[test]
    fn test_meal_split_within_rounding_tolerance() {
        for level in ActivityLevel::ALL {
            let mut profile = male_cutting();
            profile.activity_level = level;
            let plan = compute_daily_calories(&profile, today()).unwrap();
            assert!((plan.meal_sum() - plan.total).abs() <= 1);
        }
    }

    #[test]
    fn test_rejects_same_day_and_past_targets() {
        let mut profile = male_cutting();
        profile.target_date = today();
        assert_eq!(
            compute_daily_calories(&profile, today()),
            Err(PlanError::InvalidProfile(ProfileIssue::TargetDateNotInFuture {
                target: today(),
                days: 0,
            }))
        );

        profile.target_date = today() - Duration::days(3);
        assert!(matches!(
            compute_daily_calories(&profile, today()),
            Err(PlanError::InvalidProfile(ProfileIssue::TargetDateNotInFuture { days: -3, .. }))
        ));
    }

    #[test]
    fn test_rejects_non_positive_fields() {
        let mut profile = male_cutting();
        profile.current_weight = 0.0;
        assert!(matches!(
            compute_daily_calories(&profile, today()),
            Err(PlanError::InvalidProfile(ProfileIssue::NonPositive { field: "current_weight", .. }))
        ));

        let mut profile = male_cutting();
        profile.age = 0;
        assert!(matches!(
            compute_daily_calories(&profile, today()),
            Err(PlanError::InvalidProfile(ProfileIssue::NonPositive { field: "age", .. }))
        ));

        let mut profile = male_cutting();
        profile.target_weight = f64::INFINITY;
        assert!(matches!(
            compute_daily_calories(&profile, today()),
            Err(PlanError::InvalidProfile(ProfileIssue::NonFinite { field: "target_weight" }))
        ));
    }

    #[test]
    fn test_rejects_estimates_outside_integer_range() {
        let mut profile = male_cutting();
        profile.height = 1e308;
        assert!(matches!(
            compute_daily_calories(&profile, today()),
            Err(PlanError::InvalidProfile(ProfileIssue::OutOfRange { field: "daily_calories", .. }))
        ));

        let mut profile = female_bulking();
        profile.current_weight = 1e300;
        assert!(matches!(
            compute_daily_calories(&profile, today()),
            Err(PlanError::InvalidProfile(ProfileIssue::OutOfRange { field: "daily_calories", .. }))
        ));
    }

    #[test]
    fn test_to_whole_kcal() {
        assert_eq!(to_whole_kcal(1127.21), Ok(1127));
        assert_eq!(to_whole_kcal(-12.5), Ok(-13));
        assert!(to_whole_kcal(f64::INFINITY).is_err());
        assert!(to_whole_kcal(1e19).is_err());
    }

    #[test]
    fn test_unknown_activity_level_is_rejected_not_defaulted() {
        let record = ProfileRecord {
            gender: "male".to_string(),
            age: 30,
            height: 175.0,
            current_weight: 80.0,
            target_weight: 75.0,
            target_date: "2026-11-17".to_string(),
            activity_level: "athlete".to_string(),
        };
        let result = record
            .to_profile()
            .and_then(|profile| compute_daily_calories(&profile, today()));
        assert!(matches!(
            result,
            Err(PlanError::InvalidProfile(ProfileIssue::UnknownActivityLevel(_)))
        ));
    }
}
