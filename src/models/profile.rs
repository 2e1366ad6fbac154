//! User profile model
//!
//! Anthropometric profile and goal parameters, plus the persisted row shape
//! they are loaded from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::parse_date;
use crate::nutrition::error::{require_positive, PlanResult, ProfileIssue};

/// Gender enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Activity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Some(ActivityLevel::Light),
            "moderate" | "moderately_active" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (mostly desk work)",
            ActivityLevel::Light => "Light exercise",
            ActivityLevel::Moderate => "Moderate exercise",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very active",
        }
    }

    /// TDEE multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// A user's profile and weight goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Gender,
    pub age: u32,
    pub height: f64,         // cm
    pub current_weight: f64, // kg
    pub target_weight: f64,  // kg
    pub target_date: NaiveDate,
    pub activity_level: ActivityLevel,
}

impl UserProfile {
    /// Check the numeric preconditions shared by every calculation
    pub fn validate(&self) -> Result<(), ProfileIssue> {
        if self.age == 0 {
            return Err(ProfileIssue::NonPositive { field: "age", value: 0.0 });
        }
        require_positive("height", self.height)?;
        require_positive("current_weight", self.current_weight)?;
        require_positive("target_weight", self.target_weight)?;
        Ok(())
    }

    /// Signed change still required to reach the target (kg)
    pub fn weight_difference(&self) -> f64 {
        self.target_weight - self.current_weight
    }

    /// Whole days from `today` to the target date
    pub fn days_until_target(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days()
    }
}

/// A nutrition plan row as persisted by the record store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub gender: String,
    pub age: i64,
    pub height: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    pub target_date: String,
    pub activity_level: String,
}

impl ProfileRecord {
    /// Convert to a validated profile
    pub fn to_profile(&self) -> PlanResult<UserProfile> {
        let gender = Gender::from_str(&self.gender)
            .ok_or_else(|| ProfileIssue::UnknownGender(self.gender.clone()))?;
        let activity_level = ActivityLevel::from_str(&self.activity_level)
            .ok_or_else(|| ProfileIssue::UnknownActivityLevel(self.activity_level.clone()))?;
        let target_date = parse_date(&self.target_date)
            .ok_or_else(|| ProfileIssue::UnparseableDate(self.target_date.clone()))?;

        if self.age <= 0 {
            return Err(ProfileIssue::NonPositive { field: "age", value: self.age as f64 }.into());
        }
        let age = u32::try_from(self.age)
            .map_err(|_| ProfileIssue::OutOfRange { field: "age", value: self.age as f64 })?;

        let profile = UserProfile {
            gender,
            age,
            height: self.height,
            current_weight: self.current_weight,
            target_weight: self.target_weight,
            target_date,
            activity_level,
        };
        profile.validate()?;
        Ok(profile)
    }
}

impl From<&UserProfile> for ProfileRecord {
    fn from(profile: &UserProfile) -> Self {
        Self {
            gender: profile.gender.as_str().to_string(),
            age: i64::from(profile.age),
            height: profile.height,
            current_weight: profile.current_weight,
            target_weight: profile.target_weight,
            target_date: profile.target_date.format("%Y-%m-%d").to_string(),
            activity_level: profile.activity_level.as_str().to_string(),
        }
    }
}
