//! nutriplan MCP Server Implementation
//!
//! Implements the MCP server with all nutriplan tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::PlanConfig;
use crate::models::{MealRecord, ProfileRecord, WeightRecord};
use crate::tools::plans;
use crate::tools::status::StatusTracker;

/// nutriplan MCP Service
#[derive(Clone)]
pub struct NutriplanService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<PlanConfig>,
    tool_router: ToolRouter<NutriplanService>,
}

impl NutriplanService {
    pub fn new(config: PlanConfig) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.clone()))),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

/// Serialize a tool response as pretty JSON
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProfileParams {
    /// male or female
    pub gender: String,
    /// Age in years
    pub age: i64,
    /// Height in cm
    pub height: f64,
    /// Current weight in kg
    pub current_weight: f64,
    /// Target weight in kg
    pub target_weight: f64,
    /// Target date (YYYY-MM-DD), must be after today
    pub target_date: String,
    /// sedentary, light, moderate, active or very_active
    pub activity_level: String,
}

impl From<ProfileParams> for ProfileRecord {
    fn from(p: ProfileParams) -> Self {
        Self {
            gender: p.gender,
            age: p.age,
            height: p.height,
            current_weight: p.current_weight,
            target_weight: p.target_weight,
            target_date: p.target_date,
            activity_level: p.activity_level,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateNutritionPlanParams {
    #[serde(flatten)]
    pub profile: ProfileParams,
    /// Reference date (YYYY-MM-DD). Defaults to the server's local date.
    pub today: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WeightEntryParams {
    /// Weight in kg
    pub weight: f64,
    /// When the weight was recorded (RFC 3339, YYYY-MM-DD HH:MM:SS or YYYY-MM-DD)
    pub recorded_at: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateGoalProgressParams {
    /// Recorded weights, any order
    pub weights: Vec<WeightEntryParams>,
    /// Target weight in kg
    pub target_weight: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProjectWeightParams {
    #[serde(flatten)]
    pub profile: ProfileParams,
    /// Reference date (YYYY-MM-DD). Defaults to the server's local date.
    pub today: Option<String>,
    /// Days between projected points (default from server config, usually 7)
    pub step_days: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MealEntryParams {
    /// breakfast, lunch, dinner or snack
    pub meal_type: String,
    /// What was eaten
    #[serde(default)]
    pub food: String,
    /// Calories in kcal
    pub calories: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SummarizeMealIntakeParams {
    /// Daily calorie target in kcal
    pub daily_calories: i64,
    /// Meals logged for the day
    pub meals: Vec<MealEntryParams>,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl NutriplanService {
    // --- Status ---

    #[tool(description = "Get the current status of the nutriplan service including build info, configuration, and process information")]
    async fn nutriplan_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for calculating nutrition plans, goal progress, projections and intake summaries. Call this when unsure how to use the nutriplan tools.")]
    fn plan_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PLAN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PLAN_INSTRUCTIONS)]))
    }

    // --- Plans ---

    #[tool(description = "Calculate the recommended daily calories and per-meal split (breakfast 25%, lunch 35%, dinner 30%, snack 10%) from a profile and weight goal")]
    fn calculate_nutrition_plan(&self, Parameters(p): Parameters<CalculateNutritionPlanParams>) -> Result<CallToolResult, McpError> {
        let record = ProfileRecord::from(p.profile);
        let result = plans::calculate_nutrition_plan(&self.config, &record, p.today.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Calculate progress towards a target weight from recorded weights (first vs. latest). Not clamped: above 100% means the target was passed.")]
    fn calculate_goal_progress(&self, Parameters(p): Parameters<CalculateGoalProgressParams>) -> Result<CallToolResult, McpError> {
        let records: Vec<WeightRecord> = p
            .weights
            .into_iter()
            .map(|w| WeightRecord { weight: w.weight, recorded_at: w.recorded_at })
            .collect();
        let result = plans::calculate_goal_progress(&records, p.target_weight)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Project a straight-line weight trajectory from today to the target date")]
    fn project_weight_trajectory(&self, Parameters(p): Parameters<ProjectWeightParams>) -> Result<CallToolResult, McpError> {
        let record = ProfileRecord::from(p.profile);
        let result = plans::project_weight_trajectory(&self.config, &record, p.today.as_deref(), p.step_days)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Compare logged meals with a daily calorie target, per meal and in total")]
    fn summarize_meal_intake(&self, Parameters(p): Parameters<SummarizeMealIntakeParams>) -> Result<CallToolResult, McpError> {
        let records: Vec<MealRecord> = p
            .meals
            .into_iter()
            .map(|m| MealRecord { meal_type: m.meal_type, food: m.food, calories: m.calories })
            .collect();
        let result = plans::summarize_meal_intake(p.daily_calories, &records)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for NutriplanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: crate::build_info::NAME.into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Nutrition Plan Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nutrition Plan Calculator - daily calorie targets, meal splits and weight goal progress. \
                 IMPORTANT: Call plan_instructions first if unsure. \
                 Plans: calculate_nutrition_plan, project_weight_trajectory. \
                 Progress: calculate_goal_progress. \
                 Meals: summarize_meal_intake. \
                 Status: nutriplan_status."
                    .into(),
            ),
        }
    }
}
