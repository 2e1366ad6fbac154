//! Nutrition Plan Calculator (nutriplan) Library
//!
//! Daily calorie targets, meal splits and weight goal progress.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
