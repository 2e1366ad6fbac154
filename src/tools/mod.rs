//! nutriplan Tools module
//!
//! MCP tool implementations for the Nutrition Plan Calculator.

pub mod plans;
pub mod status;
