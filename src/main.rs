//! Nutrition Plan Calculator (nutriplan)
//!
//! An MCP server for calorie targets and weight goal tracking.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutriplan::build_info;
use nutriplan::config::PlanConfig;
use nutriplan::mcp::NutriplanService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutriplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = PlanConfig::from_env();
    tracing::info!(
        surplus_multiplier = config.surplus_multiplier,
        deficit_multiplier = config.deficit_multiplier,
        projection_step_days = config.projection_step_days,
        "loaded plan configuration"
    );

    let service = NutriplanService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
