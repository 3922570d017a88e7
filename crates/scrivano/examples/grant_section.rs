//! Generates a grant section against a live endpoint.
//!
//! Endpoint settings come from the environment (see `.env.example`):
//!   SCRIVANO_BASE_URL, SCRIVANO_USERNAME, SCRIVANO_PASSWORD
//!
//! Run with: cargo run --package scrivano --example grant_section

use anyhow::Result;
use scrivano::{
    DEFAULT_MODEL, EndpointConfig, GenerationStrategy, GrantComposer, GrantDetails, HttpTransport,
};
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_target(false)
        .init();

    let config = EndpointConfig::builder()
        .base_url(std::env::var("SCRIVANO_BASE_URL")?)
        .username(std::env::var("SCRIVANO_USERNAME")?)
        .password(std::env::var("SCRIVANO_PASSWORD")?)
        .build()?;

    let transport = HttpTransport::new(config)?;
    let composer = GrantComposer::new(GenerationStrategy::new(transport, DEFAULT_MODEL));

    let details = GrantDetails::builder()
        .project_name("River Cleanup")
        .organization_name("Clearwater Trust")
        .funding_goal(50_000u64)
        .deadline("2026-03-01")
        .project_description("Remove industrial debris from the upper watershed.")
        .build()?;

    tracing::info!(project = %details.project_name(), "Generating grant section");

    match composer.generate_section(&details).await {
        Ok(section) => println!("{}", section),
        Err(e) => {
            tracing::error!(error = %e, "Generation failed");
            println!("Unable to generate grant section. Please try again.");
        }
    }

    Ok(())
}
