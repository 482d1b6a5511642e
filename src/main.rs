use anyhow::{Context, Result};

use agriadvisor::{AdviceService, AgriAdvisorConfig, AppState, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AgriAdvisorConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging)?;

    tracing::info!("Starting AgriAdvisor {}", agriadvisor::VERSION);
    for provider in config.missing_api_keys() {
        tracing::warn!(
            "No API key configured for the {} provider; weather advice requests will fail",
            provider
        );
    }

    let advice = AdviceService::from_config(&config).context("Failed to build advice service")?;
    web::run(&config.server, AppState::new(advice)).await
}
