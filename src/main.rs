//! Benefit consensus service entry point.

use anyhow::Context;
use benefit_consensus::api::rest::{AppState, create_router};
use benefit_consensus::application::services::BenefitAggregationEngine;
use benefit_consensus::config::{ProviderConfig, ServiceConfig};
use benefit_consensus::telemetry::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let config = ServiceConfig::from_env().context("failed to load service configuration")?;
    init_tracing(config.log_format);

    let provider_config = ProviderConfig::default();
    let providers = provider_config
        .build_providers()
        .context("failed to build provider clients")?;
    let engine = BenefitAggregationEngine::new(providers);
    let router = create_router(Arc::new(AppState::new(engine)));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        providers = ?provider_config.urls,
        "benefit consensus service listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("benefit consensus service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
