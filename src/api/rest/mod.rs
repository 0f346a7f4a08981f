//! # REST API
//!
//! HTTP endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /{member_id}` - Consensus benefit figures for a member
//! - `GET /health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use benefit_consensus::api::rest::{create_router, AppState};
//! use benefit_consensus::application::services::BenefitAggregationEngine;
//! use benefit_consensus::config::ProviderConfig;
//! use std::sync::Arc;
//!
//! let engine = BenefitAggregationEngine::new(ProviderConfig::default().build_providers()?);
//! let router = create_router(Arc::new(AppState::new(engine)));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState, ErrorResponse, HealthResponse};
pub use routes::create_router;
