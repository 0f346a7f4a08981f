//! # REST Handlers
//!
//! Request handlers, shared state and response types.

use crate::application::services::BenefitAggregationEngine;
use crate::domain::entities::BenefitSummary;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::MemberId;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for all handlers.
#[derive(Debug)]
pub struct AppState {
    /// Engine reconciling provider answers.
    pub engine: BenefitAggregationEngine,
}

impl AppState {
    /// Creates the state around an engine.
    #[must_use]
    pub fn new(engine: BenefitAggregationEngine) -> Self {
        Self { engine }
    }
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable description.
    pub message: String,
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Number of configured providers.
    pub providers: usize,
}

/// Errors surfaced to HTTP clients.
///
/// Provider failures never appear here; they degrade the summary instead.
#[derive(Debug)]
pub enum ApiError {
    /// The path segment is not a positive integer.
    InvalidMemberId(DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::InvalidMemberId(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "invalid_member_id".to_string(),
                    message: e.to_string(),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// `GET /{member_id}`: consensus benefit figures for a member.
pub async fn get_member_benefits(
    State(state): State<Arc<AppState>>,
    Path(raw_member_id): Path<String>,
) -> Result<Json<BenefitSummary>, ApiError> {
    let member_id: MemberId = raw_member_id.parse().map_err(|e| {
        tracing::debug!(member_id = %raw_member_id, error = %e, "rejected member id");
        ApiError::InvalidMemberId(e)
    })?;

    let summary = state.engine.summarize(&member_id).await;
    Ok(Json(summary))
}

/// `GET /health`: liveness check.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        providers: state.engine.provider_count(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_member_id_maps_to_422() {
        let state = Arc::new(AppState::new(BenefitAggregationEngine::new(vec![])));
        let result = get_member_benefits(State(state), Path("abc".to_string())).await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn no_providers_returns_nulls() {
        let state = Arc::new(AppState::new(BenefitAggregationEngine::new(vec![])));
        let Json(summary) = get_member_benefits(State(state), Path("7".to_string()))
            .await
            .unwrap();

        assert_eq!(summary, BenefitSummary::default());
    }

    #[tokio::test]
    async fn health_reports_provider_count() {
        let state = Arc::new(AppState::new(BenefitAggregationEngine::new(vec![])));
        let Json(body) = health(State(state)).await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.providers, 0);
    }
}
