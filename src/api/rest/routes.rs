//! # REST Routes
//!
//! Router assembly.

use crate::api::rest::handlers::{AppState, get_member_benefits, health};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/{member_id}", get(get_member_benefits))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
