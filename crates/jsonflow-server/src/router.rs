//! Axum router setup for the JSON flow server

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    handlers::{build_flow, clear_flow, current_flow, health_check, layout_flow, search},
    ServerState,
};

/// Create the axum router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/flow",
            get(current_flow).post(build_flow).delete(clear_flow),
        )
        .route("/api/search", post(search))
        .route("/api/layout", post(layout_flow))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
