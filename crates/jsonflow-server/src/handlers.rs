//! REST API handlers for the JSON flow server

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use jsonflow_core::{
    build_flow_with_config, parse_json, relayout, resolve_with_tier, Flow, FlowGraph, MatchTier,
    Resolution,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{error::ApiError, ServerState};

/// Raw JSON text as typed by the user.
#[derive(Debug, Deserialize)]
pub struct FlowRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    /// Ids to search; the current flow's ids when omitted.
    #[serde(default)]
    pub node_ids: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    #[serde(rename = "match")]
    pub matched: Option<String>,
    pub tier: Option<MatchTier>,
    pub status: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Parse, build and lay out a document; it becomes the current flow.
pub async fn build_flow(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<FlowRequest>,
) -> Result<Json<Flow>, ApiError> {
    let value = parse_json(&request.text).map_err(ApiError::InvalidJson)?;
    let flow = build_flow_with_config(&value, &state.layout);
    info!(
        "Visualization updated: {} nodes, {} edges",
        flow.nodes.len(),
        flow.edges.len()
    );

    *state.flow.write().await = flow.clone();
    Ok(Json(flow))
}

/// Get the current flow as JSON
pub async fn current_flow(State(state): State<Arc<ServerState>>) -> Json<Flow> {
    Json(state.flow.read().await.clone())
}

pub async fn clear_flow(State(state): State<Arc<ServerState>>) -> StatusCode {
    *state.flow.write().await = Flow::new();
    debug!("Cleared current flow");
    StatusCode::NO_CONTENT
}

/// Resolve a path query against the supplied ids or the current flow.
pub async fn search(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let resolution = match &request.node_ids {
        Some(ids) => resolve_with_tier(&request.query, ids),
        None => {
            let flow = state.flow.read().await;
            resolve_with_tier(&request.query, &flow.node_ids())
        }
    };
    debug!("Search {:?} -> {:?}", request.query, resolution);

    Json(SearchResponse {
        status: Resolution::status(resolution.as_ref()),
        tier: resolution.as_ref().map(|r| r.tier),
        matched: resolution.map(|r| r.id),
    })
}

/// Lay out a client-supplied record set after checking it is a tree.
pub async fn layout_flow(
    State(state): State<Arc<ServerState>>,
    Json(mut flow): Json<Flow>,
) -> Result<Json<Flow>, ApiError> {
    FlowGraph::from_records(&flow.nodes, &flow.edges)
        .validate()
        .map_err(ApiError::MalformedFlow)?;
    relayout(&mut flow, &state.layout);
    Ok(Json(flow))
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    let health = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(health)
}
