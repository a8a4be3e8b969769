use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::web::models::network_models::{NodeSummary, tally_message_types};
use crate::web::{AppError, AppState};

const STATS_SAMPLE_SIZE: u32 = 100;
const TOP_NODE_COUNT: usize = 20;

#[derive(Serialize)]
pub struct NetworkStatsResponse {
    pub sample_size: u32,
    pub message_types: HashMap<String, u64>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct NodeListResponse {
    pub count: usize,
    pub top_nodes: Vec<NodeSummary>,
}

async fn network_stats_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<NetworkStatsResponse>, AppError> {
    let batch = app_state
        .aleph
        .recent_messages(None, None, STATS_SAMPLE_SIZE)
        .await?;

    Ok(Json(NetworkStatsResponse {
        sample_size: STATS_SAMPLE_SIZE,
        message_types: tally_message_types(&batch.messages),
        timestamp: Utc::now(),
    }))
}

async fn network_nodes_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<NodeListResponse>, AppError> {
    let nodes = app_state.aleph.resource_nodes().await?;

    let top_nodes: Vec<NodeSummary> = nodes
        .iter()
        .take(TOP_NODE_COUNT)
        .map(NodeSummary::from_node)
        .collect();

    // count is the full registry size, not the truncated list
    Ok(Json(NodeListResponse {
        count: nodes.len(),
        top_nodes,
    }))
}

pub fn network_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/network/stats", get(network_stats_handler))
        .route("/network/nodes", get(network_nodes_handler))
}
