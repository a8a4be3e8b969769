use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;

use crate::web::models::message_models::InstanceSummary;
use crate::web::{AppError, AppState};

// The index caps a single page at 50; everything an address owns fits.
const INSTANCE_FETCH_LIMIT: u32 = 50;

#[derive(Serialize)]
pub struct InstanceListResponse {
    pub address: String,
    pub count: usize,
    pub instances: Vec<InstanceSummary>,
}

async fn list_instances_handler(
    State(app_state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Json<InstanceListResponse>, AppError> {
    let batch = app_state
        .aleph
        .recent_messages(Some(&address), Some("INSTANCE"), INSTANCE_FETCH_LIMIT)
        .await?;

    let instances: Vec<InstanceSummary> = batch
        .messages
        .iter()
        .map(InstanceSummary::from_message)
        .collect();

    Ok(Json(InstanceListResponse {
        address,
        count: instances.len(),
        instances,
    }))
}

pub fn instance_router() -> Router<Arc<AppState>> {
    Router::new().route("/instances/{address}", get(list_instances_handler))
}
