use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::web::{AppError, AppState};

#[derive(Serialize)]
pub struct CreditsResponse {
    pub address: String,
    pub balance: Option<Value>,
    pub total_cost: Option<Value>,
    pub vms: Vec<Value>,
}

// Distinct from the transport-failure envelope: this shape keeps the
// address and a fixed message, and is only produced when the accounting
// service answered with a non-success status.
#[derive(Serialize)]
pub struct CreditsUnavailable {
    pub address: String,
    pub error: &'static str,
}

async fn get_credits_handler(
    State(app_state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Response, AppError> {
    match app_state.aleph.vm_cost_view(&address).await? {
        Some(view) => Ok(Json(CreditsResponse {
            address,
            balance: view.balance,
            total_cost: view.total_cost,
            vms: view.vms.unwrap_or_default(),
        })
        .into_response()),
        None => Ok(Json(CreditsUnavailable {
            address,
            error: "Could not fetch credits",
        })
        .into_response()),
    }
}

pub fn credit_router() -> Router<Arc<AppState>> {
    Router::new().route("/credits/{address}", get(get_credits_handler))
}
