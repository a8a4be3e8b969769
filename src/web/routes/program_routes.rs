use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;

use crate::web::models::message_models::ProgramSummary;
use crate::web::{AppError, AppState};

const PROGRAM_FETCH_LIMIT: u32 = 50;

#[derive(Serialize)]
pub struct ProgramListResponse {
    pub address: String,
    pub count: usize,
    pub programs: Vec<ProgramSummary>,
}

async fn list_programs_handler(
    State(app_state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Json<ProgramListResponse>, AppError> {
    let batch = app_state
        .aleph
        .recent_messages(Some(&address), Some("PROGRAM"), PROGRAM_FETCH_LIMIT)
        .await?;

    let programs: Vec<ProgramSummary> = batch
        .messages
        .iter()
        .map(ProgramSummary::from_message)
        .collect();

    Ok(Json(ProgramListResponse {
        address,
        count: programs.len(),
        programs,
    }))
}

pub fn program_router() -> Router<Arc<AppState>> {
    Router::new().route("/programs/{address}", get(list_programs_handler))
}
