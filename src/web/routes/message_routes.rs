use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::web::models::message_models::MessageSummary;
use crate::web::{AppError, AppState};

const DEFAULT_MESSAGE_LIMIT: u32 = 10;
const MAX_MESSAGE_LIMIT: u32 = 50;

#[derive(Deserialize)]
pub struct MessageListQuery {
    pub limit: Option<u32>,
}

#[derive(Serialize)]
pub struct MessageListResponse {
    pub address: String,
    pub count: usize,
    pub messages: Vec<MessageSummary>,
}

async fn list_messages_handler(
    State(app_state): State<Arc<AppState>>,
    Path(address): Path<String>,
    Query(params): Query<MessageListQuery>,
) -> Result<Json<MessageListResponse>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_MESSAGE_LIMIT);
    if limit > MAX_MESSAGE_LIMIT {
        return Err(AppError::InvalidInput(format!(
            "limit must be {MAX_MESSAGE_LIMIT} or less"
        )));
    }

    let batch = app_state
        .aleph
        .recent_messages(Some(&address), None, limit)
        .await?;

    let messages: Vec<MessageSummary> = batch
        .messages
        .iter()
        .map(MessageSummary::from_message)
        .collect();

    Ok(Json(MessageListResponse {
        address,
        count: messages.len(),
        messages,
    }))
}

pub fn message_router() -> Router<Arc<AppState>> {
    Router::new().route("/messages/{address}", get(list_messages_handler))
}
