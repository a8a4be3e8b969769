use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::web::{AppError, AppState};

const DASHBOARD_TEMPLATE: &str = include_str!("../../../templates/dashboard.html");

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub address: Option<String>,
}

/// Static shell; all data loading happens client-side against this
/// service's own JSON endpoints.
async fn dashboard_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let address = params
        .address
        .unwrap_or_else(|| app_state.config.dashboard_address.clone());

    let mut context = Context::new();
    context.insert("address", &address);

    let html = Tera::one_off(DASHBOARD_TEMPLATE, &context, true)
        .map_err(|e| AppError::InternalServerError(format!("Failed to render dashboard: {e}")))?;

    Ok(Html(html))
}

pub fn dashboard_router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(dashboard_handler))
}
