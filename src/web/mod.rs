use axum::{Json, Router, http::Method, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::server::config::ServerConfig;
use crate::services::aleph::AlephClient;
use crate::version::VERSION;
use crate::web::routes::*;

pub mod error;
pub mod models;
pub mod routes;

pub use error::AppError;

pub struct AppState {
    pub aleph: AlephClient,
    pub config: Arc<ServerConfig>,
}

#[derive(Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
    endpoints: [&'static str; 7],
}

async fn service_info_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Aleph Cloud Monitor",
        version: VERSION,
        endpoints: [
            "/instances/{address}",
            "/programs/{address}",
            "/credits/{address}",
            "/messages/{address}",
            "/network/stats",
            "/network/nodes",
            "/dashboard",
        ],
    })
}

pub fn create_axum_router(aleph: AlephClient, config: Arc<ServerConfig>) -> Router {
    let app_state = Arc::new(AppState { aleph, config });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(service_info_handler))
        .merge(instance_routes::instance_router())
        .merge(program_routes::program_router())
        .merge(credit_routes::credit_router())
        .merge(message_routes::message_router())
        .merge(network_routes::network_router())
        .merge(dashboard_routes::dashboard_router())
        .with_state(app_state)
        .layer(cors)
}
