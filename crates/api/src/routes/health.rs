use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use talentsync_core::templates::catalog;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    templates: usize,
}

#[derive(Serialize)]
struct VersionResponse {
    name: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        templates: catalog().len(),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
