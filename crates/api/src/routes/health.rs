//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

use crate::catalog;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub patterns: usize,
}

/// GET /health: reports liveness and the size of the catalog.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        patterns: catalog::all().len(),
    })
}
