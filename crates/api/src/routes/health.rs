use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::config::StorageBackend;
use crate::state::{AppState, MemoryState};

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Active storage backend.
    pub storage: &'static str,
    /// Whether the database is reachable (`postgres` backend only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_healthy: Option<bool>,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = msgapi_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        storage: StorageBackend::Postgres.as_str(),
        db_healthy: Some(db_healthy),
    })
}

/// GET /health for the `memory` backend; always healthy.
async fn memory_health_check(State(_state): State<MemoryState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: StorageBackend::Memory.as_str(),
        db_healthy: None,
    })
}

/// Mount health check routes (root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Mount health check routes for the `memory` backend.
pub fn memory_router() -> Router<MemoryState> {
    Router::new().route("/health", get(memory_health_check))
}
