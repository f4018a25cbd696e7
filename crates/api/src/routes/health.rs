use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "ProMag API";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    /// Overall service status: `"ok"` or `"degraded"`.
    pub status: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health/ -- returns service and database health. No auth.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = promag_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        service: SERVICE_NAME,
        status,
        db_healthy,
    })
}

/// Mount the health check route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health/", get(health_check))
}
