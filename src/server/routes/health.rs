//! Health check route

use axum::{extract::State, Json};

use crate::server::models::HealthResponse;
use crate::server::AppState;

/// Liveness check: the service is up and responsive.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
