use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    healthy: bool,
}

/// Liveness probe target.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { healthy: true })
}
