use axum::Json;
use tones_shared::HealthResponse;

/// GET /health liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
