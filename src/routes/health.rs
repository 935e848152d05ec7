use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// GET /healthz - Liveness probe
/// Returns 200 OK if the process is alive, regardless of authentication
/// state
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
