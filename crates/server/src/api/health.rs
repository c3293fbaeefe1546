use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// `GET /health` -- returns service status.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
