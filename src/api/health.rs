//! Health check endpoint

use axum::Json;

use super::OkResponse;

/// Liveness probe; no auth, no database round trip
pub async fn health_check() -> Json<OkResponse> {
    Json(OkResponse { ok: true })
}
