//! Activity log endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::log_entry::LogEntry, AppState};

use super::AuthSession;

/// Last 500 loan log rows, newest first
pub async fn list_logs(
    State(state): State<AppState>,
    AuthSession(_session): AuthSession,
) -> AppResult<Json<Vec<LogEntry>>> {
    let logs = state.repository.logs.recent().await?;
    Ok(Json(logs))
}
