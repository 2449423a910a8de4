//! Login and logout endpoints

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::session::Role,
    AppState,
};

use super::{OkResponse, TOKEN_HEADER};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub expires_in: u64,
}

/// Authenticate against the database and open a session.
///
/// The submitted credentials are only used to establish the verification
/// connection; they are never stored.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (user, password) = match (request.user, request.password) {
        (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => {
            (user, password)
        }
        _ => return Err(AppError::BadRequest("user and password required".to_string())),
    };

    let role = state.auth.login(&user, &password).await?;
    let (token, _) = state.sessions.create(&user, role).await;

    tracing::info!("session opened for {} as {}", user, role.as_str());

    Ok(Json(LoginResponse {
        token,
        role,
        expires_in: state.config.auth.token_ttl_secs,
    }))
}

#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub token: Option<String>,
}

/// Close a session. Idempotent: unknown tokens are acknowledged too.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<LogoutRequest>>,
) -> Json<OkResponse> {
    let token = body
        .and_then(|Json(request)| request.token)
        .or_else(|| {
            headers
                .get(TOKEN_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_string())
        });

    if let Some(token) = token {
        state.sessions.remove(&token).await;
    }

    Json(OkResponse { ok: true })
}
