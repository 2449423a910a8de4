//! API handlers for the Biblioteca REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod loans;
pub mod logs;
pub mod members;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use serde::Serialize;

use crate::{error::AppError, models::session::Session, AppState};

/// Header carrying the session token
pub const TOKEN_HEADER: &str = "X-Auth-Token";

/// Acknowledgment body for update/delete/logout
#[derive(Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Body returned by create operations
#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: i32,
}

/// Extractor validating the session token on protected routes.
///
/// This is the single enforcement point: the token comes from the
/// `X-Auth-Token` header, falling back to the `token` query parameter,
/// and must map to a live session. Role checks happen in the handler via
/// [`Session::require_admin`].
pub struct AuthSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = token_from_parts(parts)
            .ok_or_else(|| AppError::Unauthenticated("missing token".to_string()))?;

        let session = state
            .sessions
            .lookup(&token)
            .await
            .ok_or_else(|| AppError::Unauthenticated("invalid or expired token".to_string()))?;

        Ok(AuthSession(session))
    }
}

fn token_from_parts(parts: &Parts) -> Option<String> {
    // An empty header value counts as absent, so the query fallback
    // still applies.
    if let Some(value) = parts
        .headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
    {
        return Some(value.to_string());
    }

    parts.uri.query().and_then(token_from_query)
}

/// Tokens are uuids, so no percent-decoding is needed here.
fn token_from_query(query: &str) -> Option<String> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
}
