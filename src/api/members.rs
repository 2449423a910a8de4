//! Member management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
    AppState,
};

use super::{AuthSession, CreatedResponse, OkResponse};

/// List all members
pub async fn list_members(
    State(state): State<AppState>,
    AuthSession(_session): AuthSession,
) -> AppResult<Json<Vec<Member>>> {
    let members = state.repository.members.list().await?;
    Ok(Json(members))
}

/// Create a new member (admin only)
pub async fn create_member(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Json(member): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    session.require_admin()?;

    let (name, kind) = match (&member.name, &member.kind) {
        (Some(name), Some(kind)) if !name.is_empty() && !kind.is_empty() => (name, kind),
        _ => return Err(AppError::BadRequest("name and kind required".to_string())),
    };

    let id = state
        .repository
        .members
        .create(name, kind, member.email.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update a member (admin only)
pub async fn update_member(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<i32>,
    Json(member): Json<UpdateMember>,
) -> AppResult<Json<OkResponse>> {
    session.require_admin()?;

    state.repository.members.update(id, &member).await?;
    Ok(Json(OkResponse { ok: true }))
}

/// Delete a member (admin only)
pub async fn delete_member(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<i32>,
) -> AppResult<Json<OkResponse>> {
    session.require_admin()?;

    state.repository.members.delete(id).await?;
    Ok(Json(OkResponse { ok: true }))
}
