//! Loan management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::loan::{CreateLoan, LoanOverview, LoanQuery, LoanStatus, UpdateLoan},
    AppState,
};

use super::{AuthSession, CreatedResponse, OkResponse};

/// List loans, optionally filtered by `?status=in_progress|returned`
pub async fn list_loans(
    State(state): State<AppState>,
    AuthSession(_session): AuthSession,
    Query(query): Query<LoanQuery>,
) -> AppResult<Json<Vec<LoanOverview>>> {
    let status = query.status.as_deref().and_then(LoanStatus::parse);
    let loans = state.repository.loans.list(status).await?;
    Ok(Json(loans))
}

/// Create a new loan (admin only)
pub async fn create_loan(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Json(loan): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    session.require_admin()?;

    let (member_id, book_id) = match (loan.member_id, loan.book_id) {
        (Some(member_id), Some(book_id)) => (member_id, book_id),
        _ => return Err(AppError::BadRequest("member_id and book_id required".to_string())),
    };

    let id = state.repository.loans.create(member_id, book_id).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update a loan (admin only)
pub async fn update_loan(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<i32>,
    Json(loan): Json<UpdateLoan>,
) -> AppResult<Json<OkResponse>> {
    session.require_admin()?;

    state.repository.loans.update(id, &loan).await?;
    Ok(Json(OkResponse { ok: true }))
}

/// Delete a loan (admin only)
pub async fn delete_loan(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<i32>,
) -> AppResult<Json<OkResponse>> {
    session.require_admin()?;

    state.repository.loans.delete(id).await?;
    Ok(Json(OkResponse { ok: true }))
}

/// Mark a loan returned with today's date (admin only)
pub async fn return_loan(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<i32>,
) -> AppResult<Json<OkResponse>> {
    session.require_admin()?;

    state.repository.loans.mark_returned(id).await?;
    Ok(Json(OkResponse { ok: true }))
}
