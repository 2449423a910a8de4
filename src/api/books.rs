//! Book management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    AppState,
};

use super::{AuthSession, CreatedResponse, OkResponse};

/// List all books
pub async fn list_books(
    State(state): State<AppState>,
    AuthSession(_session): AuthSession,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.repository.books.list().await?;
    Ok(Json(books))
}

/// Create a new book (admin only)
pub async fn create_book(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    session.require_admin()?;

    let title = match &book.title {
        Some(title) if !title.is_empty() => title,
        _ => return Err(AppError::BadRequest("title required".to_string())),
    };

    let id = state
        .repository
        .books
        .create(
            title,
            book.author.as_deref(),
            book.isbn.as_deref(),
            book.quantity.unwrap_or(1),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update a book (admin only)
pub async fn update_book(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<i32>,
    Json(book): Json<UpdateBook>,
) -> AppResult<Json<OkResponse>> {
    session.require_admin()?;

    state.repository.books.update(id, &book).await?;
    Ok(Json(OkResponse { ok: true }))
}

/// Delete a book (admin only)
pub async fn delete_book(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<i32>,
) -> AppResult<Json<OkResponse>> {
    session.require_admin()?;

    state.repository.books.delete(id).await?;
    Ok(Json(OkResponse { ok: true }))
}
