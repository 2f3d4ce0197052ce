//! Handlers for book catalogue endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::book::{BookDetailResponse, BookRequest, BookSummary};
use crate::api::dto::pagination::PaginationParams;
use crate::api::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists books ordered by name.
///
/// # Endpoint
///
/// `GET /books?page=1&limit=10`
///
/// # Errors
///
/// Returns 400 if pagination parameters are invalid.
pub async fn list_books_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Vec<BookSummary>>, AppError> {
    let options = params
        .validate_and_get_options()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let books = state.book_service.get_all_books(options).await?;

    Ok(Json(books.into_iter().map(BookSummary::from).collect()))
}

/// Returns a book with its average score.
///
/// # Endpoint
///
/// `GET /books/{id}`
///
/// `score` is the average of all scored returns formatted with two
/// decimals (`"4.50"`), or `-1` if the book was never rated.
///
/// # Errors
///
/// Returns 404 if the book does not exist.
pub async fn get_book_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<BookDetailResponse>, AppError> {
    let rated = state.book_service.get_book_by_id(id).await?;
    Ok(Json(rated.into()))
}

/// Adds a book to the catalogue.
///
/// # Endpoint
///
/// `POST /books`
pub async fn create_book_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookRequest>,
) -> Result<(StatusCode, Json<BookSummary>), AppError> {
    let book = state.book_service.create_book(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(book.into())))
}

/// Renames a book.
///
/// # Endpoint
///
/// `PUT /books/{id}`
///
/// # Errors
///
/// Returns 400 if the body is invalid.
/// Returns 404 if the book does not exist.
pub async fn update_book_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookRequest>,
) -> Result<Json<BookSummary>, AppError> {
    let book = state.book_service.update_book(id, payload.into()).await?;
    Ok(Json(book.into()))
}

/// Removes a book together with its borrowing history.
///
/// # Endpoint
///
/// `DELETE /books/{id}`
pub async fn delete_book_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.book_service.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
