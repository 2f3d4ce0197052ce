//! Handlers for lending books out and taking them back.

use axum::{extract::State, http::StatusCode};

use crate::api::dto::borrowing::ReturnBookRequest;
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::domain::entities::Score;
use crate::error::AppError;
use crate::state::AppState;

/// Lends a book to a user.
///
/// # Endpoint
///
/// `POST /users/{userId}/borrow/{bookId}`
///
/// # Errors
///
/// Returns 404 if the user or book does not exist.
/// Returns 409 if the book is currently borrowed by anyone.
pub async fn borrow_book_handler(
    ApiPath((user_id, book_id)): ApiPath<(i64, i64)>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .borrowing_service
        .borrow_book(user_id, book_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Takes a book back from a user and records their score.
///
/// # Endpoint
///
/// `POST /users/{userId}/return/{bookId}` with body `{"score": 8}`
///
/// # Errors
///
/// Returns 400 if the score is missing or outside 1..=10.
/// Returns 404 if the user or book does not exist, or if this user does
/// not currently hold this book.
pub async fn return_book_handler(
    ApiPath((user_id, book_id)): ApiPath<(i64, i64)>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ReturnBookRequest>,
) -> Result<StatusCode, AppError> {
    let score = Score::new(payload.score)?;

    state
        .borrowing_service
        .return_book(user_id, book_id, score)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
