//! Handlers for user management endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::user::{UserDetailResponse, UserRequest, UserSummary};
use crate::api::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists users.
///
/// # Endpoint
///
/// `GET /users?page=1&limit=10`
///
/// # Errors
///
/// Returns 400 if pagination parameters are invalid.
pub async fn list_users_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let options = params
        .validate_and_get_options()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let users = state.user_service.get_all_users(options).await?;

    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

/// Returns a user with their past and present borrowings.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Response
///
/// ```json
/// {
///   "id": 2,
///   "name": "Enes Faruk Meniz",
///   "books": {
///     "past": [{ "name": "I, Robot", "userScore": 5 }],
///     "present": [{ "name": "Brave New World" }]
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserDetailResponse>, AppError> {
    let profile = state.user_service.get_user_by_id(id).await?;
    Ok(Json(profile.into()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 if the body is invalid.
/// Returns 409 if the email is already in use.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> Result<(StatusCode, Json<UserSummary>), AppError> {
    let user = state.user_service.create_user(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Updates a user's name, and their email when one is given.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Errors
///
/// Returns 400 if the body is invalid.
/// Returns 404 if the user does not exist.
/// Returns 409 if the email belongs to another user.
pub async fn update_user_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> Result<Json<UserSummary>, AppError> {
    let user = state.user_service.update_user(id, payload.into()).await?;
    Ok(Json(user.into()))
}

/// Deletes a user together with their borrowing history.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
pub async fn delete_user_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
