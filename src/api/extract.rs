//! Custom Axum extractors.
//!
//! Each wraps the stock axum extractor so that its rejection is rendered
//! through [`AppError`] and every 400 carries the same JSON error body.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Query, Request,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and validated.
///
/// Malformed JSON, missing fields and constraint violations are all
/// rejected with `400 Bad Request` before the handler runs.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::bad_request(rejection.body_text(), json!({}))
            })?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Path parameters, e.g. a numeric `{id}`.
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                // Missing params mean a routing bug, not a bad request
                if rejection.status() == StatusCode::INTERNAL_SERVER_ERROR {
                    AppError::internal(rejection.body_text(), json!({}))
                } else {
                    AppError::bad_request(rejection.body_text(), json!({}))
                }
            })?;

        Ok(Self(value))
    }
}

/// Query string parameters.
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                AppError::bad_request(rejection.body_text(), json!({}))
            })?;

        Ok(Self(value))
    }
}
