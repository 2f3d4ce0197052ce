//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{DatabaseCheck, HealthChecks, HealthResponse, ServiceStatus};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database query failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "books": 42 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let response = HealthResponse::from_checks(HealthChecks { database });

    match response.status {
        ServiceStatus::Healthy => Ok(Json(response)),
        ServiceStatus::Degraded => Err((StatusCode::SERVICE_UNAVAILABLE, Json(response))),
    }
}

/// Checks database connectivity by counting the catalogue.
async fn check_database(state: &AppState) -> DatabaseCheck {
    match state.book_service.count_books().await {
        Ok(count) => DatabaseCheck::ok(count),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not count books");
            DatabaseCheck::failed(format!("Catalogue query failed: {}", e))
        }
    }
}
