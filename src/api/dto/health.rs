//! DTOs for `GET /health`.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Outcome of a single component check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

/// Result of querying the catalogue.
///
/// `books` is the catalogue size when the query succeeded, `message` the
/// failure reason otherwise.
#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: CheckState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DatabaseCheck {
    pub fn ok(books: i64) -> Self {
        Self {
            status: CheckState::Ok,
            books: Some(books),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: CheckState::Error,
            books: None,
            message: Some(message.into()),
        }
    }
}

impl HealthResponse {
    /// Builds the response, degrading the service status when any check failed.
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = if checks.database.status == CheckState::Ok {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }
}
