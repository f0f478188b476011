//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps routing domain errors to HTTP status codes and returns JSON
//! error bodies with a machine-readable code and a message. Internal
//! error details are never exposed to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use courier_core::RoutingError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "NO_PATH").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No path connects the requested hubs (422).
    #[error("no path: {0}")]
    NoPath(String),

    /// An external routing dependency failed (502).
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// Internal server error (500). Message is logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::NoPath(_) => (StatusCode::UNPROCESSABLE_ENTITY, "NO_PATH"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_FAILURE"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RoutingError> for AppError {
    fn from(err: RoutingError) -> Self {
        match err {
            RoutingError::HubNotFound { .. } | RoutingError::RouteNotFound { .. } => {
                Self::NotFound(err.to_string())
            }
            RoutingError::NoPathFound { .. } => Self::NoPath(err.to_string()),
            RoutingError::Upstream { .. } => Self::Upstream(err.to_string()),
            // Stored-data geometry faults and storage failures are ours,
            // not the client's.
            RoutingError::Geometry(_) | RoutingError::Storage { .. } => {
                Self::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::{HubId, RouteId};

    #[test]
    fn routing_errors_map_to_expected_statuses() {
        let cases: Vec<(RoutingError, StatusCode)> = vec![
            (
                RoutingError::HubNotFound { id: HubId::new() },
                StatusCode::NOT_FOUND,
            ),
            (
                RoutingError::RouteNotFound { id: RouteId::new() },
                StatusCode::NOT_FOUND,
            ),
            (
                RoutingError::NoPathFound {
                    start: HubId::new(),
                    end: HubId::new(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                RoutingError::Upstream {
                    reason: "router down".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                RoutingError::Storage {
                    reason: "pool exhausted".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            let app_err = AppError::from(err);
            assert_eq!(app_err.status_and_code().0, expected);
        }
    }

    #[test]
    fn internal_errors_hide_their_message() {
        let response = AppError::Internal("connection string leaked".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
