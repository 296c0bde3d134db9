//! HTTP error responses.
//!
//! Validation failures become a 400 carrying the specific message.  Bridge
//! failures are logged and become a 500 whose `error` is a fixed,
//! operation-specific message and whose `detail` carries the raw error text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::application::ServiceError;
use crate::domain::messages::ErrorResponse;

/// An error response: status code plus JSON body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                error: message.into(),
                detail: None,
            },
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorResponse {
                error: "Not found".to_string(),
                detail: None,
            },
        }
    }

    pub fn internal(message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse {
                error: message.into(),
                detail,
            },
        }
    }

    /// Maps a service error, logging server-side failures with `fallback`.
    pub fn from_service(err: ServiceError, fallback: &'static str) -> Self {
        match err {
            ServiceError::Validation(message) => Self::bad_request(message),
            ServiceError::Bridge(e) => {
                error!(error = %e, "{fallback}");
                Self::internal(fallback, Some(e.to_string()))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
