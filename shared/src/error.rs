//! Error types for the persistence API
//!
//! The wire format follows the upstream API: authorization failures
//! answer `{"message":"Unauthorized"}`, everything else `{"error": ...}`.

use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Server-side error with a fixed HTTP status mapping
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// No or invalid session (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Missing or malformed request data (400)
    #[error("{0}")]
    Validation(String),

    /// Resource absent or ownership mismatch (404)
    #[error("{0}")]
    NotFound(String),

    /// Unexpected server failure (500)
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if let Self::Internal(msg) = &self {
            tracing::error!(message = %msg, "Internal error");
        }

        let status = self.http_status();
        let body = match &self {
            Self::Unauthorized => json!({ "message": "Unauthorized" }),
            Self::Validation(msg) | Self::NotFound(msg) | Self::Internal(msg) => {
                json!({ "error": msg })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;
