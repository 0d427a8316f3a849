//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Barber POS                             │
//! │                                                                         │
//! │  Handler                                                               │
//! │  Result<Json<T>, ApiError>                                             │
//! │         │                                                               │
//! │         ├── Extractor rejection (bad JSON, bad id) ───────► 400         │
//! │         ├── ValidationError / CoreError ───────────────────► 400         │
//! │         ├── DbError while writing  (ApiError::write) ──────► 400         │
//! │         └── DbError while reading  (ApiError::read) ───────► 500         │
//! │                                                                         │
//! │  Every failure is rendered as:                                         │
//! │    { "error": "<message>" }                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The underlying message is passed through to the client unchanged; the
//! front-end shows it as-is.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use barber_core::{CoreError, ValidationError};
use barber_db::DbError;

/// Error returned from every handler.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} ({status})")]
pub struct ApiError {
    /// HTTP status sent to the client
    pub status: StatusCode,

    /// Human-readable message, serialized as `error`
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 for malformed or missing input.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }

    /// Maps a storage failure that happened while reading (500).
    pub fn read(err: DbError) -> Self {
        tracing::error!(error = %err, "Database read failed");
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }

    /// Maps a storage failure that happened while writing (400).
    pub fn write(err: DbError) -> Self {
        tracing::error!(error = %err, "Database write failed");
        ApiError::new(StatusCode::BAD_REQUEST, err.to_string())
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
            CoreError::Serialization(msg) => ApiError::validation(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
