//! API error types with IntoResponse
//!
//! Every failure collapses to one of the three plain-text literals the
//! form consumer expects. Field-level detail stays in the server logs;
//! the wire keeps the original single failure signal.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use crate::models::ValidationError;

/// Response body for a rejected submission, regardless of which field failed.
pub const INVALID_DATA: &str = "Error: Invalid data.";

/// Response body when the database cannot be reached.
pub const CONNECTION_ERROR: &str = "Error: Database connection error. Please try again later.";

/// Response body when the insert executed but did not persist the record.
pub const WRITE_FAILED: &str = "Failed to add student record.";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Database failure (503 for connection-level, 500 otherwise; logged)
    Db(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => {
                // The client only ever sees the generic literal
                tracing::debug!("submission rejected: {e}");
                (StatusCode::BAD_REQUEST, INVALID_DATA)
            }
            Self::Db(DbError::Connection(e)) => {
                // Log the driver error, never surface it
                tracing::error!("database connection error: {e}");
                (StatusCode::SERVICE_UNAVAILABLE, CONNECTION_ERROR)
            }
            Self::Db(e) => {
                tracing::warn!("student insert failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, WRITE_FAILED)
            }
        };

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Db(e)
    }
}
