//! # REST API Errors
//!
//! Error types for the student endpoints and their HTTP mapping.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body or query string does not fit the expected shape
    #[error("Validation error: {0}")]
    Validation(String),

    /// Identifier is not a 24-character hex ObjectId
    #[error("Invalid student id: {0}")]
    InvalidId(String),

    /// No record matches the identifier
    #[error("Student not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure, passed through untouched
    #[error(transparent)]
    Store(StoreError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 422 Unprocessable Entity
            RestError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::InvalidId(_) => StatusCode::UNPROCESSABLE_ENTITY,

            // 404 Not Found
            RestError::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RestError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(raw) => RestError::InvalidId(raw),
            other => RestError::Store(other),
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for RestError {
    fn from(rejection: QueryRejection) -> Self {
        RestError::Validation(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Store operation failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
