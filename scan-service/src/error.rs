//! Error types for scan-service

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Scan error types
#[derive(Error, Debug)]
pub enum ScanError {
    /// Request body was rejected before reaching the classifier
    #[error("Invalid request: {message}")]
    Validation { status: StatusCode, message: String },

    /// Classifier could not be reached or is still loading its model
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    /// Classifier answered with an error or an unusable prediction
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScanError::Validation { status, .. } => *status,
            ScanError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ScanError::Classifier(_) | ScanError::Config(_) | ScanError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for ScanError {
    fn from(rejection: JsonRejection) -> Self {
        ScanError::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl IntoResponse for ScanError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Scan failed ({}): {}", status, self);
        }

        (
            status,
            Json(ApiError {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
