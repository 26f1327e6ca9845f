//! Unified Error Handling
//!
//! Provides application-wide error types and response structures

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use label_printer::PrintError;
use serde::Serialize;
use tracing::error;

/// JSON error body returned to clients
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client Errors ==========
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid printer address: {0}")]
    InvalidAddress(String),

    // ========== Downstream Errors ==========
    #[error("Printer unavailable: {0}")]
    PrinterUnavailable(String),

    // ========== System Errors ==========
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InvalidAddress(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::PrinterUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Internal(msg) => {
                // Never leak internals to the client
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<PrintError> for AppError {
    fn from(err: PrintError) -> Self {
        match err {
            PrintError::Connection(_) | PrintError::Timeout(_) => {
                AppError::PrinterUnavailable(err.to_string())
            }
            PrintError::InvalidConfig(msg) => AppError::InvalidAddress(msg),
            PrintError::Io(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Application-level Result type
///
/// Used in HTTP handlers and application logic
pub type AppResult<T> = Result<T, AppError>;
