//! Unified error handling for the call log service
//!
//! All failures are converted to [`AppError`], which implements
//! `ResponseError` so handlers can propagate with `?` and get the
//! wire shapes the API promises.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Convenience result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Database pool error: {0}")]
    Pool(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Call record {0} not found")]
    CallNotFound(i64),

    #[error("No call records for the requested page")]
    EmptyResult,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::CallNotFound(_) => StatusCode::NOT_FOUND,
            // The reference contract reports every other failure as 500,
            // including missing parameters and empty report pages.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database_error",
            AppError::Pool(_) => "pool_error",
            AppError::MissingParameter(_) => "missing_parameter",
            AppError::ConstraintViolation(_) => "constraint_violation",
            AppError::CallNotFound(_) => "call_not_found",
            AppError::EmptyResult => "no_records",
            AppError::Config(_) => "config_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            // Exact body shape consumers of the update/delete endpoints rely on.
            AppError::CallNotFound(_) => HttpResponse::build(status).json(json!({
                "error": "Call not found",
            })),
            _ => HttpResponse::build(status).json(json!({
                "success": false,
                "error": self.error_code(),
                "message": self.to_string(),
            })),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
