//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::constants::GENERIC_FAILURE_MESSAGE;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // Validation errors
    #[error("{0}")]
    Validation(String),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Backend errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("{0}")]
    Backend(String),

    /// A dependent insert failed after the parent problem row was written.
    #[error("Failed to insert into {table}: {message}")]
    PartialSubmission {
        problem_id: Uuid,
        table: &'static str,
        message: String,
        /// Whether the parent problem row was removed again
        compensated: bool,
    },

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Backend(_) => "BACKEND_ERROR",
            Self::PartialSubmission { .. } => "PARTIAL_SUBMISSION",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) | Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Backend(_) => StatusCode::BAD_GATEWAY,
            Self::Database(_)
            | Self::PartialSubmission { .. }
            | Self::Internal(_)
            | Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error was raised before any backend call was made
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Text of the single user-visible failure notification.
    ///
    /// Carries the underlying message when one is available and falls back
    /// to a generic message otherwise. Database and internal details are
    /// never shown.
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::Internal(_) | Self::Database(_) => String::new(),
            Self::Backend(msg) => msg.clone(),
            Self::PartialSubmission { message, .. } => message.clone(),
            other => other.to_string(),
        };

        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            AppError::PartialSubmission {
                problem_id,
                table,
                compensated,
                ..
            } => {
                tracing::error!(
                    problem_id = %problem_id,
                    table = %table,
                    compensated = %compensated,
                    "Problem submission left incomplete"
                );
                self.user_message()
            }
            _ => self.user_message(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

// Implement From for common error types
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                // Check for unique constraint violations
                if db_err.is_unique_violation() {
                    AppError::AlreadyExists("Resource already exists".to_string())
                } else {
                    AppError::Database(db_err.to_string())
                }
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        }
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_underlying_message() {
        let err = AppError::Backend("duplicate key value violates unique constraint".to_string());
        assert_eq!(
            err.user_message(),
            "duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        assert_eq!(
            AppError::Backend("  ".to_string()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn test_partial_submission_is_server_error() {
        let err = AppError::PartialSubmission {
            problem_id: Uuid::new_v4(),
            table: "problem_hints",
            message: "connection reset".to_string(),
            compensated: true,
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "PARTIAL_SUBMISSION");
        assert_eq!(err.user_message(), "connection reset");
    }

    #[test]
    fn test_database_text_stays_out_of_user_message() {
        let err = AppError::Database("relation \"problem_hints\" does not exist".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = AppError::Validation("Title and Problem Statement are required".to_string());
        assert!(err.is_validation());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_config_error_conversion() {
        let err = AppError::from(crate::config::ConfigError::Missing("JWT_SECRET".to_string()));
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("JWT_SECRET"));
    }
}
