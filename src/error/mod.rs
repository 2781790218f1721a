//! Centralized API error handling for LendVault
//!
//! Every failure the service can raise maps to exactly one `ApiError`
//! variant with a fixed HTTP status and a JSON error envelope. Client
//! errors carry their message through verbatim; server errors are logged
//! with full detail and surface only a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::loan::validation::ValidationFailure;
use crate::store::StoreError;

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in the response
#[derive(Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// Classification code exposed in the response body.
    ///
    /// Both server-side variants collapse to `INTERNAL_ERROR`; the caller
    /// never learns which internal layer failed.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::Database(_) | ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Database(_) | ApiError::Internal(_))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Server errors: log the real failure, answer with a generic
        // message. Client errors pass their message through.
        let message = if self.is_server_error() {
            tracing::error!(error = %self, code = %code, "server error");
            "unable to complete request".to_string()
        } else {
            tracing::debug!(error = %self, code = %code, "client error");
            self.to_string()
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl From<ValidationFailure> for ApiError {
    fn from(err: ValidationFailure) -> Self {
        ApiError::BadRequest(err.combined_message())
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApiError::BadRequest("test".to_string()).error_code(),
            "BAD_REQUEST"
        );
        assert_eq!(
            ApiError::NotFound("test".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            ApiError::Unauthorized("test".to_string()).error_code(),
            "UNAUTHORIZED"
        );
        assert_eq!(
            ApiError::Forbidden("test".to_string()).error_code(),
            "FORBIDDEN"
        );
    }

    #[test]
    fn test_server_errors_share_public_code() {
        assert_eq!(
            ApiError::Database("connection refused".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
        assert_eq!(
            ApiError::Internal("oops".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("test".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Unauthorized("test".to_string()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("test".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Database("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_messages_pass_through_verbatim() {
        assert_eq!(
            ApiError::NotFound("Customer not found".to_string()).to_string(),
            "Customer not found"
        );
        assert_eq!(
            ApiError::BadRequest("amount is required".to_string()).to_string(),
            "amount is required"
        );
    }
}
