//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::StoreError;
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    MethodNotAllowed,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::MethodNotAllowed => ErrorResponse::method_not_allowed(),
            AppError::Internal(detail) => {
                // Storage faults are the only unexpected failures; keep the detail out of the body.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        if err.is_expected() {
            tracing::debug!(error = %err, "Request rejected by post store");
        }
        match err {
            StoreError::NotFound { id } => {
                AppError::NotFound(format!("Post with id {} not found", id))
            }
            StoreError::Validation(msg) => AppError::BadRequest(msg),
            StoreError::Connection(msg) | StoreError::Query(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_status_codes() {
        let cases = [
            (StoreError::NotFound { id: 3 }, StatusCode::NOT_FOUND),
            (StoreError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (StoreError::Query("disk full".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (StoreError::Connection("refused".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }
}
