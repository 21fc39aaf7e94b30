//! Unified error handling for route handlers.
//!
//! Provides an `AppError` type that logs server-side failures and maps every
//! variant to the appropriate status. Route handlers return
//! `Result<T, AppError>`; form submissions build their JSON acknowledgments
//! in the handler instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use impex_core::StoreError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Record store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The filesystem is assumed reliable; an I/O or parse failure is a
        // server fault and gets logged before the opaque response goes out.
        if matches!(
            self,
            Self::Store(StoreError::Io(_) | StoreError::Serialization(_)) | Self::Template(_)
        ) {
            tracing::error!(error = %self, "Request error");
        }

        match self {
            Self::Store(StoreError::FeaturedProduct(_)) => (
                StatusCode::FORBIDDEN,
                "Cannot delete featured homepage product.",
            )
                .into_response(),
            Self::Store(_) | Self::Template(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Product not found".to_string());
        assert_eq!(err.to_string(), "not found: Product not found");

        let err = AppError::BadRequest("missing field".to_string());
        assert_eq!(err.to_string(), "bad request: missing field");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Store(StoreError::FeaturedProduct(
                "p1".to_string()
            ))),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::Store(StoreError::Io(std::io::Error::other(
                "disk on fire"
            )))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
