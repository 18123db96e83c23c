use axum::http::header::InvalidHeaderValue;
use axum::response::{IntoResponse, Response};

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] by rendering the matching HTML error page.
/// Internal details are logged, never shown to the visitor.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be interpreted.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A response header (e.g. `Set-Cookie`) could not be built.
    #[error("Invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Rejected malformed request");
                views::errors::bad_request(msg)
            }
            AppError::Header(err) => {
                tracing::error!(error = %err, "Failed to build response header");
                views::errors::internal_error()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                views::errors::internal_error()
            }
        }
    }
}
