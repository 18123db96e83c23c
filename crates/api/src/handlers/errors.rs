//! Fallback and panic responses.

use std::any::Any;

use axum::http::Uri;
use axum::response::Response;

use crate::views;

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    views::errors::not_found()
}

/// Turn a caught handler panic into the 500 page.
///
/// Any transaction the panicking handler held is rolled back when its
/// future is dropped.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");
    views::errors::internal_error()
}
