//! Error pages.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::{escape, layout};

/// 404 page for unmatched routes.
pub fn not_found() -> Response {
    error_page(
        StatusCode::NOT_FOUND,
        "Page not found",
        "The page you are looking for does not exist or has moved.",
    )
}

/// 400 page for requests the site cannot interpret.
pub fn bad_request(detail: &str) -> Response {
    error_page(StatusCode::BAD_REQUEST, "Bad request", detail)
}

/// 500 page. Never includes internal error details.
pub fn internal_error() -> Response {
    error_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong",
        "An unexpected error occurred. Please try again later.",
    )
}

fn error_page(status: StatusCode, title: &str, detail: &str) -> Response {
    let body = format!(
        "<section class=\"error-page\">\n\
<h1>{}</h1>\n\
<p>{}</p>\n\
<a class=\"btn btn-primary\" href=\"/\">Back to home</a>\n\
</section>",
        escape(title),
        escape(detail),
    );
    let Html(html) = layout(title, None, &[], &body);
    (status, Html(html)).into_response()
}
