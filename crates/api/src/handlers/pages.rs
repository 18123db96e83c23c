//! Handlers for the static informational pages.

use axum::response::Html;

use crate::views;

/// GET /
pub async fn index() -> Html<String> {
    views::pages::home()
}

/// GET /about
pub async fn about() -> Html<String> {
    views::pages::about()
}

/// GET /services
pub async fn services() -> Html<String> {
    views::pages::services()
}

/// GET /testimonials
pub async fn testimonials() -> Html<String> {
    views::pages::testimonials()
}

/// GET /faqs
pub async fn faqs() -> Html<String> {
    views::pages::faqs()
}
