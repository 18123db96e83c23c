//! Route definitions for the informational pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Static page routes.
///
/// ```text
/// GET    /              -> index
/// GET    /about         -> about
/// GET    /services      -> services
/// GET    /testimonials  -> testimonials
/// GET    /faqs          -> faqs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/services", get(pages::services))
        .route("/testimonials", get(pages::testimonials))
        .route("/faqs", get(pages::faqs))
}
