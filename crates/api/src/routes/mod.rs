pub mod contact;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the site route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                  home page
/// /about             about page
/// /services          services page
/// /testimonials      testimonials page
/// /faqs              FAQ page
/// /contact           contact form (GET), submission (POST)
/// /health            service health (JSON)
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(contact::router())
        .merge(health::router())
}
