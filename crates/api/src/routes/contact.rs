//! Route definitions for the contact form.

use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact routes.
///
/// ```text
/// GET    /contact       -> show_contact_form
/// POST   /contact       -> submit_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/contact",
        get(contact::show_contact_form).post(contact::submit_contact),
    )
}
