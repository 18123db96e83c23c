//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same middleware
//! stack.

use std::time::Duration;

use axum::http::{HeaderName, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`]: site routes, static files, the
/// 404 fallback, and the middleware from [`apply_middleware`].
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let site = Router::new()
        .merge(routes::site_routes())
        // Stylesheets, scripts and images.
        .nest_service("/static", ServeDir::new(&config.static_dir))
        // Unmatched routes render the 404 page.
        .fallback(handlers::errors::not_found)
        .with_state(state);

    apply_middleware(site, config)
}

/// Wrap `router` in the shared middleware stack.
///
/// The stack is applied bottom-up:
///
/// 1. Set request ID on incoming requests
/// 2. Structured request/response tracing
/// 3. Propagate request ID to response
/// 4. Request timeout
/// 5. Panic recovery (catch panics, render the 500 page)
pub fn apply_middleware(router: Router, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    router
        .layer(CatchPanicLayer::custom(handlers::errors::handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(
            request_id_header,
            MakeRequestUuid,
        ))
}
