//! HTTP layer: route handlers, DTOs, OpenAPI document and router
//! composition.
//!
//! The webhook endpoints keep the paths GitHub is configured with
//! (`/webhook/receiver`, `/webhook/`), so nothing is versioned under a
//! prefix.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the router with every endpoint, still awaiting its state.
pub fn build_router() -> Router<AppState> {
    let router = handlers::routes();

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(openapi::swagger_ui());

    router
}

/// Builds the complete application: routes, HTTP layers and state.
///
/// `max_body_bytes` bounds JSON webhook bodies; deliveries with any other
/// content type are acknowledged without being buffered.
pub fn build_app(state: AppState, request_timeout: Duration, max_body_bytes: usize) -> Router {
    build_router()
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
