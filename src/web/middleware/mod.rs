//! # Web API Middleware
//!
//! Request id tagging plus the tower-http layers shared by every route.

pub mod request_id;

use axum::extract::Request;
use axum::middleware;
use axum::Router;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

/// Apply the middleware stack
///
/// Order, outermost last:
/// 1. Request ID generation
/// 2. Request timeout
/// 3. CORS handling
/// 4. Tracing and logging
pub fn apply_middleware_stack(router: Router, request_timeout: Duration) -> Router {
    router
        .layer(middleware::from_fn(request_id::add_request_id))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
}

/// Span for one HTTP exchange; `request_id` is filled in by [`request_id::add_request_id`]
fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
