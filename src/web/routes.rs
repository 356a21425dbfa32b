//! # Web API Route Definitions

use crate::web::handlers;
use crate::web::state::AppState;
use axum::routing::{get, patch, post};
use axum::Router;

/// Request lifecycle routes, nested under the configured base path
pub fn request_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/requests",
            post(handlers::requests::create_request).get(handlers::requests::list_requests),
        )
        .route(
            "/requests/cancel-all-in-progress",
            patch(handlers::requests::cancel_all_in_progress),
        )
        .route("/requests/:id/start", patch(handlers::requests::start_request))
        .route(
            "/requests/:id/complete",
            patch(handlers::requests::complete_request),
        )
        .route(
            "/requests/:id/cancel",
            patch(handlers::requests::cancel_request),
        )
}

/// Health routes, always served at the root
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
