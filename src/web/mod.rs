//! # Web API Module
//!
//! Axum-based REST surface over the request lifecycle service.
//!
//! ## Core Components
//!
//! - [`routes`] - HTTP route definitions
//! - [`handlers`] - Request handlers for each endpoint group
//! - [`middleware`] - Request id, timeout, CORS and tracing layers
//! - [`state`] - Shared application state
//! - [`errors`] - Domain error to HTTP response mapping

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;

pub use errors::{ApiError, ApiResult};
pub use state::AppState;

/// Create the Axum application with all routes and middleware
///
/// Request routes are nested under `web.base_path` when it is set (for example `/api`);
/// `/health` always stays at the root.
pub fn create_app(app_state: AppState) -> Router {
    let request_timeout = app_state.config.request_timeout();
    let base_path = app_state.config.base_path.clone();

    let api_routes = if base_path.is_empty() {
        routes::request_routes()
    } else {
        Router::new().nest(&base_path, routes::request_routes())
    };

    let router = Router::new()
        .merge(routes::health_routes())
        .merge(api_routes)
        .with_state(app_state);

    middleware::apply_middleware_stack(router, request_timeout)
}
