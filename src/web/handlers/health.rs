//! # Health Check Handler
//!
//! Liveness plus store connectivity for load balancers and monitoring.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::web::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub database: String,
    pub timestamp: String,
}

/// Health check endpoint: GET /health
///
/// Returns 200 when the store answers a trivial query, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    debug!("Performing health check");

    let (status_code, status, database) = match state.requests.health_check().await {
        Ok(()) => (StatusCode::OK, "healthy", "connected".to_string()),
        Err(err) => {
            error!(error = %err, "Health check failed: store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "unhealthy",
                format!("error: {err}"),
            )
        }
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            environment: state.environment.to_string(),
            database,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}
