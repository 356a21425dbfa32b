//! # Request Handlers
//!
//! HTTP endpoints for creating, listing and transitioning requests.
//!
//! Bodies are taken as raw JSON and checked by [`crate::validation`] so that missing
//! fields, wrong types and empty strings all surface as the same 400 response.
//! Completion and cancellation check their body before the path id.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::models::Request;
use crate::query_builder::RequestFilter;
use crate::validation::{
    parse_request_id, validate_cancel_reason, validate_new_request, validate_resolution,
    ListParams,
};
use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

/// Body of the bulk cancel response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCancelResponse {
    pub message: String,
}

fn json_body(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    payload.map(|Json(body)| body).map_err(ApiError::from)
}

/// Create a request: POST /requests
pub async fn create_request(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Request>)> {
    let new_request = validate_new_request(&json_body(payload)?)?;
    let request = state.requests.create(new_request).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Move a request into progress: PATCH /requests/:id/start
pub async fn start_request(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Request>> {
    let Path(id) = path?;
    let id = parse_request_id(&id)?;
    Ok(Json(state.requests.start(id).await?))
}

/// Complete a request: PATCH /requests/:id/complete
pub async fn complete_request(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Request>> {
    let resolution = validate_resolution(&json_body(payload)?)?;
    let Path(id) = path?;
    let id = parse_request_id(&id)?;
    Ok(Json(state.requests.complete(id, resolution).await?))
}

/// Cancel a request: PATCH /requests/:id/cancel
pub async fn cancel_request(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Request>> {
    let reason = validate_cancel_reason(&json_body(payload)?)?;
    let Path(id) = path?;
    let id = parse_request_id(&id)?;
    Ok(Json(state.requests.cancel(id, reason).await?))
}

/// Cancel every in-progress request: PATCH /requests/cancel-all-in-progress
pub async fn cancel_all_in_progress(
    State(state): State<AppState>,
) -> ApiResult<Json<BulkCancelResponse>> {
    let outcome = state.requests.cancel_all_in_progress().await?;
    Ok(Json(BulkCancelResponse {
        message: outcome.message(),
    }))
}

/// List requests, optionally filtered by creation date: GET /requests
///
/// Accepts `date=YYYY-MM-DD` or the inclusive pair `start_date`/`end_date`.
pub async fn list_requests(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<Request>>> {
    let Query(pairs) = query?;
    let params = ListParams::from_query_pairs(&pairs);
    let filter = RequestFilter::from_params(&params)?;
    debug!(filter = ?filter, "Listing requests");
    Ok(Json(state.requests.list(&filter).await?))
}
