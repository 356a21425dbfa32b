//! Shared test infrastructure
//!
//! [`ScriptedGateway`] stands in for PostgreSQL: it records every statement it is asked to
//! run and answers with queued row sets (or errors) in order. An exhausted queue answers
//! with no rows.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, StatusCode};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use helpdesk_core::config::HelpdeskConfig;
use helpdesk_core::database::{Statement, StoreError, StoreGateway};
use helpdesk_core::web::{create_app, AppState};
use helpdesk_core::{Request, RequestState};

pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<Vec<Request>, StoreError>>>,
    executed: Mutex<Vec<Statement>>,
    healthy: AtomicBool,
}

impl ScriptedGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            executed: Mutex::new(Vec::new()),
            healthy: AtomicBool::new(true),
        })
    }

    /// Queue the rows returned by the next unanswered statement
    pub fn push_rows(&self, rows: Vec<Request>) {
        self.responses.lock().unwrap().push_back(Ok(rows));
    }

    pub fn push_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(StoreError::new(message)));
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    pub fn executed(&self) -> Vec<Statement> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreGateway for ScriptedGateway {
    async fn execute(&self, statement: &Statement) -> Result<Vec<Request>, StoreError> {
        self.executed.lock().unwrap().push(statement.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        if self.healthy.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::new("connection refused"))
        }
    }
}

pub fn created_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

/// A row in `status` with side fields consistent with it
pub fn request_row(id: i32, status: RequestState) -> Request {
    Request {
        id,
        text: "printer on fire".to_string(),
        topic: "hardware".to_string(),
        status,
        resolution: (status == RequestState::Completed).then(|| "replaced toner".to_string()),
        cancel_reason: (status == RequestState::Canceled).then(|| "duplicate".to_string()),
        created_at: created_at(),
    }
}

pub fn app_with_config(gateway: Arc<ScriptedGateway>, config: &HelpdeskConfig) -> Router {
    create_app(AppState::from_config(config, gateway))
}

/// App over `gateway` with default configuration and the given lifecycle strictness
pub fn app(gateway: Arc<ScriptedGateway>, strict_transitions: bool) -> Router {
    let mut config = HelpdeskConfig::default();
    config.lifecycle.strict_transitions = strict_transitions;
    app_with_config(gateway, &config)
}

/// Send one request through the router and decode the JSON response body
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Send a raw body with a JSON content type
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
