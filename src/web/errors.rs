//! # Web API Error Types
//!
//! Maps domain errors onto HTTP status codes. Every error body has the shape
//! `{"error": "<message>"}`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::HelpdeskError;
use crate::logging::log_error;

/// Web API errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    DatabaseError { message: String },

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::DatabaseError { .. } | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<HelpdeskError> for ApiError {
    fn from(err: HelpdeskError) -> Self {
        match err {
            HelpdeskError::ValidationError(message) => Self::BadRequest { message },
            HelpdeskError::NotFound { .. } => Self::NotFound {
                message: err.to_string(),
            },
            HelpdeskError::InvalidTransition(ref inner) => Self::Conflict {
                message: inner.to_string(),
            },
            HelpdeskError::DatabaseError(_) => Self::DatabaseError {
                message: err.to_string(),
            },
            HelpdeskError::ConfigurationError(_) => {
                log_error("web", "configuration", &err.to_string(), None);
                Self::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            log_error("web", "handle_request", &message, None);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type for web handlers
pub type ApiResult<T> = Result<T, ApiError>;
