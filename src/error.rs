//! Error types for the helpdesk core.
//!

use crate::database::StoreError;
use crate::state_machine::StateMachineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelpdeskError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Request {id} not found")]
    NotFound { id: i32 },
    #[error(transparent)]
    InvalidTransition(#[from] StateMachineError),
    #[error("Database error: {0}")]
    DatabaseError(#[from] StoreError),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl HelpdeskError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }

    /// Short machine-readable tag used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "validation",
            Self::NotFound { .. } => "not_found",
            Self::InvalidTransition(_) => "invalid_transition",
            Self::DatabaseError(_) => "database",
            Self::ConfigurationError(_) => "configuration",
        }
    }
}

impl From<sqlx::Error> for HelpdeskError {
    fn from(err: sqlx::Error) -> Self {
        HelpdeskError::DatabaseError(StoreError::from(err))
    }
}

impl From<config::ConfigError> for HelpdeskError {
    fn from(err: config::ConfigError) -> Self {
        HelpdeskError::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HelpdeskError>;
