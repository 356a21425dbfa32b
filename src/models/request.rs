//! # Request Model
//!
//! The single tracked entity: a ticket submitted by a client and moved through the
//! lifecycle by an operator.
//!
//! ## Database Schema
//!
//! Maps to the `requests` table:
//! - `id`: Primary key (SERIAL)
//! - `text` / `topic`: Immutable content supplied at creation
//! - `status`: TEXT, one of `new`, `in_progress`, `completed`, `canceled`
//! - `resolution`: Set only while `status = 'completed'`
//! - `cancel_reason`: Set only while `status = 'canceled'`
//! - `created_at`: TIMESTAMP, `DEFAULT now()`
//!
//! Rows are only ever written through [`crate::services::RequestService`]; the model
//! itself is plain data.

use crate::state_machine::RequestState;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Column list shared by every statement that returns full request rows
pub const REQUEST_COLUMNS: &str = "id, text, topic, status, resolution, cancel_reason, created_at";

/// A tracked request as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Request {
    pub id: i32,
    pub text: String,
    pub topic: String,
    #[sqlx(try_from = "String")]
    pub status: RequestState,
    pub resolution: Option<String>,
    pub cancel_reason: Option<String>,
    pub created_at: NaiveDateTime,
}

/// New Request for creation (without store-assigned fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRequest {
    pub text: String,
    pub topic: String,
}

impl Request {
    /// Check that the side fields agree with the status
    ///
    /// `resolution` is present exactly when completed, `cancel_reason` exactly when canceled.
    pub fn side_fields_consistent(&self) -> bool {
        let resolved = self.status == RequestState::Completed;
        let canceled = self.status == RequestState::Canceled;
        resolved == self.resolution.is_some() && canceled == self.cancel_reason.is_some()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
