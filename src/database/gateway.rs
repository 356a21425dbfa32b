//! # Store Gateway
//!
//! The narrow contract the lifecycle engine and query builder depend on: execute one
//! parameterized statement, get the returned rows back.

use crate::models::Request;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use thiserror::Error;

/// A value bound to a positional `$n` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Int(i32),
    Text(String),
    TextArray(Vec<String>),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for SqlParam {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for SqlParam {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

/// SQL template plus its ordered parameter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, param: impl Into<SqlParam>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Number of the placeholder the next bound parameter will occupy
    pub fn next_placeholder(&self) -> usize {
        self.params.len() + 1
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} param(s)", self.sql, self.params.len())
    }
}

/// Any failure reported by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::new(err.to_string())
    }
}

/// Executes parameterized statements against the relational store
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Run `statement` and return every row it yields (RETURNING rows for writes)
    async fn execute(&self, statement: &Statement) -> Result<Vec<Request>, StoreError>;

    /// Cheap round trip used by the health endpoint
    async fn health_check(&self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_binding_order() {
        let statement = Statement::new("UPDATE requests SET status = $1 WHERE id = $2")
            .bind("in_progress")
            .bind(7);

        assert_eq!(
            statement.params,
            vec![SqlParam::Text("in_progress".to_string()), SqlParam::Int(7)]
        );
        assert_eq!(statement.next_placeholder(), 3);
        assert!(statement.to_string().ends_with("-- 2 param(s)"));
    }

    #[test]
    fn test_store_error_from_sqlx() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(err.message.contains("no rows returned"));
    }
}
