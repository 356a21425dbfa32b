//! PostgreSQL implementation of [`StoreGateway`] on top of a shared `sqlx` pool.

use super::gateway::{SqlParam, Statement, StoreError, StoreGateway};
use crate::models::Request;
use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Instant;
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub struct PgStoreGateway {
    pool: PgPool,
}

impl PgStoreGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StoreGateway for PgStoreGateway {
    async fn execute(&self, statement: &Statement) -> Result<Vec<Request>, StoreError> {
        let mut query = sqlx::query_as::<_, Request>(statement.sql.as_str());
        for param in &statement.params {
            query = match param {
                SqlParam::Int(value) => query.bind(*value),
                SqlParam::Text(value) => query.bind(value.as_str()),
                SqlParam::TextArray(values) => query.bind(values.clone()),
                SqlParam::Date(value) => query.bind(*value),
                SqlParam::Timestamp(value) => query.bind(*value),
            };
        }

        let started = Instant::now();
        match query.fetch_all(&self.pool).await {
            Ok(rows) => {
                debug!(
                    sql = %statement.sql,
                    rows = rows.len(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    "Statement executed"
                );
                Ok(rows)
            }
            Err(err) => {
                error!(sql = %statement.sql, error = %err, "Statement failed");
                Err(err.into())
            }
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
