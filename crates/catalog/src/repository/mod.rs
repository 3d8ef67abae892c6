//! Catalog repository - the public entry points of the data-access layer
//!
//! The repository owns nothing but a shared handle to the executor. Each
//! operation assembles one statement, runs it, and decodes the rows; failures
//! from the executor are returned as they are.

use std::sync::Arc;
use std::time::Duration;

use crate::backends::{DatabaseBackend, DatabasePool, DatabasePoolStats, DatabaseValue, PostgresBackend};
use crate::config::DatabaseConfig;
use crate::error::ModelResult;
use crate::models::Model;

mod properties;
mod reservations;
mod users;

/// Repository over an injected query executor
#[derive(Clone)]
pub struct CatalogRepository {
    pool: Arc<dyn DatabasePool>,
}

impl CatalogRepository {
    pub fn new(pool: Arc<dyn DatabasePool>) -> Self {
        Self { pool }
    }

    /// Create the PostgreSQL pool described by `config` and wrap it
    pub async fn connect(config: &DatabaseConfig) -> ModelResult<Self> {
        config.validate()?;
        let pool = PostgresBackend::new()
            .create_pool(&config.database_url, config.pool.clone())
            .await?;
        Ok(Self::new(pool))
    }

    /// The underlying executor
    pub fn pool(&self) -> &Arc<dyn DatabasePool> {
        &self.pool
    }

    pub fn pool_stats(&self) -> DatabasePoolStats {
        self.pool.stats()
    }

    /// Round-trip latency of a trivial statement
    pub async fn health_check(&self) -> ModelResult<Duration> {
        self.pool.health_check().await
    }

    /// Release the pool; call once at shutdown
    pub async fn close(&self) -> ModelResult<()> {
        self.pool.close().await
    }

    async fn fetch_one_model<M: Model>(&self, sql: &str, params: &[DatabaseValue]) -> ModelResult<Option<M>> {
        tracing::debug!(table = M::table_name(), params = params.len(), sql, "fetch_optional");
        let row = self.pool.fetch_optional(sql, params).await?;
        row.map(|row| M::from_row(&*row)).transpose()
    }

    async fn fetch_models<M: Model>(&self, sql: &str, params: &[DatabaseValue]) -> ModelResult<Vec<M>> {
        tracing::debug!(table = M::table_name(), params = params.len(), sql, "fetch_all");
        let rows = self.pool.fetch_all(sql, params).await?;
        M::from_rows(&rows)
    }

    /// Run an `INSERT ... RETURNING *` and decode the inserted row
    async fn insert_returning<M: Model>(&self, sql: &str, params: &[DatabaseValue]) -> ModelResult<M> {
        self.fetch_one_model(sql, params).await?.ok_or_else(|| {
            crate::error::ModelError::Database(format!(
                "INSERT into {} returned no row",
                M::table_name()
            ))
        })
    }
}

impl std::fmt::Debug for CatalogRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogRepository")
            .field("pool", &self.pool.stats())
            .finish()
    }
}
