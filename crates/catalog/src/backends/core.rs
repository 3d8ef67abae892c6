//! Core Database Backend Traits
//!
//! The query executor seam: the repository hands a statement and its ordered
//! bind values to a `DatabasePool` and gets rows back. Rows are plain
//! column-name to `DatabaseValue` mappings; decoding into models happens in
//! the `models` module.

use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use crate::error::{ModelError, OrmResult};

/// Abstract database connection pool trait
#[async_trait]
pub trait DatabasePool: Send + Sync {
    /// Execute a statement and return affected rows count
    async fn execute(&self, sql: &str, params: &[DatabaseValue]) -> OrmResult<u64>;

    /// Execute a query and return the result rows
    async fn fetch_all(&self, sql: &str, params: &[DatabaseValue]) -> OrmResult<Vec<Box<dyn DatabaseRow>>>;

    /// Execute a query and return the first result row
    async fn fetch_optional(&self, sql: &str, params: &[DatabaseValue]) -> OrmResult<Option<Box<dyn DatabaseRow>>>;

    /// Close the pool
    async fn close(&self) -> OrmResult<()>;

    /// Get pool statistics
    fn stats(&self) -> DatabasePoolStats;

    /// Perform a health check on the pool
    async fn health_check(&self) -> OrmResult<std::time::Duration>;
}

/// Database pool statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabasePoolStats {
    pub total_connections: u32,
    pub idle_connections: u32,
    pub active_connections: u32,
}

/// Abstract database row trait
pub trait DatabaseRow: Send + Sync {
    /// Get a column value by name
    fn get_by_name(&self, name: &str) -> OrmResult<DatabaseValue>;

    /// Get column names in result order
    fn column_names(&self) -> Vec<String>;

    /// Convert row to a JSON object keyed by column name
    fn to_json(&self) -> OrmResult<JsonValue> {
        let mut map = serde_json::Map::new();
        for name in self.column_names() {
            let value = self.get_by_name(&name)?;
            map.insert(name, value.to_json());
        }
        Ok(JsonValue::Object(map))
    }
}

/// Row backed by an ordered list of columns.
///
/// Used by executors that materialize rows eagerly and by test fakes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapRow {
    columns: Vec<(String, DatabaseValue)>,
}

impl MapRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, replacing any earlier column of the same name
    pub fn with(mut self, name: &str, value: impl Into<DatabaseValue>) -> Self {
        let value = value.into();
        match self.columns.iter_mut().find(|(column, _)| column == name) {
            Some((_, existing)) => *existing = value,
            None => self.columns.push((name.to_string(), value)),
        }
        self
    }
}

impl DatabaseRow for MapRow {
    fn get_by_name(&self, name: &str) -> OrmResult<DatabaseValue> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| ModelError::Query(format!("Column '{}' not found", name)))
    }

    fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|(name, _)| name.clone()).collect()
    }
}

/// Database value enumeration for type-safe parameter binding
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseValue {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    String(String),
    Date(chrono::NaiveDate),
    DateTime(chrono::DateTime<chrono::Utc>),
}

impl DatabaseValue {
    /// Convert to JSON value
    pub fn to_json(&self) -> JsonValue {
        match self {
            DatabaseValue::Null => JsonValue::Null,
            DatabaseValue::Bool(b) => JsonValue::Bool(*b),
            DatabaseValue::Int32(i) => JsonValue::Number(serde_json::Number::from(*i)),
            DatabaseValue::Int64(i) => JsonValue::Number(serde_json::Number::from(*i)),
            DatabaseValue::Float64(f) => {
                serde_json::Number::from_f64(*f)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null)
            },
            DatabaseValue::String(s) => JsonValue::String(s.clone()),
            DatabaseValue::Date(d) => JsonValue::String(d.to_string()),
            DatabaseValue::DateTime(dt) => JsonValue::String(dt.to_rfc3339()),
        }
    }
}

impl From<bool> for DatabaseValue {
    fn from(value: bool) -> Self {
        DatabaseValue::Bool(value)
    }
}

impl From<i32> for DatabaseValue {
    fn from(value: i32) -> Self {
        DatabaseValue::Int32(value)
    }
}

impl From<i64> for DatabaseValue {
    fn from(value: i64) -> Self {
        DatabaseValue::Int64(value)
    }
}

impl From<f64> for DatabaseValue {
    fn from(value: f64) -> Self {
        DatabaseValue::Float64(value)
    }
}

impl From<String> for DatabaseValue {
    fn from(value: String) -> Self {
        DatabaseValue::String(value)
    }
}

impl From<&str> for DatabaseValue {
    fn from(value: &str) -> Self {
        DatabaseValue::String(value.to_string())
    }
}

impl From<chrono::NaiveDate> for DatabaseValue {
    fn from(value: chrono::NaiveDate) -> Self {
        DatabaseValue::Date(value)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DatabaseValue {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        DatabaseValue::DateTime(value)
    }
}

impl<T> From<Option<T>> for DatabaseValue
where
    T: Into<DatabaseValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => DatabaseValue::Null,
        }
    }
}

/// SQL dialect enumeration for generating database-specific SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlDialect {
    #[default]
    PostgreSQL,
}

impl SqlDialect {
    /// Placeholder for the bind value at zero-based `index`
    pub fn parameter_placeholder(&self, index: usize) -> String {
        match self {
            SqlDialect::PostgreSQL => format!("${}", index + 1),
        }
    }
}

/// Database backend trait that provides database-specific implementations
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    /// Create a connection pool from a database URL
    async fn create_pool(&self, database_url: &str, config: DatabasePoolConfig) -> OrmResult<Arc<dyn DatabasePool>>;

    /// Check that a database URL names a host and database this backend can reach
    fn validate_database_url(&self, url: &str) -> OrmResult<()>;
}

/// Database pool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabasePoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub idle_timeout_seconds: Option<u64>,
    pub max_lifetime_seconds: Option<u64>,
    pub test_before_acquire: bool,
}

impl Default for DatabasePoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_seconds: 30,
            idle_timeout_seconds: Some(600), // 10 minutes
            max_lifetime_seconds: Some(1800), // 30 minutes
            test_before_acquire: true,
        }
    }
}
