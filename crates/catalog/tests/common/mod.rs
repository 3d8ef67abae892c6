//! Shared fixtures for repository tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use lightbnb_catalog::backends::DatabasePoolStats;
use lightbnb_catalog::{DatabasePool, DatabaseRow, DatabaseValue, MapRow, ModelError, OrmResult};

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Statement as the executor received it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedStatement {
    pub sql: String,
    pub params: Vec<DatabaseValue>,
}

/// Executor fake: replays queued responses and records every statement
#[derive(Default)]
pub struct RecordingPool {
    responses: Mutex<VecDeque<OrmResult<Vec<MapRow>>>>,
    statements: Mutex<Vec<RecordedStatement>>,
    closed: Mutex<bool>,
}

impl RecordingPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(self, rows: Vec<MapRow>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(rows));
        self
    }

    pub fn fail_with(self, error: ModelError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn statements(&self) -> Vec<RecordedStatement> {
        self.statements.lock().unwrap().clone()
    }

    pub fn last_statement(&self) -> RecordedStatement {
        self.statements().pop().expect("no statement executed")
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.lock().unwrap()
    }

    fn next_response(&self, sql: &str, params: &[DatabaseValue]) -> OrmResult<Vec<MapRow>> {
        self.statements.lock().unwrap().push(RecordedStatement {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[async_trait]
impl DatabasePool for RecordingPool {
    async fn execute(&self, sql: &str, params: &[DatabaseValue]) -> OrmResult<u64> {
        self.next_response(sql, params).map(|rows| rows.len() as u64)
    }

    async fn fetch_all(&self, sql: &str, params: &[DatabaseValue]) -> OrmResult<Vec<Box<dyn DatabaseRow>>> {
        let rows = self.next_response(sql, params)?;
        Ok(rows.into_iter().map(|row| Box::new(row) as Box<dyn DatabaseRow>).collect())
    }

    async fn fetch_optional(&self, sql: &str, params: &[DatabaseValue]) -> OrmResult<Option<Box<dyn DatabaseRow>>> {
        let rows = self.next_response(sql, params)?;
        Ok(rows.into_iter().next().map(|row| Box::new(row) as Box<dyn DatabaseRow>))
    }

    async fn close(&self) -> OrmResult<()> {
        *self.closed.lock().unwrap() = true;
        Ok(())
    }

    fn stats(&self) -> DatabasePoolStats {
        DatabasePoolStats::default()
    }

    async fn health_check(&self) -> OrmResult<Duration> {
        Ok(Duration::from_millis(1))
    }
}

pub fn user_row(id: i32, email: &str) -> MapRow {
    MapRow::new()
        .with("id", id)
        .with("name", "Kian Dixon")
        .with("email", email)
        .with("password", "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.")
}

pub fn property_row(id: i32, cost_per_night_cents: i32) -> MapRow {
    MapRow::new()
        .with("id", id)
        .with("owner_id", 850)
        .with("title", "Habit mix")
        .with("description", "description")
        .with("thumbnail_photo_url", "https://images.example.com/thumb.jpg")
        .with("cover_photo_url", "https://images.example.com/cover.jpg")
        .with("cost_per_night", cost_per_night_cents)
        .with("parking_spaces", 2)
        .with("number_of_bathrooms", 1)
        .with("number_of_bedrooms", 3)
        .with("country", "Canada")
        .with("street", "1650 Hejto Center")
        .with("city", "Genwezuj")
        .with("province", "Newfoundland And Labrador")
        .with("post_code", "44583")
        .with("active", true)
}
