//! Database Backend Abstractions
//!
//! The executor traits the repository talks to, and the sqlx-backed
//! PostgreSQL implementation of them.

pub mod core;
pub mod postgres;

// Re-export core traits and types
pub use self::core::*;
pub use self::postgres::{PostgresBackend, PostgresPool, PostgresRow};
