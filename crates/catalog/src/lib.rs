//! # lightbnb-catalog: data access for the LightBnB rental catalog
//!
//! Turns property search filters into a single parameterized PostgreSQL
//! statement, and provides the user and reservation lookups around it.
//!
//! The database is reached only through the [`backends::DatabasePool`]
//! executor trait; [`repository::CatalogRepository`] holds an injected
//! handle to it.

pub mod backends;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;

// Re-export the public surface
pub use backends::{DatabasePool, DatabaseRow, DatabaseValue, MapRow};
pub use config::{ConfigError, DatabaseConfig};
pub use error::*;
pub use models::{Model, NewProperty, NewUser, Property, PropertyListing, ReservationListing, User};
pub use query::{PropertySearchCriteria, DEFAULT_LIMIT};
pub use repository::CatalogRepository;
