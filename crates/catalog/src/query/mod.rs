//! Query Builder Module - parameterized statements for the catalog

pub mod binder;
pub mod builder;
pub mod property_search;
pub mod reservations;
pub mod sql_generation;
pub mod types;

pub use binder::ParameterBinder;
pub use builder::{InsertQuery, SelectQuery};
pub use property_search::{build_property_search, to_cents, PredicateClauseSet, PropertySearchCriteria, DEFAULT_LIMIT};
pub use reservations::build_guest_reservations;
pub use types::{Predicate, QueryOperator};
