//! Catalog models and row decoding
//!
//! Rows arrive from the executor as column-name to value maps; models are
//! decoded from them through serde, so a column rename only touches the
//! struct definition.

use std::fmt::Debug;
use serde::de::DeserializeOwned;

use crate::backends::DatabaseRow;
use crate::error::{ModelError, ModelResult};

pub mod property;
pub mod reservation;
pub mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::ReservationListing;
pub use user::{NewUser, User};

/// A record decoded from one result row
pub trait Model: Sized + Debug + DeserializeOwned {
    /// Table the record is read from
    fn table_name() -> &'static str;

    /// Decode a row into this model
    fn from_row(row: &dyn DatabaseRow) -> ModelResult<Self> {
        let json = row.to_json()?;
        serde_json::from_value(json).map_err(|e| {
            ModelError::Serialization(format!(
                "Failed to decode {} row: {}",
                Self::table_name(),
                e
            ))
        })
    }

    /// Decode every row, failing on the first bad one
    fn from_rows(rows: &[Box<dyn DatabaseRow>]) -> ModelResult<Vec<Self>> {
        rows.iter().map(|row| Self::from_row(&**row)).collect()
    }
}
