use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::property::PropertyListing;
use super::Model;

/// A reserved property with the stay's dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListing {
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(flatten)]
    pub listing: PropertyListing,
}

impl ReservationListing {
    /// Nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

impl Model for ReservationListing {
    fn table_name() -> &'static str {
        "reservations"
    }
}
