//! Guest reservation history statement

use super::builder::SelectQuery;
use crate::backends::DatabaseValue;

/// Build the statement listing the properties a guest has reserved.
///
/// One row per reservation, each carrying the property's average rating over
/// all of its reviews and the reservation dates, earliest stay first.
pub fn build_guest_reservations(guest_id: i32, limit: u32) -> (String, Vec<DatabaseValue>) {
    SelectQuery::new()
        .select(&[
            "properties.*",
            "reservations.id AS reservation_id",
            "reservations.start_date",
            "reservations.end_date",
            "avg(property_reviews.rating)::float8 AS average_rating",
        ])
        .from("reservations")
        .inner_join("properties", "properties.id", "reservations.property_id")
        .left_join("property_reviews", "properties.id", "property_reviews.property_id")
        .where_eq("reservations.guest_id", guest_id)
        .group_by(&["properties.id", "reservations.id"])
        .order_by_asc("reservations.start_date")
        .limit(i64::from(limit))
        .to_sql_with_params()
}
