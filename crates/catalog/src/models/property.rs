use serde::{Deserialize, Serialize};

use super::Model;

/// A rental property as stored; `cost_per_night` is in cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i64,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

impl Model for Property {
    fn table_name() -> &'static str {
        "properties"
    }
}

/// A property annotated with the mean rating of its reviews.
///
/// `average_rating` is `None` until the property has at least one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

impl Model for PropertyListing {
    fn table_name() -> &'static str {
        "properties"
    }
}

/// Attributes for a new property.
///
/// `cost_per_night` is in major currency units and is stored in cents.
/// New properties are always created active.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}
