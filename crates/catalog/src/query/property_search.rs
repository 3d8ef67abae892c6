//! Property search - filter criteria to a single parameterized statement
//!
//! Every filter is an explicit `Option`. `Some(0)` is a real filter and
//! `None` is "not supplied"; nothing is inferred from zero or empty values.

use serde::{Deserialize, Serialize};

use super::builder::SelectQuery;
use super::types::{Predicate, QueryOperator};
use crate::backends::DatabaseValue;

/// Page size used when a caller does not ask for one
pub const DEFAULT_LIMIT: u32 = 10;

/// Aggregate the search filters on with HAVING
pub const AVERAGE_RATING_EXPR: &str = "avg(property_reviews.rating)";

/// Convert a price in major currency units to stored cents
pub fn to_cents(major_units: i32) -> i64 {
    i64::from(major_units) * 100
}

/// Filters for a property search; every field is independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySearchCriteria {
    pub owner_id: Option<i32>,
    /// Case-sensitive substring of the city name
    pub city: Option<String>,
    /// Major currency units, inclusive
    pub minimum_price_per_night: Option<i32>,
    /// Major currency units, inclusive
    pub maximum_price_per_night: Option<i32>,
    pub minimum_rating: Option<f64>,
}

impl PropertySearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owned_by(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn min_price(mut self, major_units: i32) -> Self {
        self.minimum_price_per_night = Some(major_units);
        self
    }

    pub fn max_price(mut self, major_units: i32) -> Self {
        self.maximum_price_per_night = Some(major_units);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// Translate the present filters into WHERE and HAVING predicates
    pub fn predicate_clauses(&self) -> PredicateClauseSet {
        let mut clauses = PredicateClauseSet::default();

        if let Some(owner_id) = self.owner_id {
            clauses.where_predicates.push(Predicate::new(
                "properties.owner_id",
                QueryOperator::Equal,
                owner_id,
            ));
        }

        if let Some(city) = &self.city {
            clauses.where_predicates.push(Predicate::new(
                "properties.city",
                QueryOperator::Like,
                format!("%{}%", escape_like(city)),
            ));
        }

        if let Some(minimum) = self.minimum_price_per_night {
            clauses.where_predicates.push(Predicate::new(
                "properties.cost_per_night",
                QueryOperator::GreaterThanOrEqual,
                to_cents(minimum),
            ));
        }

        if let Some(maximum) = self.maximum_price_per_night {
            clauses.where_predicates.push(Predicate::new(
                "properties.cost_per_night",
                QueryOperator::LessThanOrEqual,
                to_cents(maximum),
            ));
        }

        // Filters the per-property aggregate, so it can only live in HAVING
        if let Some(rating) = self.minimum_rating {
            clauses.having_predicates.push(Predicate::new(
                AVERAGE_RATING_EXPR,
                QueryOperator::GreaterThanOrEqual,
                rating,
            ));
        }

        clauses
    }
}

/// Predicates contributed by the present filters, split by clause
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateClauseSet {
    pub where_predicates: Vec<Predicate>,
    pub having_predicates: Vec<Predicate>,
}

impl PredicateClauseSet {
    pub fn is_empty(&self) -> bool {
        self.where_predicates.is_empty() && self.having_predicates.is_empty()
    }
}

/// Build the property search statement and its bind values.
///
/// Results are ordered by ascending price. Rows with equal prices come back
/// in whatever order the database produces; no tiebreak is applied.
pub fn build_property_search(criteria: &PropertySearchCriteria, limit: u32) -> (String, Vec<DatabaseValue>) {
    let clauses = criteria.predicate_clauses();

    let mut query = SelectQuery::new()
        .select(&[
            "properties.*",
            "avg(property_reviews.rating)::float8 AS average_rating",
        ])
        .from("properties")
        .left_join("property_reviews", "properties.id", "property_reviews.property_id");

    for predicate in clauses.where_predicates {
        query = query.where_predicate(predicate);
    }

    query = query.group_by(&["properties.id"]);

    for predicate in clauses.having_predicates {
        query = query.having_predicate(predicate);
    }

    query
        .order_by_asc("properties.cost_per_night")
        .limit(i64::from(limit))
        .to_sql_with_params()
}

/// Escape LIKE metacharacters so the city matches as a literal substring
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
