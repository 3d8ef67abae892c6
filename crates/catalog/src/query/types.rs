//! Query Builder Types - Core types and enums for query building

use std::fmt;

use crate::backends::DatabaseValue;

/// Query operator types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperator {
    Equal,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Like,
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOperator::Equal => write!(f, "="),
            QueryOperator::GreaterThanOrEqual => write!(f, ">="),
            QueryOperator::LessThanOrEqual => write!(f, "<="),
            QueryOperator::Like => write!(f, "LIKE"),
        }
    }
}

/// A single `expression operator value` condition.
///
/// `expression` is SQL written by this crate (a column or an aggregate);
/// `value` is always bound, never inlined. When `value_function` is set the
/// placeholder is rendered as its argument, e.g. `lower($1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub expression: String,
    pub operator: QueryOperator,
    pub value: DatabaseValue,
    pub value_function: Option<&'static str>,
}

impl Predicate {
    pub fn new(expression: &str, operator: QueryOperator, value: impl Into<DatabaseValue>) -> Self {
        Self {
            expression: expression.to_string(),
            operator,
            value: value.into(),
            value_function: None,
        }
    }

    /// Pass the bound value through the SQL function `function`
    pub fn with_value_function(mut self, function: &'static str) -> Self {
        self.value_function = Some(function);
        self
    }
}

/// Join types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::Left => write!(f, "LEFT JOIN"),
        }
    }
}

/// Join clause
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: String,
    pub on_conditions: Vec<(String, String)>, // (left_column, right_column)
}

/// Value written into an INSERT column
#[derive(Debug, Clone, PartialEq)]
pub enum InsertValue {
    /// Bound through a placeholder
    Bound(DatabaseValue),
    /// Bound, then passed through a SQL function, e.g. `lower($2)`
    Applied(&'static str, DatabaseValue),
    /// Fixed SQL literal owned by this crate, e.g. `TRUE`
    Literal(&'static str),
}
