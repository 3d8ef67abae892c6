//! Query Builder - SELECT and INSERT builders

use super::types::*;
use crate::backends::DatabaseValue;

/// Builder for a single SELECT statement.
///
/// Conditions carry their values unbound; placeholders are assigned when the
/// statement is generated, in the order the clauses appear in the text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    pub(crate) select_fields: Vec<String>,
    pub(crate) from_table: Option<String>,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) where_conditions: Vec<Predicate>,
    pub(crate) group_by: Vec<String>,
    pub(crate) having_conditions: Vec<Predicate>,
    pub(crate) order_by: Vec<String>,
    pub(crate) limit_count: Option<i64>,
}

impl SelectQuery {
    /// Create a new query builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add fields to the select list
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select_fields.extend(fields.iter().map(|field| field.to_string()));
        self
    }

    /// Set the FROM table
    pub fn from(mut self, table: &str) -> Self {
        self.from_table = Some(table.to_string());
        self
    }

    /// Add an INNER JOIN
    pub fn inner_join(self, table: &str, left_column: &str, right_column: &str) -> Self {
        self.join(JoinType::Inner, table, left_column, right_column)
    }

    /// Add a LEFT JOIN
    pub fn left_join(self, table: &str, left_column: &str, right_column: &str) -> Self {
        self.join(JoinType::Left, table, left_column, right_column)
    }

    fn join(mut self, join_type: JoinType, table: &str, left_column: &str, right_column: &str) -> Self {
        self.joins.push(JoinClause {
            join_type,
            table: table.to_string(),
            on_conditions: vec![(left_column.to_string(), right_column.to_string())],
        });
        self
    }

    /// Add WHERE condition with equality
    pub fn where_eq(self, column: &str, value: impl Into<DatabaseValue>) -> Self {
        self.where_predicate(Predicate::new(column, QueryOperator::Equal, value))
    }

    /// Add WHERE condition with greater than or equal
    pub fn where_gte(self, column: &str, value: impl Into<DatabaseValue>) -> Self {
        self.where_predicate(Predicate::new(column, QueryOperator::GreaterThanOrEqual, value))
    }

    /// Add WHERE condition with less than or equal
    pub fn where_lte(self, column: &str, value: impl Into<DatabaseValue>) -> Self {
        self.where_predicate(Predicate::new(column, QueryOperator::LessThanOrEqual, value))
    }

    /// Add WHERE condition with LIKE
    pub fn where_like(self, column: &str, pattern: &str) -> Self {
        self.where_predicate(Predicate::new(column, QueryOperator::Like, pattern))
    }

    /// Add a prepared WHERE predicate
    pub fn where_predicate(mut self, predicate: Predicate) -> Self {
        self.where_conditions.push(predicate);
        self
    }

    /// Add GROUP BY columns
    pub fn group_by(mut self, columns: &[&str]) -> Self {
        self.group_by.extend(columns.iter().map(|column| column.to_string()));
        self
    }

    /// Add HAVING condition with greater than or equal
    pub fn having_gte(self, expression: &str, value: impl Into<DatabaseValue>) -> Self {
        self.having_predicate(Predicate::new(expression, QueryOperator::GreaterThanOrEqual, value))
    }

    /// Add a prepared HAVING predicate
    pub fn having_predicate(mut self, predicate: Predicate) -> Self {
        self.having_conditions.push(predicate);
        self
    }

    /// Add an ascending ORDER BY column
    pub fn order_by_asc(mut self, column: &str) -> Self {
        self.order_by.push(column.to_string());
        self
    }

    /// Set LIMIT; the count is bound, not inlined
    pub fn limit(mut self, count: i64) -> Self {
        self.limit_count = Some(count);
        self
    }
}

/// Builder for `INSERT INTO ... VALUES (...) RETURNING ...`
#[derive(Debug, Clone, PartialEq)]
pub struct InsertQuery {
    pub(crate) table: String,
    pub(crate) columns: Vec<(String, InsertValue)>,
    pub(crate) returning: Vec<String>,
}

impl InsertQuery {
    pub fn into_table(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: Vec::new(),
            returning: Vec::new(),
        }
    }

    /// Add a column whose value is bound
    pub fn value(mut self, column: &str, value: impl Into<DatabaseValue>) -> Self {
        self.columns.push((column.to_string(), InsertValue::Bound(value.into())));
        self
    }

    /// Add a bound column value passed through the SQL function `function`
    pub fn applied_value(mut self, column: &str, function: &'static str, value: impl Into<DatabaseValue>) -> Self {
        self.columns.push((column.to_string(), InsertValue::Applied(function, value.into())));
        self
    }

    /// Add a column set to a fixed SQL literal
    pub fn literal(mut self, column: &str, literal: &'static str) -> Self {
        self.columns.push((column.to_string(), InsertValue::Literal(literal)));
        self
    }

    pub fn returning(mut self, columns: &[&str]) -> Self {
        self.returning.extend(columns.iter().map(|column| column.to_string()));
        self
    }
}
