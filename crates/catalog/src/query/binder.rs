//! Positional parameter binding

use crate::backends::{DatabaseValue, SqlDialect};

/// Accumulates bind values and hands out matching placeholders.
///
/// The placeholder returned by `bind` always names the value's 1-based
/// position, so binding in the order clauses are written keeps the
/// placeholders in the statement strictly increasing.
#[derive(Debug, Clone, Default)]
pub struct ParameterBinder {
    dialect: SqlDialect,
    values: Vec<DatabaseValue>,
}

impl ParameterBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` and return its placeholder
    pub fn bind(&mut self, value: impl Into<DatabaseValue>) -> String {
        self.values.push(value.into());
        self.dialect.parameter_placeholder(self.values.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[DatabaseValue] {
        &self.values
    }

    pub fn into_values(self) -> Vec<DatabaseValue> {
        self.values
    }
}
