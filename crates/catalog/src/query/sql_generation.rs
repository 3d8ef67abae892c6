//! Query Builder SQL generation

use super::binder::ParameterBinder;
use super::builder::{InsertQuery, SelectQuery};
use super::types::*;
use crate::backends::DatabaseValue;

impl SelectQuery {
    /// Generate SQL with positional placeholders and the matching values.
    ///
    /// Segment order is fixed: SELECT, FROM, JOIN*, WHERE?, GROUP BY?,
    /// HAVING?, ORDER BY?, LIMIT?. Empty segments are left out entirely.
    pub fn to_sql_with_params(&self) -> (String, Vec<DatabaseValue>) {
        let mut sql = String::new();
        let mut binder = ParameterBinder::new();

        // SELECT clause
        sql.push_str("SELECT ");
        if self.select_fields.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.select_fields.join(", "));
        }

        // FROM clause
        if let Some(table) = &self.from_table {
            sql.push_str(" FROM ");
            sql.push_str(table);
        }

        // JOIN clauses
        for join in &self.joins {
            sql.push_str(&format!(" {} {}", join.join_type, join.table));
            if !join.on_conditions.is_empty() {
                sql.push_str(" ON ");
                let conditions: Vec<String> = join
                    .on_conditions
                    .iter()
                    .map(|(left, right)| format!("{} = {}", left, right))
                    .collect();
                sql.push_str(&conditions.join(" AND "));
            }
        }

        // WHERE clause
        if !self.where_conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&bind_conditions(&self.where_conditions, &mut binder));
        }

        // GROUP BY clause
        if !self.group_by.is_empty() {
            sql.push_str(&format!(" GROUP BY {}", self.group_by.join(", ")));
        }

        // HAVING clause
        if !self.having_conditions.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&bind_conditions(&self.having_conditions, &mut binder));
        }

        // ORDER BY clause
        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            let order_clauses: Vec<String> = self
                .order_by
                .iter()
                .map(|column| format!("{} ASC", column))
                .collect();
            sql.push_str(&order_clauses.join(", "));
        }

        // LIMIT clause
        if let Some(limit) = self.limit_count {
            sql.push_str(&format!(" LIMIT {}", binder.bind(limit)));
        }

        (sql, binder.into_values())
    }
}

impl InsertQuery {
    /// Generate `INSERT ... VALUES (...) [RETURNING ...]` with its values
    pub fn to_sql_with_params(&self) -> (String, Vec<DatabaseValue>) {
        let mut binder = ParameterBinder::new();

        let columns: Vec<&str> = self.columns.iter().map(|(column, _)| column.as_str()).collect();
        let values: Vec<String> = self
            .columns
            .iter()
            .map(|(_, value)| match value {
                InsertValue::Bound(value) => binder.bind(value.clone()),
                InsertValue::Applied(function, value) => format!("{}({})", function, binder.bind(value.clone())),
                InsertValue::Literal(literal) => literal.to_string(),
            })
            .collect();

        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            values.join(", ")
        );

        if !self.returning.is_empty() {
            sql.push_str(&format!(" RETURNING {}", self.returning.join(", ")));
        }

        (sql, binder.into_values())
    }
}

fn bind_conditions(conditions: &[Predicate], binder: &mut ParameterBinder) -> String {
    conditions
        .iter()
        .map(|condition| {
            let mut placeholder = binder.bind(condition.value.clone());
            if let Some(function) = condition.value_function {
                placeholder = format!("{}({})", function, placeholder);
            }
            format!("{} {} {}", condition.expression, condition.operator, placeholder)
        })
        .collect::<Vec<_>>()
        .join(" AND ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test_support::placeholder_indices;

    #[test]
    fn test_select_segments_in_clause_order() {
        let (sql, params) = SelectQuery::new()
            .select(&["properties.*"])
            .from("properties")
            .left_join("property_reviews", "properties.id", "property_reviews.property_id")
            .order_by_asc("properties.cost_per_night")
            .having_gte("avg(property_reviews.rating)", 4.0)
            .group_by(&["properties.id"])
            .where_eq("properties.owner_id", 850)
            .limit(10)
            .to_sql_with_params();

        assert_eq!(
            sql,
            "SELECT properties.* FROM properties \
             LEFT JOIN property_reviews ON properties.id = property_reviews.property_id \
             WHERE properties.owner_id = $1 \
             GROUP BY properties.id \
             HAVING avg(property_reviews.rating) >= $2 \
             ORDER BY properties.cost_per_night ASC \
             LIMIT $3"
        );
        assert_eq!(
            params,
            vec![
                DatabaseValue::Int32(850),
                DatabaseValue::Float64(4.0),
                DatabaseValue::Int64(10),
            ]
        );
    }

    #[test]
    fn test_select_without_conditions_has_no_where_or_having() {
        let (sql, params) = SelectQuery::new()
            .from("users")
            .to_sql_with_params();

        assert_eq!(sql, "SELECT * FROM users");
        assert!(params.is_empty());
    }

    #[test]
    fn test_where_conditions_joined_with_and() {
        let (sql, params) = SelectQuery::new()
            .from("properties")
            .where_like("properties.city", "%Van%")
            .where_gte("properties.cost_per_night", 5000_i64)
            .where_lte("properties.cost_per_night", 20000_i64)
            .to_sql_with_params();

        assert!(sql.ends_with(
            "WHERE properties.city LIKE $1 AND properties.cost_per_night >= $2 AND properties.cost_per_night <= $3"
        ));
        assert_eq!(placeholder_indices(&sql), vec![1, 2, 3]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_insert_binds_values_and_inlines_literals() {
        let (sql, params) = InsertQuery::into_table("properties")
            .value("owner_id", 1)
            .value("title", "Speed lamp")
            .literal("active", "TRUE")
            .value("city", "Namsub")
            .returning(&["*"])
            .to_sql_with_params();

        assert_eq!(
            sql,
            "INSERT INTO properties (owner_id, title, active, city) VALUES ($1, $2, TRUE, $3) RETURNING *"
        );
        assert_eq!(
            params,
            vec![
                DatabaseValue::Int32(1),
                DatabaseValue::String("Speed lamp".to_string()),
                DatabaseValue::String("Namsub".to_string()),
            ]
        );
    }

    #[test]
    fn test_value_functions_wrap_only_the_placeholder() {
        let (sql, params) = SelectQuery::new()
            .select(&["users.*"])
            .from("users")
            .where_predicate(
                Predicate::new("lower(users.email)", QueryOperator::Equal, "Ébène@Example.com")
                    .with_value_function("lower"),
            )
            .to_sql_with_params();

        assert_eq!(sql, "SELECT users.* FROM users WHERE lower(users.email) = lower($1)");
        assert_eq!(params, vec![DatabaseValue::String("Ébène@Example.com".to_string())]);

        let (sql, params) = InsertQuery::into_table("users")
            .value("name", "Kian Dixon")
            .applied_value("email", "lower", "Ébène@Example.com")
            .value("password", "hashed")
            .to_sql_with_params();

        assert_eq!(sql, "INSERT INTO users (name, email, password) VALUES ($1, lower($2), $3)");
        assert_eq!(params[1], DatabaseValue::String("Ébène@Example.com".to_string()));
    }
}
