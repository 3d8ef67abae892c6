//! Error types for the catalog data-access layer
//!
//! Lookups that match nothing are not errors: they return `Ok(None)`.
//! Everything the executor reports comes back as a `ModelError`, with
//! unique-constraint violations split out so callers can react to them.

use std::fmt;

/// Result type alias for catalog operations
pub type ModelResult<T> = Result<T, ModelError>;

/// ORM error type alias
pub type OrmError = ModelError;

/// ORM result type alias
pub type OrmResult<T> = ModelResult<T>;

/// Error types for catalog operations
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Statement execution failed on the database
    Database(String),
    /// A unique constraint rejected the write (e.g. duplicate email)
    UniqueViolation {
        constraint: Option<String>,
        message: String,
    },
    /// Connection pool error
    Connection(String),
    /// Binding parameters or reading columns failed
    Query(String),
    /// Row could not be decoded into a model
    Serialization(String),
    /// Configuration error
    Configuration(String),
    /// Database URL could not be parsed
    InvalidUrl(String),
}

impl ModelError {
    /// Whether this error is a unique-constraint violation
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, ModelError::UniqueViolation { .. })
    }

    /// Whether the violated constraint is the one named `constraint`
    pub fn violates_constraint(&self, constraint: &str) -> bool {
        match self {
            ModelError::UniqueViolation {
                constraint: Some(name),
                ..
            } => name == constraint,
            _ => false,
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Database(msg) => write!(f, "Database error: {}", msg),
            ModelError::UniqueViolation {
                constraint: Some(name),
                message,
            } => write!(f, "Unique constraint '{}' violated: {}", name, message),
            ModelError::UniqueViolation {
                constraint: None,
                message,
            } => write!(f, "Unique constraint violated: {}", message),
            ModelError::Connection(msg) => write!(f, "Connection error: {}", msg),
            ModelError::Query(msg) => write!(f, "Query error: {}", msg),
            ModelError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ModelError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            ModelError::InvalidUrl(msg) => write!(f, "Invalid database URL: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

// Convert from sqlx errors
impl From<sqlx::Error> for ModelError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    let constraint = db_err.constraint().map(str::to_string);
                    tracing::warn!(
                        constraint = constraint.as_deref().unwrap_or("unknown"),
                        "Unique constraint violation"
                    );
                    ModelError::UniqueViolation {
                        constraint,
                        message: db_err.message().to_string(),
                    }
                } else {
                    ModelError::Database(db_err.to_string())
                }
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                ModelError::Connection(err.to_string())
            }
            sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnDecode { .. } => ModelError::Query(err.to_string()),
            other => ModelError::Database(other.to_string()),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;

    use sqlx::error::{DatabaseError, ErrorKind};

    /// Server-side error carrying a SQLSTATE, as the driver reports it
    #[derive(Debug)]
    struct ServerError {
        code: &'static str,
        constraint: Option<&'static str>,
        message: &'static str,
    }

    impl fmt::Display for ServerError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message)
        }
    }

    impl StdError for ServerError {}

    impl DatabaseError for ServerError {
        fn message(&self) -> &str {
            self.message
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                "23505" => ErrorKind::UniqueViolation,
                "23503" => ErrorKind::ForeignKeyViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn server_error(code: &'static str, constraint: Option<&'static str>, message: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ServerError {
            code,
            constraint,
            message,
        }))
    }

    #[test]
    fn test_sqlx_unique_violation_maps_to_unique_violation() {
        let err: ModelError = server_error(
            "23505",
            Some("users_email_key"),
            "duplicate key value violates unique constraint \"users_email_key\"",
        )
        .into();

        assert_eq!(
            err,
            ModelError::UniqueViolation {
                constraint: Some("users_email_key".to_string()),
                message: "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            }
        );
        assert!(err.violates_constraint("users_email_key"));
    }

    #[test]
    fn test_other_sqlx_database_errors_map_to_database() {
        let err: ModelError = server_error(
            "23503",
            Some("properties_owner_id_fkey"),
            "insert or update on table \"properties\" violates foreign key constraint",
        )
        .into();
        assert!(matches!(err, ModelError::Database(_)));
        assert!(!err.is_unique_violation());

        let err: ModelError = server_error("42P01", None, "relation \"properties\" does not exist").into();
        assert_eq!(
            err,
            ModelError::Database("relation \"properties\" does not exist".to_string())
        );
    }

    #[test]
    fn test_unique_violation_display_with_constraint() {
        let err = ModelError::UniqueViolation {
            constraint: Some("users_email_key".to_string()),
            message: "duplicate key value violates unique constraint".to_string(),
        };

        assert!(err.is_unique_violation());
        assert!(err.violates_constraint("users_email_key"));
        assert!(!err.violates_constraint("properties_pkey"));
        assert_eq!(
            err.to_string(),
            "Unique constraint 'users_email_key' violated: duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn test_generic_failures_are_not_unique_violations() {
        let errors = vec![
            ModelError::Database("ERROR: 42703 column \"nonexistent\" does not exist".to_string()),
            ModelError::Connection("pool timed out".to_string()),
            ModelError::Query("Column 'x' not found".to_string()),
        ];

        for error in errors {
            assert!(!error.is_unique_violation(), "misclassified: {}", error);
        }
    }

    #[test]
    fn test_sqlx_pool_errors_map_to_connection() {
        let err: ModelError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, ModelError::Connection(_)));

        let err: ModelError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ModelError::Database(_)));
    }

    #[test]
    fn test_serde_json_error_maps_to_serialization() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: ModelError = json_err.into();
        assert!(matches!(err, ModelError::Serialization(_)));
    }
}
