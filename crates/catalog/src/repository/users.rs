use super::CatalogRepository;
use crate::error::ModelResult;
use crate::models::{NewUser, User};
use crate::query::{InsertQuery, Predicate, QueryOperator, SelectQuery};

impl CatalogRepository {
    /// Look a user up by email, ignoring case. `None` when no user matches.
    ///
    /// Both sides are folded by the database's `lower()`, the same function
    /// `create_user` stores through.
    pub async fn find_user_by_email(&self, email: &str) -> ModelResult<Option<User>> {
        let (sql, params) = SelectQuery::new()
            .select(&["users.*"])
            .from("users")
            .where_predicate(
                Predicate::new("lower(users.email)", QueryOperator::Equal, email.trim())
                    .with_value_function("lower"),
            )
            .to_sql_with_params();

        self.fetch_one_model(&sql, &params).await
    }

    /// Look a user up by id. `None` when no user matches.
    pub async fn find_user_by_id(&self, id: i32) -> ModelResult<Option<User>> {
        let (sql, params) = SelectQuery::new()
            .select(&["users.*"])
            .from("users")
            .where_eq("users.id", id)
            .to_sql_with_params();

        self.fetch_one_model(&sql, &params).await
    }

    /// Insert a user and return the stored row with its generated id.
    ///
    /// The email is stored trimmed and lower-cased by the database. A taken
    /// email comes back as `ModelError::UniqueViolation`.
    pub async fn create_user(&self, user: NewUser) -> ModelResult<User> {
        let (sql, params) = InsertQuery::into_table("users")
            .value("name", user.name)
            .applied_value("email", "lower", user.email.trim())
            .value("password", user.password_hash)
            .returning(&["*"])
            .to_sql_with_params();

        let created: User = self.insert_returning(&sql, &params).await?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }
}
