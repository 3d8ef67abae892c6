use serde::{Deserialize, Serialize};

use super::Model;

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Credential hash as stored; never serialized back out
    #[serde(rename = "password", skip_serializing)]
    pub password_hash: String,
}

impl Model for User {
    fn table_name() -> &'static str {
        "users"
    }
}

/// Attributes for a new user. The caller hashes the credential.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
