use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// Stored user. The credential never leaves the repository layer in a response.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

impl FromSqliteRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            username: row.get("username")?,
            password_hash: row.get("password_hash")?,
        })
    }
}

/// Body shared by `/register` and `/login`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i64,
    pub username: String,
}

impl LoginResponse {
    pub fn success(user: User) -> Self {
        Self {
            message: "Login successful".to_string(),
            user_id: user.id,
            username: user.username,
        }
    }
}
