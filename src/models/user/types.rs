use chrono::{DateTime, Utc};
use serde::Serialize;

/// Internal user row for authentication, includes password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password_hash")]
    pub password: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Identity of the authenticated leader, safe to hand to pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UserIdentity {
    pub id: i64,
    pub username: String,
    pub display_name: String,
}

/// New user data for creation. `password` is already hashed.
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub display_name: String,
}

impl From<User> for UserIdentity {
    fn from(u: User) -> Self {
        Self { id: u.id, username: u.username, display_name: u.display_name }
    }
}
