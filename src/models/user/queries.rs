use sqlx::PgPool;

use super::types::{NewUser, User, UserIdentity};
use crate::errors::AppError;

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, display_name, created_at \
         FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<UserIdentity>, AppError> {
    let identity = sqlx::query_as::<_, UserIdentity>(
        "SELECT id, username, display_name FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(identity)
}

/// Insert a user and return the new id.
pub async fn create(pool: &PgPool, new: &NewUser) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, display_name, password_hash) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&new.username)
    .bind(&new.display_name)
    .bind(&new.password)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
