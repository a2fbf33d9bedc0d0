use sqlx::PgPool;

use super::types::{Group, NewGroup};
use crate::errors::AppError;

const GROUP_COLUMNS: &str = "id, name, leader_id, created_at";

pub async fn create(pool: &PgPool, new: &NewGroup) -> Result<Group, AppError> {
    let sql = format!(
        "INSERT INTO groups (name, leader_id) VALUES ($1, $2) RETURNING {GROUP_COLUMNS}"
    );
    let group = sqlx::query_as::<_, Group>(&sql)
        .bind(&new.name)
        .bind(new.leader_id)
        .fetch_one(pool)
        .await?;
    Ok(group)
}

/// All groups owned by a leader, oldest first.
pub async fn find_by_leader(pool: &PgPool, leader_id: i64) -> Result<Vec<Group>, AppError> {
    let sql = format!(
        "SELECT {GROUP_COLUMNS} FROM groups WHERE leader_id = $1 ORDER BY created_at, id"
    );
    let groups = sqlx::query_as::<_, Group>(&sql)
        .bind(leader_id)
        .fetch_all(pool)
        .await?;
    Ok(groups)
}

/// A group by id, only if `leader_id` owns it.
pub async fn find_for_leader(
    pool: &PgPool,
    group_id: i64,
    leader_id: i64,
) -> Result<Option<Group>, AppError> {
    let sql = format!("SELECT {GROUP_COLUMNS} FROM groups WHERE id = $1 AND leader_id = $2");
    let group = sqlx::query_as::<_, Group>(&sql)
        .bind(group_id)
        .bind(leader_id)
        .fetch_optional(pool)
        .await?;
    Ok(group)
}
