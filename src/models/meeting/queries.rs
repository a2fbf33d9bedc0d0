use sqlx::PgPool;

use super::types::{Meeting, NewMeeting};
use crate::errors::AppError;

const MEETING_COLUMNS: &str = "id, group_id, theme, date, materials, completed";

pub async fn create(pool: &PgPool, new: &NewMeeting) -> Result<Meeting, AppError> {
    let sql = format!(
        "INSERT INTO meetings (group_id, theme, date, materials, completed) \
         VALUES ($1, $2, $3, $4, FALSE) RETURNING {MEETING_COLUMNS}"
    );
    let meeting = sqlx::query_as::<_, Meeting>(&sql)
        .bind(new.group_id)
        .bind(&new.theme)
        .bind(new.date)
        .bind(&new.materials)
        .fetch_one(pool)
        .await?;
    Ok(meeting)
}

/// Meetings of a group ordered by date ascending (soonest first).
pub async fn find_by_group(pool: &PgPool, group_id: i64) -> Result<Vec<Meeting>, AppError> {
    let sql = format!(
        "SELECT {MEETING_COLUMNS} FROM meetings WHERE group_id = $1 ORDER BY date ASC, id ASC"
    );
    let meetings = sqlx::query_as::<_, Meeting>(&sql)
        .bind(group_id)
        .fetch_all(pool)
        .await?;
    Ok(meetings)
}

/// Set the completion flag. Scoped by group so a meeting id from another
/// group never matches. Concurrent writers: last write wins.
pub async fn set_completed(
    pool: &PgPool,
    group_id: i64,
    meeting_id: i64,
    completed: bool,
) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE meetings SET completed = $1 WHERE id = $2 AND group_id = $3")
        .bind(completed)
        .bind(meeting_id)
        .bind(group_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}
