use chrono::{DateTime, Utc};
use serde::Serialize;

/// A study group, owned by the leader who created it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub leader_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a group. `name` is already validated.
#[derive(Debug, Clone)]
pub struct NewGroup {
    pub name: String,
    pub leader_id: i64,
}
