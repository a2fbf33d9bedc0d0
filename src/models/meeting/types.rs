use chrono::NaiveDate;
use serde::Serialize;

/// A meeting inside a group. `completed` is the only field that changes after creation.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Meeting {
    pub id: i64,
    pub group_id: i64,
    pub theme: String,
    pub date: NaiveDate,
    pub materials: String,
    pub completed: bool,
}

/// Fields for inserting a meeting. New meetings always start not completed.
#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub group_id: i64,
    pub theme: String,
    pub date: NaiveDate,
    pub materials: String,
}
