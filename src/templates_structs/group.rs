use askama::Template;

use crate::models::meeting::Meeting;

use super::{GroupRow, PageContext};

pub struct MeetingRow {
    pub id: i64,
    pub theme: String,
    pub date: String,
    pub materials: String,
    pub completed: bool,
}

impl From<&Meeting> for MeetingRow {
    fn from(m: &Meeting) -> Self {
        Self {
            id: m.id,
            theme: m.theme.clone(),
            date: m.date.format("%d/%m/%Y").to_string(),
            materials: m.materials.clone(),
            completed: m.completed,
        }
    }
}

/// Values echoed back into the create-meeting form after a failed submit.
#[derive(Default)]
pub struct MeetingFormValues {
    pub theme: String,
    pub date: String,
    pub materials: String,
}

#[derive(Template)]
#[template(path = "group.html")]
pub struct GroupTemplate {
    pub ctx: PageContext,
    pub group: GroupRow,
    pub meetings: Vec<MeetingRow>,
    pub list_error: Option<String>,
    pub form_error: Option<String>,
    pub form: MeetingFormValues,
}
