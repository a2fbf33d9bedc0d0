use serde::Deserialize;

use crate::auth::validate::{MAX_MATERIALS_LEN, MAX_THEME_LEN, validate_date, validate_required};
use crate::errors::AppError;
use crate::models::meeting::NewMeeting;
use crate::templates_structs::MeetingFormValues;

#[derive(Debug, Deserialize)]
pub struct MeetingForm {
    pub theme: String,
    pub date: String,
    pub materials: String,
    pub csrf_token: String,
}

impl MeetingForm {
    /// All three fields are required; `date` must be `YYYY-MM-DD`.
    pub fn to_new_meeting(&self, group_id: i64) -> Result<NewMeeting, AppError> {
        let theme = validate_required(&self.theme, "Theme", MAX_THEME_LEN)?;
        let date = validate_date(&self.date, "Date")?;
        let materials = validate_required(&self.materials, "Materials", MAX_MATERIALS_LEN)?;
        Ok(NewMeeting {
            group_id,
            theme: theme.to_string(),
            date,
            materials: materials.to_string(),
        })
    }

    pub fn values(&self) -> MeetingFormValues {
        MeetingFormValues {
            theme: self.theme.clone(),
            date: self.date.clone(),
            materials: self.materials.clone(),
        }
    }
}

/// New value of the completion flag.
#[derive(Debug, Deserialize)]
pub struct CompletionForm {
    pub completed: bool,
    pub csrf_token: String,
}
