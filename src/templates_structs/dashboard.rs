use askama::Template;

use crate::models::group::Group;

use super::PageContext;

/// Group as listed on the dashboard.
pub struct GroupRow {
    pub id: i64,
    pub name: String,
    pub created_on: String,
}

impl From<&Group> for GroupRow {
    fn from(g: &Group) -> Self {
        Self {
            id: g.id,
            name: g.name.clone(),
            created_on: g.created_at.format("%d/%m/%Y").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub groups: Vec<GroupRow>,
    /// Set when the group list could not be loaded.
    pub list_error: Option<String>,
    /// Set when creating a group failed; rendered above the form.
    pub form_error: Option<String>,
    pub name_value: String,
}
