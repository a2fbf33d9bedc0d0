use actix_session::Session;
use actix_web::HttpResponse;
use sqlx::PgPool;

use crate::auth::session::set_flash;
use crate::config::SiteSettings;
use crate::errors::{AppError, render};
use crate::models::group::{self, Group};
use crate::models::meeting;
use crate::models::user::UserIdentity;
use crate::templates_structs::{GroupRow, GroupTemplate, MeetingFormValues, MeetingRow, PageContext};

/// Load a group only if the leader owns it. Another leader's group is `NotFound`.
pub async fn load_owned_group(
    pool: &PgPool,
    group_id: i64,
    leader_id: i64,
) -> Result<Group, AppError> {
    group::find_for_leader(pool, group_id, leader_id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Answer for a group route whose ownership check could not reach the store:
/// back to the dashboard with the message as a flash.
pub fn back_to_dashboard(session: &Session, group_id: i64, err: &AppError) -> HttpResponse {
    log::error!("Failed to load group {group_id}: {err}");
    set_flash(session, &err.user_message());
    HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish()
}

/// Render a group page. A failed meeting query shows up inline in the list section.
pub async fn render_group_page(
    pool: &PgPool,
    site: &SiteSettings,
    session: &Session,
    leader: &UserIdentity,
    group: &Group,
    form_error: Option<String>,
    form: MeetingFormValues,
) -> Result<HttpResponse, AppError> {
    let (meetings, list_error) = match meeting::find_by_group(pool, group.id).await {
        Ok(meetings) => (meetings.iter().map(MeetingRow::from).collect(), None),
        Err(e) => {
            log::error!("Failed to load meetings for group {}: {e}", group.id);
            (Vec::new(), Some(e.user_message()))
        }
    };

    render(GroupTemplate {
        ctx: PageContext::build(session, site, leader),
        group: GroupRow::from(group),
        meetings,
        list_error,
        form_error,
        form,
    })
}
