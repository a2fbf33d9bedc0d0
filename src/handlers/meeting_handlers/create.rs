use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::auth::identity::{SessionProvider, require_leader};
use crate::auth::session::set_flash;
use crate::config::SiteSettings;
use crate::errors::AppError;
use crate::handlers::group_handlers::helpers::{
    back_to_dashboard, load_owned_group, render_group_page,
};
use crate::models::meeting;

use super::forms::MeetingForm;

/// POST /dashboard/groups/{id}/meetings
pub async fn create(
    pool: web::Data<PgPool>,
    site: web::Data<SiteSettings>,
    provider: web::Data<dyn SessionProvider>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<MeetingForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let leader = require_leader(provider.get_ref(), &session).await?;
    let group_id = path.into_inner();
    let group = match load_owned_group(&pool, group_id, leader.id).await {
        Ok(group) => group,
        Err(e @ AppError::Transport(_)) => return Ok(back_to_dashboard(&session, group_id, &e)),
        Err(e) => return Err(e),
    };

    let created = match form.to_new_meeting(group.id) {
        Ok(new_meeting) => meeting::create(&pool, &new_meeting).await,
        Err(e) => Err(e),
    };

    match created {
        Ok(m) => {
            log::info!("Meeting {} created in group {}", m.id, group.id);
            set_flash(&session, "Meeting created successfully");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", format!("/dashboard/groups/{}", group.id)))
                .finish())
        }
        Err(e) => {
            if !matches!(e, AppError::Validation(_)) {
                log::error!("Failed to create meeting in group {}: {e}", group.id);
            }
            render_group_page(
                &pool,
                &site,
                &session,
                &leader,
                &group,
                Some(e.user_message()),
                form.values(),
            )
            .await
        }
    }
}
