use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::auth::identity::{SessionProvider, require_leader};
use crate::auth::session::set_flash;
use crate::errors::AppError;
use crate::handlers::group_handlers::helpers::{back_to_dashboard, load_owned_group};
use crate::models::meeting;

use super::forms::CompletionForm;

/// POST /dashboard/groups/{id}/meetings/{meeting_id}/completion
///
/// Store failures come back as a flash message: on the group page when the
/// update fails, on the dashboard when the group itself cannot be loaded.
pub async fn set_completion(
    pool: web::Data<PgPool>,
    provider: web::Data<dyn SessionProvider>,
    session: Session,
    path: web::Path<(i64, i64)>,
    form: web::Form<CompletionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let leader = require_leader(provider.get_ref(), &session).await?;
    let (group_id, meeting_id) = path.into_inner();
    let group = match load_owned_group(&pool, group_id, leader.id).await {
        Ok(group) => group,
        Err(e @ AppError::Transport(_)) => return Ok(back_to_dashboard(&session, group_id, &e)),
        Err(e) => return Err(e),
    };

    match meeting::set_completed(&pool, group.id, meeting_id, form.completed).await {
        Ok(()) => {
            log::info!(
                "Meeting {meeting_id} in group {} set completed={}",
                group.id,
                form.completed
            );
            let msg = if form.completed { "Meeting marked as completed" } else { "Meeting reopened" };
            set_flash(&session, msg);
        }
        Err(AppError::NotFound) => return Err(AppError::NotFound),
        Err(e) => {
            log::error!("Failed to update meeting {meeting_id}: {e}");
            set_flash(&session, &e.user_message());
        }
    }

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/dashboard/groups/{}", group.id)))
        .finish())
}
