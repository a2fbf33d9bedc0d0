use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::auth::identity::{SessionProvider, require_leader};
use crate::auth::session::set_flash;
use crate::config::SiteSettings;
use crate::errors::AppError;
use crate::handlers::dashboard::render_dashboard;
use crate::models::group;
use crate::templates_structs::MeetingFormValues;

use super::forms::GroupForm;
use super::helpers::{back_to_dashboard, load_owned_group, render_group_page};

/// POST /dashboard/groups
pub async fn create(
    pool: web::Data<PgPool>,
    site: web::Data<SiteSettings>,
    provider: web::Data<dyn SessionProvider>,
    session: Session,
    form: web::Form<GroupForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let leader = require_leader(provider.get_ref(), &session).await?;

    let created = match form.to_new_group(leader.id) {
        Ok(new_group) => group::create(&pool, &new_group).await,
        Err(e) => Err(e),
    };

    match created {
        Ok(g) => {
            log::info!("Leader {} created group {} '{}'", leader.id, g.id, g.name);
            set_flash(&session, "Group created successfully");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish())
        }
        Err(e) => {
            if !matches!(e, AppError::Validation(_)) {
                log::error!("Failed to create group for leader {}: {e}", leader.id);
            }
            render_dashboard(&pool, &site, &session, &leader, Some(e.user_message()), form.name.clone())
                .await
        }
    }
}

/// GET /dashboard/groups/{id}
pub async fn detail(
    pool: web::Data<PgPool>,
    site: web::Data<SiteSettings>,
    provider: web::Data<dyn SessionProvider>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let leader = require_leader(provider.get_ref(), &session).await?;
    let group_id = path.into_inner();
    let group = match load_owned_group(&pool, group_id, leader.id).await {
        Ok(group) => group,
        Err(e @ AppError::Transport(_)) => return Ok(back_to_dashboard(&session, group_id, &e)),
        Err(e) => return Err(e),
    };
    render_group_page(&pool, &site, &session, &leader, &group, None, MeetingFormValues::default())
        .await
}
