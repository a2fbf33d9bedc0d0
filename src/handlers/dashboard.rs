use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::identity::{SessionProvider, require_leader};
use crate::config::SiteSettings;
use crate::errors::{AppError, render};
use crate::models::group;
use crate::models::user::UserIdentity;
use crate::templates_structs::{DashboardTemplate, GroupRow, PageContext};

/// Render the dashboard: the leader's groups plus the create-group form.
/// A failed group query shows up inline in the list section.
pub async fn render_dashboard(
    pool: &PgPool,
    site: &SiteSettings,
    session: &Session,
    leader: &UserIdentity,
    form_error: Option<String>,
    name_value: String,
) -> Result<HttpResponse, AppError> {
    let (groups, list_error) = match group::find_by_leader(pool, leader.id).await {
        Ok(groups) => (groups.iter().map(GroupRow::from).collect(), None),
        Err(e) => {
            log::error!("Failed to load groups for leader {}: {e}", leader.id);
            (Vec::new(), Some(e.user_message()))
        }
    };

    render(DashboardTemplate {
        ctx: PageContext::build(session, site, leader),
        groups,
        list_error,
        form_error,
        name_value,
    })
}

pub async fn index(
    pool: web::Data<PgPool>,
    site: web::Data<SiteSettings>,
    provider: web::Data<dyn SessionProvider>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let leader = require_leader(provider.get_ref(), &session).await?;
    render_dashboard(&pool, &site, &session, &leader, None, String::new()).await
}
