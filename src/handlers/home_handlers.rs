use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::identity::{SessionProvider, claim_from};
use crate::config::SiteSettings;
use crate::errors::{AppError, render};
use crate::templates_structs::LandingTemplate;

/// GET /: public landing page. A claim the provider cannot confirm shows as signed out.
pub async fn index(
    site: web::Data<SiteSettings>,
    provider: web::Data<dyn SessionProvider>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let signed_in = match provider.current_session(claim_from(&session)).await {
        Ok(found) => found.is_some(),
        Err(e) => {
            log::warn!("Session lookup failed on landing page: {e}");
            false
        }
    };

    render(LandingTemplate {
        app_name: site.app_name.clone(),
        signed_in,
    })
}

/// GET /api/health: liveness check, outside the access gate.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
