use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::rate_limit::LoginThrottle;
use crate::auth::{csrf, password, session as auth_session};
use crate::config::SiteSettings;
use crate::errors::{AppError, render};
use crate::models::user;
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_form(session: &Session, site: &SiteSettings, error: Option<String>, username: &str) -> LoginTemplate {
    LoginTemplate {
        error,
        app_name: site.app_name.clone(),
        csrf_token: csrf::get_or_create_token(session),
        username: username.to_string(),
    }
}

/// GET /login. Signed-in visitors never get here; the access gate redirects them.
pub async fn login_page(
    site: web::Data<SiteSettings>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    render(login_form(&session, &site, None, ""))
}

pub async fn login_submit(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    site: web::Data<SiteSettings>,
    session: Session,
    form: web::Form<LoginForm>,
    throttle: web::Data<LoginThrottle>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if throttle.is_blocked(ip) {
        log::warn!("Login throttled for {ip}");
        let msg = "Too many failed login attempts. Please try again later.".to_string();
        return render(login_form(&session, &site, Some(msg), &form.username));
    }

    let found = match user::find_by_username(&pool, form.username.trim()).await {
        Ok(found) => found,
        Err(e) => {
            log::error!("Login lookup failed: {e}");
            return render(login_form(&session, &site, Some(e.user_message()), &form.username));
        }
    };

    let verified = found.filter(|u| {
        password::verify_password(&form.password, &u.password).unwrap_or_else(|e| {
            log::error!("Unreadable password hash for user {}: {e}", u.id);
            false
        })
    });

    match verified {
        Some(u) => {
            throttle.clear(ip);
            auth_session::sign_in(&session, u.id, &u.username);
            log::info!("Leader '{}' signed in", u.username);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish())
        }
        None => {
            throttle.record_failure(ip);
            let msg = "Invalid username or password".to_string();
            render(login_form(&session, &site, Some(msg), &form.username))
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
