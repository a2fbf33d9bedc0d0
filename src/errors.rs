use actix_web::{HttpResponse, ResponseError};
use askama::Template;

/// Application error. Handlers match on the kind to decide between an
/// inline message, a redirect to `/login`, or an error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The store or session backend could not be reached or rejected the call.
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    NotAuthenticated(String),
    #[error("{0}")]
    Validation(String),
    #[error("Invalid or missing CSRF token")]
    Csrf,
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
    #[error("Hash error: {0}")]
    Hash(String),
    #[error("Not found")]
    NotFound,
}

impl AppError {
    /// Message suitable for rendering next to a form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Transport(_) => {
                "The data store is unavailable right now. Please try again.".to_string()
            }
            AppError::Template(_) | AppError::Hash(_) => "Something went wrong.".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotAuthenticated(_) => HttpResponse::SeeOther()
                .insert_header(("Location", "/login"))
                .finish(),
            AppError::Validation(msg) => HttpResponse::BadRequest().body(msg.clone()),
            AppError::Csrf => HttpResponse::Forbidden().body(self.to_string()),
            AppError::NotFound => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(include_str!("../templates/errors/404.html")),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Transport(format!("Database error: {e}"))
    }
}

/// Render a template into a 200 HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn not_authenticated_redirects_to_login() {
        let resp = AppError::NotAuthenticated("x".into()).error_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("Location").unwrap(), "/login");
    }

    #[test]
    fn status_codes_by_kind() {
        assert_eq!(
            AppError::Validation("x".into()).error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Csrf.error_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::NotFound.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Transport("down".into()).error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn transport_details_stay_out_of_user_messages() {
        let msg = AppError::Transport("Database error: connection refused".into()).user_message();
        assert!(!msg.contains("connection refused"));
        assert_eq!(AppError::Validation("Theme is required".into()).user_message(), "Theme is required");
    }
}
