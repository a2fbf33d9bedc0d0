pub mod auth_handlers;
pub mod dashboard;
pub mod group_handlers;
pub mod home_handlers;
pub mod meeting_handlers;

use actix_web::web;

/// Register every application route. The access gate wraps the whole app,
/// so nothing here is protected individually.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home_handlers::index))
        .route("/api/health", web::get().to(home_handlers::health))
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/logout", web::post().to(auth_handlers::logout))
        .route("/dashboard", web::get().to(dashboard::index))
        .route("/dashboard/groups", web::post().to(group_handlers::create))
        .route("/dashboard/groups/{id}", web::get().to(group_handlers::detail))
        .route(
            "/dashboard/groups/{id}/meetings",
            web::post().to(meeting_handlers::create),
        )
        .route(
            "/dashboard/groups/{id}/meetings/{meeting_id}/completion",
            web::post().to(meeting_handlers::set_completion),
        );
}
