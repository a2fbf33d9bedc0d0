use std::sync::Arc;
use std::time::Duration;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use studygroups::auth::gate::{AccessGate, RouteRules};
use studygroups::auth::identity::{PgSessionProvider, SharedSessionProvider};
use studygroups::auth::rate_limit::LoginThrottle;
use studygroups::config::AppConfig;
use studygroups::{auth, db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .map_err(std::io::Error::other)?;
    db::run_migrations(&pool).await.map_err(std::io::Error::other)?;

    if let Some(seed) = &config.seed_leader {
        if let Err(e) = db::seed_leader(&pool, seed).await {
            log::error!("Failed to seed leader '{}': {e}", seed.username);
        }
    }

    // Session encryption key. Without SESSION_KEY, sessions are lost on restart.
    let secret_key = match &config.session_key {
        Some(val) => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        None => {
            log::warn!("No usable SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let provider: SharedSessionProvider = Arc::new(PgSessionProvider::new(pool.clone()));
    let gate = web::Data::new(AccessGate::new(provider.clone(), RouteRules::default()));
    let provider_data = web::Data::from(provider);
    let site = web::Data::new(config.site());
    let throttle = web::Data::new(LoginThrottle::new(
        config.login_max_attempts,
        Duration::from_secs(config.login_window_secs),
    ));
    let cookie_secure = config.cookie_secure;

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build();

        App::new()
            // Registered first so it runs inside the session middleware.
            .wrap(middleware::from_fn(auth::middleware::access_gate))
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(gate.clone())
            .app_data(provider_data.clone())
            .app_data(site.clone())
            .app_data(throttle.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(include_str!("../templates/errors/404.html"))
            }))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
