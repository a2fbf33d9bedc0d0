use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use crate::auth::password;
use crate::config::SeedLeader;
use crate::errors::AppError;
use crate::models::user::{self, NewUser};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Create the configured leader account if no user with that name exists.
pub async fn seed_leader(pool: &PgPool, seed: &SeedLeader) -> Result<(), AppError> {
    if user::find_by_username(pool, &seed.username).await?.is_some() {
        log::info!("Leader '{}' already present, skipping seed", seed.username);
        return Ok(());
    }

    let password_hash = password::hash_password(&seed.password).map_err(AppError::Hash)?;
    let id = user::create(
        pool,
        &NewUser {
            username: seed.username.clone(),
            password: password_hash,
            display_name: seed.display_name.clone(),
        },
    )
    .await?;
    log::info!("Seeded leader '{}' (id={})", seed.username, id);
    Ok(())
}
