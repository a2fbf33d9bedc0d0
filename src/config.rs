//! Runtime configuration read from the environment (optionally via `.env`).

use std::env;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_APP_NAME: &str = "Study Groups";
const MIN_SESSION_KEY_LEN: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Leader account created at startup when it does not exist yet.
#[derive(Debug, Clone)]
pub struct SeedLeader {
    pub username: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    /// `None` when unset or too short; a random key is generated instead.
    pub session_key: Option<String>,
    pub cookie_secure: bool,
    pub app_name: String,
    pub seed_leader: Option<SeedLeader>,
    pub login_max_attempts: usize,
    pub login_window_secs: u64,
}

/// Values the pages need at render time.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub app_name: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let session_key = match env::var("SESSION_KEY") {
            Ok(val) if val.len() >= MIN_SESSION_KEY_LEN => Some(val),
            Ok(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {}+), ignoring it",
                    val.len(),
                    MIN_SESSION_KEY_LEN
                );
                None
            }
            Err(_) => None,
        };

        let seed_leader = match (env::var("LEADER_USERNAME"), env::var("LEADER_PASSWORD")) {
            (Ok(username), Ok(password)) if !username.is_empty() && !password.is_empty() => {
                let display_name =
                    env::var("LEADER_DISPLAY_NAME").unwrap_or_else(|_| username.clone());
                Some(SeedLeader { username, password, display_name })
            }
            _ => None,
        };

        Ok(Self {
            database_url,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 8)?,
            session_key,
            cookie_secure: parse_var("COOKIE_SECURE", false)?,
            app_name: env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
            seed_leader,
            login_max_attempts: parse_var("LOGIN_MAX_ATTEMPTS", 5)?,
            login_window_secs: parse_var("LOGIN_WINDOW_SECS", 900)?,
        })
    }

    pub fn site(&self) -> SiteSettings {
        SiteSettings { app_name: self.app_name.clone() }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self { app_name: DEFAULT_APP_NAME.to_string() }
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
