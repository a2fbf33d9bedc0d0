//! Session provider: answers "is there a valid session, and whose is it?"
//!
//! The cookie only carries a claim (a user id). A claim becomes a session
//! once the provider confirms it against the user store. Handlers and the
//! access gate both receive the provider as an injected trait object.

use std::sync::Arc;

use actix_session::Session;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::{self, UserIdentity};

/// What the session cookie asserts, before verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClaim {
    pub user_id: i64,
}

/// A verified session. Only its presence matters to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: i64,
}

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolve the claim into a session. `Ok(None)` means no valid session;
    /// `Err` means the lookup itself failed.
    async fn current_session(
        &self,
        claim: Option<SessionClaim>,
    ) -> Result<Option<AuthSession>, AppError>;

    async fn current_user(
        &self,
        claim: Option<SessionClaim>,
    ) -> Result<Option<UserIdentity>, AppError>;
}

pub type SharedSessionProvider = Arc<dyn SessionProvider>;

/// Read the claim from the cookie session. An unreadable value counts as no claim.
pub fn claim_from(session: &Session) -> Option<SessionClaim> {
    session
        .get::<i64>("user_id")
        .unwrap_or(None)
        .map(|user_id| SessionClaim { user_id })
}

/// Provider backed by the `users` table.
#[derive(Clone)]
pub struct PgSessionProvider {
    pool: PgPool,
}

impl PgSessionProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionProvider for PgSessionProvider {
    async fn current_session(
        &self,
        claim: Option<SessionClaim>,
    ) -> Result<Option<AuthSession>, AppError> {
        Ok(self
            .current_user(claim)
            .await?
            .map(|u| AuthSession { user_id: u.id }))
    }

    async fn current_user(
        &self,
        claim: Option<SessionClaim>,
    ) -> Result<Option<UserIdentity>, AppError> {
        let Some(claim) = claim else {
            return Ok(None);
        };
        user::find_by_id(&self.pool, claim.user_id).await
    }
}

/// Resolve the current leader for a handler, or fail with `NotAuthenticated`.
/// A failed lookup is reported the same way so the request ends at `/login`.
pub async fn require_leader(
    provider: &dyn SessionProvider,
    session: &Session,
) -> Result<UserIdentity, AppError> {
    match provider.current_user(claim_from(session)).await {
        Ok(Some(leader)) => Ok(leader),
        Ok(None) => Err(AppError::NotAuthenticated("You must be signed in".to_string())),
        Err(e) => {
            log::warn!("User lookup failed, treating as signed out: {e}");
            Err(AppError::NotAuthenticated("You must be signed in".to_string()))
        }
    }
}
