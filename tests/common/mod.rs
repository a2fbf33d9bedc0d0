//! Shared test infrastructure.
//!
//! - `FakeSessions`: a session provider with a fixed answer and a lookup counter
//! - `setup_test_db()`: migrated Postgres pool from `TEST_DATABASE_URL`, or `None`
//! - `unreachable_pool()`: lazily connected pool whose every query fails fast

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use studygroups::auth::identity::{AuthSession, SessionClaim, SessionProvider};
use studygroups::errors::AppError;
use studygroups::models::user::UserIdentity;

// ============================================================================
// FAKE SESSION PROVIDER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeState {
    Present,
    Absent,
    Failing,
}

pub struct FakeSessions {
    state: FakeState,
    leader: UserIdentity,
    lookups: AtomicUsize,
}

impl FakeSessions {
    pub fn new(state: FakeState) -> Arc<Self> {
        Arc::new(Self { state, leader: Self::leader(), lookups: AtomicUsize::new(0) })
    }

    /// Always signed in as `leader`, for tests that hit real rows.
    pub fn signed_in_as(leader: UserIdentity) -> Arc<Self> {
        Arc::new(Self { state: FakeState::Present, leader, lookups: AtomicUsize::new(0) })
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn leader() -> UserIdentity {
        UserIdentity {
            id: 1,
            username: "leader".to_string(),
            display_name: "Test Leader".to_string(),
        }
    }
}

#[async_trait]
impl SessionProvider for FakeSessions {
    async fn current_session(
        &self,
        _claim: Option<SessionClaim>,
    ) -> Result<Option<AuthSession>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match self.state {
            FakeState::Present => Ok(Some(AuthSession { user_id: self.leader.id })),
            FakeState::Absent => Ok(None),
            FakeState::Failing => Err(AppError::Transport("backend unreachable".to_string())),
        }
    }

    async fn current_user(
        &self,
        _claim: Option<SessionClaim>,
    ) -> Result<Option<UserIdentity>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match self.state {
            FakeState::Present => Ok(Some(self.leader.clone())),
            FakeState::Absent => Ok(None),
            FakeState::Failing => Err(AppError::Transport("backend unreachable".to_string())),
        }
    }
}

// ============================================================================
// DATABASE SETUP
// ============================================================================

/// Connect to `TEST_DATABASE_URL` and run migrations.
///
/// Returns `None` when the variable is unset so store tests can skip
/// on machines without Postgres.
pub async fn setup_test_db() -> Option<PgPool> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set, skipping database test");
            return None;
        }
    };
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");
    studygroups::db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    Some(pool)
}

/// Pool pointed at a closed port. Queries fail with a pool timeout, which
/// the store reports as `AppError::Transport`.
pub fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(300))
        .connect_lazy("postgres://nobody@127.0.0.1:1/none")
        .expect("lazy pool options are valid")
}

/// Unique username so repeated runs against the same database don't collide.
pub fn unique_username(prefix: &str) -> String {
    format!("{prefix}_{:08x}", rand::random::<u32>())
}
