//! Route-level access control evaluated before any page handler runs.

use crate::auth::identity::{SessionClaim, SharedSessionProvider};

/// Outcome of evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    RedirectTo(String),
}

/// Which paths are protected, which one is the login page, and which are never gated.
#[derive(Debug, Clone)]
pub struct RouteRules {
    pub protected_prefix: String,
    pub protected_root: String,
    pub login_path: String,
    /// Matched against the path with its leading `/` removed.
    pub excluded_prefixes: Vec<String>,
}

impl Default for RouteRules {
    fn default() -> Self {
        Self {
            protected_prefix: "/dashboard".to_string(),
            protected_root: "/dashboard".to_string(),
            login_path: "/login".to_string(),
            excluded_prefixes: ["api", "static", "images", "favicon.ico"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl RouteRules {
    /// API routes, assets and the favicon bypass the gate entirely.
    pub fn is_excluded(&self, path: &str) -> bool {
        let rest = path.strip_prefix('/').unwrap_or(path);
        self.excluded_prefixes.iter().any(|p| rest.starts_with(p.as_str()))
    }

    pub fn decide(&self, path: &str, has_session: bool) -> GateDecision {
        if !has_session && path.starts_with(&self.protected_prefix) {
            return GateDecision::RedirectTo(self.login_path.clone());
        }
        if has_session && path == self.login_path {
            return GateDecision::RedirectTo(self.protected_root.clone());
        }
        GateDecision::Continue
    }
}

/// The gate holds the injected session provider and the routing rules.
/// It keeps no per-request state.
#[derive(Clone)]
pub struct AccessGate {
    provider: SharedSessionProvider,
    rules: RouteRules,
}

impl AccessGate {
    pub fn new(provider: SharedSessionProvider, rules: RouteRules) -> Self {
        Self { provider, rules }
    }

    /// Decide for one request. Excluded paths never reach the provider.
    /// A failed lookup is treated as "no session": protected paths redirect
    /// to login, the login page stays reachable.
    pub async fn evaluate(&self, path: &str, claim: Option<SessionClaim>) -> GateDecision {
        if self.rules.is_excluded(path) {
            return GateDecision::Continue;
        }

        let has_session = match self.provider.current_session(claim).await {
            Ok(session) => session.is_some(),
            Err(e) => {
                log::warn!("Session lookup failed for {path}, treating as signed out: {e}");
                false
            }
        };

        let decision = self.rules.decide(path, has_session);
        log::debug!("gate {path} session={has_session} -> {decision:?}");
        decision
    }
}
