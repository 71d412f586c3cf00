//! In-memory sessions and the request principal extractor
//!
//! Sessions are opaque bearer tokens looked up server-side. The extractor
//! never rejects a request: it yields `Option<Principal>` and leaves the
//! allow/deny decision to the market core's authorization guard, so the
//! 401/403 distinction lives in exactly one place.

use crate::state::AppState;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use dashmap::DashMap;
use std::convert::Infallible;
use types::principal::{Principal, Role};
use uuid::Uuid;

/// In-memory user and session store.
///
/// Login is find-or-create by username; nothing survives a restart.
pub struct SessionStore {
    // username -> stable user id
    users: DashMap<String, Uuid>,
    // bearer token -> principal
    sessions: DashMap<Uuid, Principal>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            sessions: DashMap::new(),
        }
    }

    /// Start a session for `username`, creating the user on first sight.
    /// Returns the bearer token and the session principal.
    pub fn login(&self, username: &str, role: Role) -> (Uuid, Principal) {
        let user_id = *self
            .users
            .entry(username.to_string())
            .or_insert_with(Uuid::now_v7);

        let principal = Principal {
            id: user_id,
            username: username.to_string(),
            role,
        };
        let token = Uuid::now_v7();
        self.sessions.insert(token, principal.clone());

        tracing::info!(user = %username, role = %principal.role, "session started");
        (token, principal)
    }

    /// Drop a session. Unknown tokens are a no-op.
    pub fn logout(&self, token: Uuid) {
        self.sessions.remove(&token);
    }

    /// Resolve a bearer token to its principal.
    pub fn principal_for(&self, token: Uuid) -> Option<Principal> {
        self.sessions.get(&token).map(|entry| entry.value().clone())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the bearer session token from request headers, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

/// The current principal, or none for anonymous requests.
pub struct MaybePrincipal(pub Option<Principal>);

impl FromRequestParts<AppState> for MaybePrincipal {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal =
            bearer_token(&parts.headers).and_then(|token| state.sessions.principal_for(token));
        Ok(Self(principal))
    }
}
