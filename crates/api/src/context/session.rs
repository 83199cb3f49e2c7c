//! In-process session store keyed by the session cookie
//!
//! A session holds at most one [`CredentialContext`] and remembers the base
//! URL of its last successful login. Signing out drops the credentials but
//! keeps that URL so the login page can offer it again.

use std::time::{Duration, Instant};

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use dashmap::mapref::one::RefMut;
use dashmap::DashMap;
use hostatlas_domain::constants::SESSION_COOKIE_NAME;
use hostatlas_domain::CredentialContext;
use tracing::debug;
use uuid::Uuid;

use super::SharedContext;
use crate::error::ApiFailure;

#[derive(Debug)]
struct SessionEntry {
    credentials: Option<CredentialContext>,
    last_base_url: Option<String>,
    last_seen: Instant,
}

/// Concurrent map from session id to session state.
///
/// Every lookup refreshes the session. A session left unused for longer
/// than the idle timeout is treated as absent and removed; idle sessions
/// of other browsers are swept on each sign-in.
#[derive(Debug)]
pub struct SessionStore {
    entries: DashMap<String, SessionEntry>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self { entries: DashMap::new(), idle_timeout }
    }

    /// Store `credentials` under a freshly issued session id.
    ///
    /// The previous session, if any, is discarded so a session id is never
    /// reused across logins.
    pub fn sign_in(&self, previous: Option<&str>, credentials: CredentialContext) -> String {
        if let Some(previous) = previous {
            self.entries.remove(previous);
        }
        self.prune_idle();

        let id = Uuid::new_v4().to_string();
        let entry = SessionEntry {
            last_base_url: Some(credentials.base_url().to_string()),
            credentials: Some(credentials),
            last_seen: Instant::now(),
        };
        self.entries.insert(id.clone(), entry);
        id
    }

    /// Drop the credentials of a session. Returns `false` if the session
    /// was not signed in.
    pub fn sign_out(&self, id: &str) -> bool {
        self.touch(id).is_some_and(|mut entry| entry.credentials.take().is_some())
    }

    pub fn credentials(&self, id: &str) -> Option<CredentialContext> {
        self.touch(id).and_then(|entry| entry.credentials.clone())
    }

    pub fn last_base_url(&self, id: &str) -> Option<String> {
        self.touch(id).and_then(|entry| entry.last_base_url.clone())
    }

    /// Number of live sessions holding credentials.
    pub fn active_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.credentials.is_some() && !self.is_idle(entry.value()))
            .count()
    }

    /// Number of sessions still held in memory, idle or not.
    pub fn session_count(&self) -> usize {
        self.entries.len()
    }

    /// Remove every session idle past the timeout.
    pub fn prune_idle(&self) {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !self.is_idle(entry));
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!(removed, "expired idle sessions");
        }
    }

    /// Live entry for `id` with its idle clock reset.
    fn touch(&self, id: &str) -> Option<RefMut<'_, String, SessionEntry>> {
        self.entries.remove_if(id, |_, entry| self.is_idle(entry));
        let mut entry = self.entries.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(entry)
    }

    fn is_idle(&self, entry: &SessionEntry) -> bool {
        entry.last_seen.elapsed() >= self.idle_timeout
    }
}

/// Session id from the request's `Cookie` headers.
pub fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value binding the browser to `id`.
pub fn session_cookie(id: &str, secure: bool) -> String {
    let cookie = format!("{SESSION_COOKIE_NAME}={id}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        format!("{cookie}; Secure")
    } else {
        cookie
    }
}

/// A request whose cookie maps to a signed-in session.
///
/// Extracting it fails with [`ApiFailure::Unauthorized`] otherwise, before
/// any other extractor or handler code runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub id: String,
    pub credentials: CredentialContext,
}

impl FromRequestParts<SharedContext> for AuthenticatedSession {
    type Rejection = ApiFailure;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedContext,
    ) -> Result<Self, Self::Rejection> {
        let id = session_id(&parts.headers).ok_or(ApiFailure::Unauthorized)?;
        let credentials = state.sessions.credentials(&id).ok_or(ApiFailure::Unauthorized)?;
        Ok(Self { id, credentials })
    }
}
