//! Credential context types
//!
//! A [`CredentialContext`] is the value the session layer hands to the remote
//! client: a normalized base URL plus exactly one way of authenticating.

use std::fmt;

/// Which authentication scheme a context carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Token,
    Basic,
    None,
}

/// Credentials applied to every remote request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Sent as `Authorization: Bearer <token>`.
    Token(String),
    /// Sent as HTTP basic auth.
    Basic { username: String, password: String },
    /// Nothing is sent; the remote API is expected to reject the calls.
    Anonymous,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(<redacted>)"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Anonymous => f.write_str("Anonymous"),
        }
    }
}

/// Base URL and credentials for one remote controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialContext {
    base_url: String,
    credentials: Credentials,
}

impl CredentialContext {
    /// Build a context from raw login input.
    ///
    /// Trailing slashes are stripped from `base_url`. A non-empty token wins
    /// over username/password even when both are supplied; username and
    /// password are used only when both are non-empty. Anything else yields
    /// an anonymous context. Construction never fails.
    pub fn new(
        base_url: &str,
        token: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Self {
        fn non_empty(value: Option<&str>) -> Option<&str> {
            value.filter(|v| !v.is_empty())
        }

        let credentials = match (non_empty(token), non_empty(username), non_empty(password)) {
            (Some(token), _, _) => Credentials::Token(token.to_string()),
            (None, Some(username), Some(password)) => Credentials::Basic {
                username: username.to_string(),
                password: password.to_string(),
            },
            _ => Credentials::Anonymous,
        };

        Self { base_url: base_url.trim_end_matches('/').to_string(), credentials }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn auth_mode(&self) -> AuthMode {
        match self.credentials {
            Credentials::Token(_) => AuthMode::Token,
            Credentials::Basic { .. } => AuthMode::Basic,
            Credentials::Anonymous => AuthMode::None,
        }
    }

    /// Resolve a path or an absolute URL against the base URL.
    ///
    /// Values that already carry an `http://` or `https://` scheme are
    /// returned untouched.
    pub fn resolve(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else {
            format!("{}{}", self.base_url, path_or_url)
        }
    }
}
