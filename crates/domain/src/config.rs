//! Configuration structures
//!
//! Loaded by `hostatlas-infra::config::loader` from the environment or from a
//! TOML/JSON file. Every section has defaults so partial files are accepted.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SESSION_IDLE_SECS, DEFAULT_USER_AGENT,
};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub remote: RemoteConfig,
}

/// Web server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the dashboard listens on
    pub bind_addr: String,
    /// Base URL pre-filled on the login page when the session has none
    pub default_base_url: Option<String>,
    /// Sessions unused for this many seconds are forgotten, credentials
    /// included
    pub session_idle_secs: u64,
    /// Mark the session cookie `Secure`; enable when served over HTTPS
    pub secure_cookies: bool,
}

impl ServerConfig {
    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs.max(1))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            default_base_url: None,
            session_idle_secs: DEFAULT_SESSION_IDLE_SECS,
            secure_cookies: false,
        }
    }
}

/// Certificate verification policy for calls to the remote API.
///
/// Controller deployments frequently run with self-signed certificates.
/// Skipping verification must be requested explicitly; it is never the
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsPolicy {
    /// Validate server certificates against the system roots.
    #[default]
    Verify,
    /// Accept any certificate, including self-signed and expired ones.
    AcceptInvalidCerts,
}

impl TlsPolicy {
    pub fn accepts_invalid_certs(self) -> bool {
        matches!(self, Self::AcceptInvalidCerts)
    }
}

/// Remote API client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    pub tls: TlsPolicy,
    pub user_agent: String,
}

impl RemoteConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            tls: TlsPolicy::Verify,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
