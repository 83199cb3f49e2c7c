//! Application context - shared state handed to every route handler

pub mod session;

use std::sync::Arc;

use hostatlas_core::InventoryApi;
use hostatlas_domain::{Config, CredentialContext, Result};
use hostatlas_infra::AwxInventoryApi;

pub use session::{AuthenticatedSession, SessionStore};

/// Shared handle used as axum router state.
pub type SharedContext = Arc<AppContext>;

/// Application context - configuration plus live sessions.
///
/// Remote clients are not stored here: each request builds its own from the
/// session's [`CredentialContext`].
pub struct AppContext {
    pub config: Config,
    pub sessions: SessionStore,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.server.session_idle_timeout());
        Self { config, sessions }
    }

    pub fn shared(config: Config) -> SharedContext {
        Arc::new(Self::new(config))
    }

    /// Inventory API bound to one session's credentials.
    ///
    /// # Errors
    /// Returns `HostAtlasError::Config` if the HTTP client cannot be built
    /// from the remote settings.
    pub fn inventory_api(&self, credentials: CredentialContext) -> Result<Arc<dyn InventoryApi>> {
        let api = AwxInventoryApi::connect(credentials, &self.config.remote)?;
        Ok(Arc::new(api))
    }

    /// Base URL offered on the login page: the session's last successful
    /// login first, then the configured default.
    pub fn suggested_base_url(&self, session_id: Option<&str>) -> Option<String> {
        session_id
            .and_then(|id| self.sessions.last_base_url(id))
            .or_else(|| self.config.server.default_base_url.clone())
    }
}
