//! AWX remote API client
//!
//! Applies the session's credentials to every request, follows the
//! controller's `next` links, and decides which failures abort a listing.

use hostatlas_domain::{
    ConnectionCheckResult, CredentialContext, Credentials, HostAtlasError, PagedResult,
    RemoteConfig, Result,
};
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::paths;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Paged response envelope: `{results: [...], next: string|null}`.
#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
    #[serde(default)]
    next: Option<String>,
}

/// Authenticated GET access to one AWX controller.
///
/// The client owns a copy of the session's [`CredentialContext`] for its own
/// lifetime only; build one per request.
pub struct RemoteApiClient {
    http: HttpClient,
    context: CredentialContext,
}

impl RemoteApiClient {
    /// Create a client for `context` using the remote settings from config.
    ///
    /// # Errors
    /// Returns `HostAtlasError::Config` if the HTTP client cannot be built.
    pub fn new(context: CredentialContext, config: &RemoteConfig) -> Result<Self> {
        Ok(Self::with_http_client(context, HttpClient::from_config(config)?))
    }

    /// Create a client around an already configured [`HttpClient`].
    pub fn with_http_client(context: CredentialContext, http: HttpClient) -> Self {
        Self { http, context }
    }

    /// Probe `/api/v2/me/` with the configured credentials.
    ///
    /// Never fails: a non-200 status or a transport problem becomes
    /// [`ConnectionCheckResult::Failed`] with a readable reason.
    #[instrument(skip(self), fields(base_url = %self.context.base_url()))]
    pub async fn check_connection(&self) -> ConnectionCheckResult {
        let url = self.context.resolve(paths::ME);

        let response = match self.http.send(self.authorized_get(&url)).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "connection check failed");
                return ConnectionCheckResult::Failed(reason(err));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "connection check rejected");
            return ConnectionCheckResult::Failed(format!(
                "remote API returned status {}",
                status.as_u16()
            ));
        }

        match response.json::<Value>().await {
            Ok(identity) => {
                info!("connection check succeeded");
                ConnectionCheckResult::Ok(identity)
            }
            Err(err) => ConnectionCheckResult::Failed(reason(InfraError::from(err).into())),
        }
    }

    /// Fetch every page of a listing, starting at `path`.
    ///
    /// `query` is sent with the first request only; later pages are fetched
    /// from the server's `next` link as given. Relative links are resolved
    /// against the base URL.
    ///
    /// A failure on the first page is returned as an error. A failure on any
    /// later page ends the traversal and the results gathered so far are
    /// returned with [`PagedResult::is_complete`] set to `false`.
    ///
    /// # Errors
    /// `HostAtlasError::UnexpectedStatus` for a non-200 first page,
    /// `HostAtlasError::Connectivity` for a transport or decoding failure on
    /// the first page.
    #[instrument(skip(self, query), fields(base_url = %self.context.base_url()))]
    pub async fn fetch_all_pages<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<PagedResult<T>>
    where
        T: DeserializeOwned,
    {
        let mut accumulated = PagedResult::new();
        let mut next_url = Some(path.to_string());
        let mut page_number = 1_usize;

        while let Some(url) = next_url.take() {
            let url = self.context.resolve(&url);
            let is_first_page = page_number == 1;
            let page_query = if is_first_page { query } else { &[] };

            match self.fetch_page::<T>(&url, page_query).await {
                Ok(page) => {
                    debug!(page = page_number, items = page.results.len(), "fetched page");
                    accumulated.extend_page(page.results);
                    next_url = page.next.filter(|next| !next.is_empty());
                }
                Err(err) if is_first_page => return Err(err),
                Err(err) => {
                    warn!(
                        page = page_number,
                        fetched = accumulated.len(),
                        error = %err,
                        "pagination stopped early; returning partial results"
                    );
                    accumulated.mark_truncated();
                    break;
                }
            }

            page_number += 1;
        }

        Ok(accumulated)
    }

    /// Single GET that treats every non-200 status as "nothing there".
    ///
    /// # Errors
    /// `HostAtlasError::Connectivity` for transport failures or a 200 response
    /// whose body is not JSON.
    #[instrument(skip(self), fields(base_url = %self.context.base_url()))]
    pub async fn get_optional_json(&self, path: &str) -> Result<Option<Value>> {
        let url = self.context.resolve(path);
        let response = self.http.send(self.authorized_get(&url)).await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "treating non-200 response as absent");
            return Ok(None);
        }

        let body = response.bytes().await.map_err(InfraError::from)?;
        let value = serde_json::from_slice(&body).map_err(InfraError::from)?;
        Ok(Some(value))
    }

    async fn fetch_page<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let mut request = self.authorized_get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = self.http.send(request).await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(HostAtlasError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(InfraError::from)?;
        let page = serde_json::from_slice(&body).map_err(InfraError::from)?;
        Ok(page)
    }

    fn authorized_get(&self, url: &str) -> RequestBuilder {
        let request = self.http.request(Method::GET, url).header(ACCEPT, "application/json");

        match self.context.credentials() {
            Credentials::Token(token) => request.bearer_auth(token),
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Credentials::Anonymous => request,
        }
    }
}

fn reason(err: HostAtlasError) -> String {
    match err {
        HostAtlasError::Connectivity(message) | HostAtlasError::Config(message) => message,
        other => other.to_string(),
    }
}
