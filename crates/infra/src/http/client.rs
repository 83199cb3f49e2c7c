use std::time::Duration;

use hostatlas_domain::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use hostatlas_domain::{HostAtlasError, RemoteConfig, TlsPolicy};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// HTTP client with an explicit timeout and certificate policy.
///
/// Each request is sent exactly once; failures are reported to the caller,
/// which decides whether they abort the operation.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    timeout: Duration,
    tls_policy: TlsPolicy,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, HostAtlasError> {
        Self::builder().build()
    }

    /// Build a client from the remote section of the application config.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, HostAtlasError> {
        Self::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .tls_policy(config.tls)
            .build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder once.
    ///
    /// Any received response is returned regardless of status; transport
    /// failures (including timeouts) become `HostAtlasError::Connectivity`.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, HostAtlasError> {
        let request = builder.build().map_err(|err| HostAtlasError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %url, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn tls_policy(&self) -> TlsPolicy {
        self.tls_policy
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    tls_policy: TlsPolicy,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            tls_policy: TlsPolicy::Verify,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Certificate verification policy. Defaults to [`TlsPolicy::Verify`].
    pub fn tls_policy(mut self, policy: TlsPolicy) -> Self {
        self.tls_policy = policy;
        self
    }

    pub fn build(self) -> Result<HttpClient, HostAtlasError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if self.tls_policy.accepts_invalid_certs() {
            warn!("TLS certificate verification disabled for remote API calls");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|err| {
            HostAtlasError::Config(format!("Failed to build HTTP client: {err}"))
        })?;

        Ok(HttpClient { client, timeout: self.timeout, tls_policy: self.tls_policy })
    }
}
