//! HTTP client implementation.

use std::sync::Arc;
use std::time::Duration;

use inline_edit::Payload;
use reqwest::redirect::Policy;
use url::Url;

use crate::error::{NetworkError, Result};

/// Configuration for the HTTP client.
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Request timeout.
    pub timeout: Option<Duration>,
    /// Connect timeout.
    pub connect_timeout: Option<Duration>,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
    /// Whether to enable cookie storage.
    pub cookies_enabled: bool,
    /// Default user agent.
    pub user_agent: Option<String>,
    /// URL relative save endpoints are resolved against.
    pub base_url: Option<Url>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            max_redirects: 10,
            cookies_enabled: true,
            user_agent: Some(format!("InlineEdit/{} (Rust)", env!("CARGO_PKG_VERSION"))),
            base_url: None,
        }
    }
}

/// Builder for creating an HTTP client with custom configuration.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: HttpClientConfig,
}

impl HttpClientBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum number of redirects to follow.
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.max_redirects = max;
        self
    }

    /// Disable cookie storage.
    pub fn no_cookies(mut self) -> Self {
        self.config.cookies_enabled = false;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Resolve relative save endpoints (`/orders/save`) against `base`, the
    /// way a browser resolves them against the page.
    pub fn base_url(mut self, base: impl AsRef<str>) -> Result<Self> {
        self.config.base_url = Some(Url::parse(base.as_ref())?);
        Ok(self)
    }

    /// Build the HTTP client.
    pub fn build(self) -> Result<HttpClient> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        builder = builder.redirect(Policy::limited(self.config.max_redirects));

        if self.config.cookies_enabled {
            builder = builder.cookie_store(true);
        }

        if let Some(ref ua) = self.config.user_agent {
            builder = builder.user_agent(ua);
        }

        let client = builder.build()?;

        Ok(HttpClient {
            inner: Arc::new(HttpClientInner {
                client,
                config: self.config,
            }),
        })
    }
}

struct HttpClientInner {
    client: reqwest::Client,
    config: HttpClientConfig,
}

/// Posts row payloads and reads JSON answers.
///
/// The client is cheaply cloneable and thread-safe. Clones share the same
/// underlying connection pool and configuration.
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<HttpClientInner>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration.
    pub fn new() -> Result<Self> {
        HttpClientBuilder::new().build()
    }

    /// Create a builder for configuring a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Get the client's configuration.
    pub fn config(&self) -> &HttpClientConfig {
        &self.inner.config
    }

    /// Resolve an endpoint against the configured base URL.
    pub fn resolve(&self, endpoint: &str) -> Result<Url> {
        match &self.inner.config.base_url {
            Some(base) => Ok(base.join(endpoint)?),
            None => Ok(Url::parse(endpoint)?),
        }
    }

    /// POST `payload` form-urlencoded to `endpoint` and parse the answer as
    /// JSON.
    ///
    /// Statuses outside 2xx are errors, as is a body that is not JSON.
    pub async fn post_form(&self, endpoint: &str, payload: &Payload) -> Result<serde_json::Value> {
        let url = self.resolve(endpoint)?;
        tracing::debug!(target: "inline_edit_net::http", %url, fields = payload.len(), "POST");

        let response = self
            .inner
            .client
            .post(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .form(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(target: "inline_edit_net::http", %url, status = status.as_u16(), "error status");
            return Err(NetworkError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().map(str::to_string),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
