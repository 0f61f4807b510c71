//! HTTP transport for the metadata fetcher
//!
//! This module handles the network side of preview fetching, including:
//! - Building a reusable HTTP client with a proper user agent
//! - The `HttpFetch` capability the pipeline is parameterized over
//! - Error classification for transport failures

use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Configuration for the HTTP transport
///
/// There is no configuration file; callers construct this in code or take
/// the defaults. A preview card should resolve or fail quickly, so the
/// default timeouts are tight.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// User agent sent with each request
    pub user_agent: String,

    /// Total per-request timeout
    pub timeout: Duration,

    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("RichLinks/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Builds a reusable HTTP client for preview fetching
///
/// The client follows redirects with the transport default policy (up to 10
/// hops) since link-preview targets are commonly behind shorteners and CDNs.
/// It holds no per-request state and may be shared process-wide.
///
/// # Arguments
///
/// * `config` - The transport configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use richlinks::{build_http_client, FetcherConfig};
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// A fetched HTTP response, reduced to what the pipeline needs
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Final URL after redirects
    pub final_url: Url,

    /// HTTP status code
    pub status: u16,

    /// Response body as text
    pub body: String,
}

/// The HTTP capability the fetch pipeline runs against
///
/// The pipeline is written once against this trait; only the transport is
/// swappable. [`ReqwestFetcher`] is the production implementation, and tests
/// substitute stubs to exercise the pipeline without a network.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Issues a single GET for the given URL and reads the body as text
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}

/// Production transport backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Creates a fetcher with the given transport configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an already-built client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| classify_transport_error(url, e))?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport_error(&final_url, e))?;

        Ok(HttpResponse {
            final_url,
            status,
            body,
        })
    }
}

/// Classifies a transport failure into the fetch error taxonomy
///
/// Timeouts get their own kind so callers and logs can tell a slow host from
/// an unreachable one; everything else (DNS, connect, TLS, body read) is a
/// network error with the cause preserved.
fn classify_transport_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}
