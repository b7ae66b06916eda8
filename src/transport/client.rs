use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::config::HttpSettings;
use crate::error::TransportError;

const USER_AGENT: &str = concat!("pushinator-rs/", env!("CARGO_PKG_VERSION"));

/// Process-wide HTTP client behind [`ReqwestTransport::shared`]
///
/// Initialized lazily on first access and reused by every client built
/// with [`PushinatorClient::new`](crate::PushinatorClient::new), so they
/// share one connection pool.
///
/// # Features
/// - **Timeouts**: 30s request timeout, 10s connect timeout
/// - **Connection pooling**: up to 10 idle connections per host, 90s idle timeout
/// - **TLS**: Rustls, no OpenSSL dependency
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    build_client(&HttpSettings::default()).expect("Failed to build HTTP client")
});

fn build_client(settings: &HttpSettings) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(settings.timeout_seconds))
        .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(USER_AGENT)
        .build()
}

/// [`HttpTransport`] backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps a caller-configured client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Transport over the shared [`HTTP_CLIENT`].
    pub fn shared() -> Self {
        Self::new(HTTP_CLIENT.clone())
    }

    /// Builds a dedicated client with the configured timeouts
    ///
    /// # Errors
    /// Returns `TransportError::Http` if reqwest cannot initialize the client
    /// (for example when the TLS backend fails to load).
    pub fn from_settings(settings: &HttpSettings) -> Result<Self, TransportError> {
        Ok(Self::new(build_client(settings)?))
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::shared()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        // hyper only records the phrase when it differs from the canonical one
        let reason = response
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
        let body = response.bytes().await?;

        let response = HttpResponse::new(status, body.to_vec());
        Ok(match reason {
            Some(reason) => response.with_reason(reason),
            None => response,
        })
    }
}
