//! Pushinator API client.

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::config::Settings;
use crate::error::{PushinatorError, PushinatorResult, TransportError};
use crate::models::Notification;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};

/// Production API root used unless overridden with [`PushinatorClient::set_base_url`]
pub const DEFAULT_BASE_URL: &str = "https://api.pushinator.com/api/v2";

/// Path appended verbatim to the base URL
pub const SEND_NOTIFICATION_PATH: &str = "/notifications/send";

/// Client for the Pushinator notification API
///
/// Holds the bearer token, the API base URL and a shared
/// [`HttpTransport`]. The client keeps no per-call state, so one instance
/// can serve any number of concurrent [`send_notification`] calls through
/// `&self` or an `Arc`. Reconfiguration needs `&mut self`.
///
/// # Example
/// ```no_run
/// use pushinator::PushinatorClient;
///
/// # async fn run() -> pushinator::PushinatorResult<()> {
/// let client = PushinatorClient::new("my-api-token");
/// client.send_notification("channel-123", "Deploy finished").await?;
/// # Ok(())
/// # }
/// ```
///
/// [`send_notification`]: PushinatorClient::send_notification
#[derive(Clone)]
pub struct PushinatorClient {
    token: String,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl PushinatorClient {
    /// Creates a client for the production API using the shared HTTP client.
    ///
    /// The token is stored as given; an empty token is only reported when
    /// a notification is sent.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_transport(token, Arc::new(ReqwestTransport::shared()))
    }

    /// Creates a client that performs requests through `transport`.
    pub fn with_transport(token: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport,
        }
    }

    /// Creates a client from loaded settings
    ///
    /// Uses a dedicated reqwest client carrying the configured timeouts.
    ///
    /// # Errors
    /// Returns a transport error if the HTTP client cannot be built.
    pub fn from_settings(settings: &Settings) -> PushinatorResult<Self> {
        let transport = ReqwestTransport::from_settings(&settings.http)?;
        let mut client = Self::with_transport(settings.api_token.clone(), Arc::new(transport));
        client.set_base_url(settings.base_url.clone());
        Ok(client)
    }

    /// Replaces the base URL used by subsequent calls. Not validated.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Replaces the HTTP transport used by subsequent calls.
    pub fn set_transport(&mut self, transport: Arc<dyn HttpTransport>) {
        self.transport = transport;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Delivers `message` to the channel `channel_id`
    ///
    /// Inputs are checked in order (token, channel ID, message) before any
    /// network I/O. On success the response body is discarded.
    ///
    /// # Errors
    /// - [`PushinatorError::Validation`] if the token, channel ID or message is empty
    /// - [`PushinatorError::Transport`] if the request could not be completed
    /// - [`PushinatorError::Api`] if the API answered with a status other than 200
    pub async fn send_notification(&self, channel_id: &str, message: &str) -> PushinatorResult<()> {
        self.validate(channel_id, message)?;

        let body = serde_json::to_vec(&Notification::new(channel_id, message))?;
        let request = HttpRequest {
            method: Method::POST,
            url: self.send_url(),
            headers: self.headers()?,
            body,
        };

        tracing::debug!(url = %request.url, channel_id, "Sending notification");
        let response = self.transport.execute(request).await?;

        if response.status != reqwest::StatusCode::OK {
            tracing::debug!(status = response.status.as_u16(), channel_id, "Notification rejected");
            return Err(PushinatorError::Api {
                status: response.status,
                status_line: response.status_line(),
            });
        }

        tracing::debug!(channel_id, "Notification sent");
        Ok(())
    }

    fn validate(&self, channel_id: &str, message: &str) -> PushinatorResult<()> {
        if self.token.is_empty() {
            return Err(PushinatorError::validation("token", "API token is required"));
        }
        if channel_id.is_empty() {
            return Err(PushinatorError::validation(
                "channel_id",
                "channel ID is required",
            ));
        }
        if message.is_empty() {
            return Err(PushinatorError::validation("message", "message is required"));
        }
        Ok(())
    }

    fn send_url(&self) -> String {
        format!("{}{}", self.base_url, SEND_NOTIFICATION_PATH)
    }

    fn headers(&self) -> Result<HeaderMap, TransportError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| anyhow::anyhow!("invalid Authorization header value: {e}"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

impl fmt::Debug for PushinatorClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushinatorClient")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
