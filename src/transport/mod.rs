//! HTTP-execution capability used by the client.
//!
//! The client never talks to the network directly. It hands a fully built
//! [`HttpRequest`] to an [`HttpTransport`] and interprets the returned
//! [`HttpResponse`]. The default implementation is [`ReqwestTransport`];
//! tests and embedders can supply their own.

mod client;

pub use client::{HTTP_CLIENT, ReqwestTransport};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

use crate::error::TransportError;

/// A request ready to be sent
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Status and body of a completed exchange
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    /// Reason phrase sent by the server, when the transport knows it
    pub reason: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self {
            status,
            reason: None,
            body,
        }
    }

    /// Attaches the server's reason phrase.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Status line in the `"400 Bad Request"` form.
    ///
    /// Uses the server's reason phrase when known, then the canonical one,
    /// then the bare number.
    pub fn status_line(&self) -> String {
        let reason = self
            .reason
            .as_deref()
            .filter(|r| !r.is_empty())
            .or_else(|| self.status.canonical_reason());

        match reason {
            Some(reason) => format!("{} {}", self.status.as_u16(), reason),
            None => self.status.as_str().to_string(),
        }
    }
}

/// Trait for anything that can perform one HTTP exchange.
///
/// Implementations must be safe to share across tasks; the client holds
/// them behind an `Arc` and may issue concurrent calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the response, or a transport-level failure.
    ///
    /// Any status code, including 4xx and 5xx, is a successful exchange.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
