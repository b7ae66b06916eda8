//! Error types for the Pushinator client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by an [`HttpTransport`](crate::transport::HttpTransport).
///
/// Both variants are transparent: the underlying failure text reaches the
/// caller unchanged.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Failure reported by the default reqwest-backed transport
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Failure reported by a caller-supplied transport
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Error returned by [`PushinatorClient::send_notification`](crate::PushinatorClient::send_notification).
///
/// The display strings are part of the public contract and must not change.
#[derive(Error, Debug)]
pub enum PushinatorError {
    /// A required input was empty; raised before any network I/O
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    /// Connection, DNS, TLS or timeout failure from the transport
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API answered with a status other than 200
    #[error("failed to send notification: {status_line}")]
    Api {
        status: StatusCode,
        status_line: String,
    },

    /// The notification payload could not be encoded as JSON
    #[error("failed to encode notification: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PushinatorError {
    pub(crate) fn validation(field: &'static str, message: &'static str) -> Self {
        Self::Validation { field, message }
    }

    /// True for the three local input checks.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status of a rejected request, if the API answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for Result with PushinatorError
pub type PushinatorResult<T> = Result<T, PushinatorError>;
