//! Pushinator client
//!
//! Sends notifications to Pushinator channels with an authenticated
//! `POST /notifications/send`. The HTTP layer is an injectable
//! [`HttpTransport`]; by default a shared reqwest client is used.
//!
//! ```no_run
//! use pushinator::PushinatorClient;
//!
//! # async fn run() -> pushinator::PushinatorResult<()> {
//! let mut client = PushinatorClient::new("my-api-token");
//! client.set_base_url("http://localhost:4000");
//! client.send_notification("channel-123", "Hello, world!").await?;
//! # Ok(())
//! # }
//! ```

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod transport;

pub use client::{DEFAULT_BASE_URL, PushinatorClient, SEND_NOTIFICATION_PATH};
pub use error::{PushinatorError, PushinatorResult, TransportError};
pub use models::Notification;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
