//! Wire payloads for the Pushinator API.

use serde::Serialize;

/// Body of `POST /notifications/send`.
///
/// Built fresh for every call and serialized as
/// `{"channel_id": "...", "content": "..."}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Notification<'a> {
    pub channel_id: &'a str,
    #[serde(rename = "content")]
    pub message: &'a str,
}

impl<'a> Notification<'a> {
    pub fn new(channel_id: &'a str, message: &'a str) -> Self {
        Self {
            channel_id,
            message,
        }
    }
}
