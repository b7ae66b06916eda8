//! Configuration settings structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_BASE_URL;
use crate::config::error::ConfigError;

// ============================================================================
// Default value functions
// ============================================================================

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

// ============================================================================
// HTTP Configuration
// ============================================================================

/// Timeouts applied by the reqwest transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl HttpSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "http.timeout_seconds",
                "Request timeout must be positive",
            ));
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout_seconds",
                "Connect timeout must be positive",
            ));
        }

        Ok(())
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root settings structure
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Bearer token; empty when unset so the send-time check reports it
    #[serde(default)]
    pub api_token: String,

    /// API root, the send path is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub http: HttpSettings,
}

impl Settings {
    /// Validate all configuration sections
    ///
    /// The API token is deliberately not checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::validation(
                "base_url",
                "Base URL cannot be empty",
            ));
        }

        self.http.validate()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: default_base_url(),
            http: HttpSettings::default(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.api_token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("Settings")
            .field("api_token", &token)
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .finish()
    }
}
