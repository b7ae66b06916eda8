//! Configuration loader
//!
//! Collects `PUSHINATOR_*` variables with the `config` crate and
//! deserializes them into [`Settings`].

use config::{Config, Environment, Map};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable prefix for configuration values
const ENV_PREFIX: &str = "PUSHINATOR";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Loads [`Settings`] from environment variables
///
/// Examples:
/// - `PUSHINATOR_API_TOKEN` -> `api_token`
/// - `PUSHINATOR_HTTP__TIMEOUT_SECONDS` -> `http.timeout_seconds`
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Replaces the process environment when set
    vars: Option<Map<String, String>>,
}

impl ConfigLoader {
    /// Loader reading the process environment
    pub fn new() -> Self {
        Self { vars: None }
    }

    /// Loader reading the given variables instead of the process environment
    pub fn with_vars(vars: Map<String, String>) -> Self {
        Self { vars: Some(vars) }
    }

    /// Load and validate settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a value cannot be converted to its field type
    /// - validation fails (empty base URL, zero timeout)
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .source(self.vars.clone()),
            )
            .build()
            .map_err(ConfigError::from)
    }
}
