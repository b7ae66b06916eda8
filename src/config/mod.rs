//! Configuration for the Pushinator client
//!
//! Settings are read from `PUSHINATOR_*` environment variables only; there
//! are no configuration files. Every field except the API token has a
//! default.
//!
//! | Variable                                   | Setting                        |
//! |--------------------------------------------|--------------------------------|
//! | `PUSHINATOR_API_TOKEN`                     | `api_token`                    |
//! | `PUSHINATOR_BASE_URL`                      | `base_url`                     |
//! | `PUSHINATOR_HTTP__TIMEOUT_SECONDS`         | `http.timeout_seconds`         |
//! | `PUSHINATOR_HTTP__CONNECT_TIMEOUT_SECONDS` | `http.connect_timeout_seconds` |

pub mod error;
pub mod loader;
pub mod settings;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{HttpSettings, Settings};
