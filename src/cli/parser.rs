//! CLI argument parsing with clap

use clap::{Parser, Subcommand};

use crate::logger::LoggerConfig;

/// Send notifications through the Pushinator API
#[derive(Parser, Debug)]
#[command(name = "pushinator")]
#[command(about = "Send notifications through the Pushinator API")]
#[command(long_about = "
Sends a single notification to a Pushinator channel.

The API token and other settings are read from PUSHINATOR_* environment
variables and can be overridden on the command line.

EXAMPLES:
    # Send using PUSHINATOR_API_TOKEN from the environment
    pushinator send --channel channel-123 --message \"Deploy finished\"

    # Override the token and target a local server
    pushinator send -c channel-123 -m hi --token abc --base-url http://localhost:4000
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one notification to a channel
    Send {
        /// Destination channel ID
        #[arg(short, long, value_name = "ID")]
        channel: String,

        /// Notification content
        #[arg(short, long, value_name = "TEXT")]
        message: String,

        /// API token, overrides PUSHINATOR_API_TOKEN
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,

        /// API root, overrides PUSHINATOR_BASE_URL
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
}

impl Cli {
    /// Logger configuration implied by --verbose / --quiet
    pub fn logger_config(&self) -> LoggerConfig {
        let level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };
        LoggerConfig::new(level)
    }
}
