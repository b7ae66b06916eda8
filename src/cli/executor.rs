//! Command executor for dispatching CLI commands

use super::parser::{Cli, Commands};
use crate::client::PushinatorClient;
use crate::config::Settings;
use crate::error::PushinatorResult;

/// Apply command-line overrides on top of the loaded settings
pub fn apply_overrides(cli: &Cli, mut settings: Settings) -> Settings {
    match &cli.command {
        Commands::Send {
            token, base_url, ..
        } => {
            if let Some(token) = token {
                settings.api_token = token.clone();
            }
            if let Some(base_url) = base_url {
                settings.base_url = base_url.clone();
            }
        }
    }
    settings
}

/// Execute a CLI command with the given settings
///
/// # Errors
/// Returns any validation, transport or API error from the client.
pub async fn execute_command(cli: &Cli, settings: Settings) -> PushinatorResult<()> {
    let settings = apply_overrides(cli, settings);

    match &cli.command {
        Commands::Send {
            channel, message, ..
        } => {
            let client = PushinatorClient::from_settings(&settings)?;
            client.send_notification(channel, message).await?;
            tracing::info!(channel_id = %channel, "Notification delivered");
            Ok(())
        }
    }
}
