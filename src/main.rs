use std::process::ExitCode;

use clap::Parser;
use pushinator::cli::{Cli, execute_command};
use pushinator::config::ConfigLoader;
use pushinator::logger::init_logger;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logger(&cli.logger_config()) {
        eprintln!("Logger initialization error: {}", e);
        return ExitCode::FAILURE;
    }

    let settings = match ConfigLoader::new().load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?settings, "Configuration loaded");

    match execute_command(&cli, settings).await {
        Ok(()) => {
            println!("Notification sent");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
