//! CLI module for the `pushinator` binary
//!
//! - Argument parsing with clap
//! - Settings overrides from command-line flags
//! - Command execution

pub mod executor;
pub mod parser;

pub use executor::{apply_overrides, execute_command};
pub use parser::{Cli, Commands};
