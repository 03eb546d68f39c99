//! CLI module for the student service
//!
//! Provides command-line interface for:
//! - serve: Open the store and serve HTTP until shutdown
//! - ping: Check store reachability

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{ping, run, run_command, serve};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
