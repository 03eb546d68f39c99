//! Structured logging setup
//!
//! Installs a `tracing` subscriber. `RUST_LOG` takes precedence over the
//! configured level; JSON output emits one event per line.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::ParseError,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// Logging setup errors
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Configured level is not a valid filter directive
    #[error("Invalid log level: {0}")]
    InvalidLevel(#[from] ParseError),

    /// A global subscriber is already installed
    #[error("{0}")]
    Init(#[from] TryInitError),
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive (default: "info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Check that `level` is a level or a list of `target=level` directives.
    ///
    /// A bare word is read by `EnvFilter` as a target name, so each
    /// directive's level is checked separately to catch misspellings.
    pub fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("log.level must not be empty".to_string());
        }
        for directive in self.level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let level = directive.rsplit_once('=').map_or(directive, |(_, level)| level);
            level.parse::<LevelFilter>().map_err(|_| {
                format!("log.level: invalid level '{}' in '{}'", level, self.level)
            })?;
        }
        EnvFilter::try_new(&self.level)
            .map_err(|e| format!("log.level '{}': {}", self.level, e))?;
        Ok(())
    }

    /// Filter from `RUST_LOG`, or from the configured level when unset
    pub fn env_filter(&self) -> Result<EnvFilter, ParseError> {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&self.level))
    }
}

/// Install the global subscriber.
///
/// Fails on an unparsable level or if a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = config.env_filter()?;

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .try_init()?;
    }

    tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
    Ok(())
}
