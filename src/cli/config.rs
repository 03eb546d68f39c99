//! Service configuration file
//!
//! A JSON file with three optional sections. Missing sections and fields take
//! their defaults; `DB_URI` and `DB_TLS_CA_FILE` override the store section.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogConfig;
use crate::store::{StoreBackend, StoreConfig};

use super::errors::{CliError, CliResult};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "./registrar.json";

/// Environment variable overriding `store.uri`
pub const ENV_DB_URI: &str = "DB_URI";

/// Environment variable overriding `store.tls_ca_file`
pub const ENV_DB_TLS_CA_FILE: &str = "DB_TLS_CA_FILE";

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// With no explicit path, a missing file at [`DEFAULT_CONFIG_PATH`] yields
    /// defaults. An explicit path must exist. Environment overrides are
    /// applied; validation is left to the caller, after any CLI overrides.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Parse a configuration file without overrides or validation
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {:?}: {}", path, e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(uri) = lookup(ENV_DB_URI).filter(|v| !v.is_empty()) {
            self.store.uri = uri;
        }
        if let Some(ca_file) = lookup(ENV_DB_TLS_CA_FILE).filter(|v| !v.is_empty()) {
            self.store.tls_ca_file = Some(PathBuf::from(ca_file));
        }
    }

    /// Apply command-line overrides
    pub fn apply_cli_overrides(&mut self, backend: Option<StoreBackend>, port: Option<u16>) {
        if let Some(backend) = backend {
            self.store.backend = backend;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
    }

    /// Validate every section
    pub fn validate(&self) -> CliResult<()> {
        self.http.validate().map_err(CliError::config_error)?;
        self.store.validate().map_err(CliError::config_error)?;
        self.log.validate().map_err(CliError::config_error)?;
        Ok(())
    }
}
