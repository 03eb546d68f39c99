//! Store configuration
//!
//! Which backend to open and how to reach MongoDB.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// MongoDB collection
    Mongo,
    /// Process-local map, lost on exit
    Memory,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend to open (default: mongo)
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,

    /// MongoDB connection string (default: "mongodb://localhost:27017")
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Database name (default: "cosmocloud")
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection name (default: "lib")
    #[serde(default = "default_collection")]
    pub collection: String,

    /// PEM bundle of trust anchors for TLS connections
    #[serde(default)]
    pub tls_ca_file: Option<PathBuf>,
}

fn default_backend() -> StoreBackend {
    StoreBackend::Mongo
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database() -> String {
    "cosmocloud".to_string()
}

fn default_collection() -> String {
    "lib".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            uri: default_uri(),
            database: default_database(),
            collection: default_collection(),
            tls_ca_file: None,
        }
    }
}

impl StoreConfig {
    /// In-memory store configuration
    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            ..Default::default()
        }
    }

    /// Check required fields, returning a description of the first problem
    pub fn validate(&self) -> Result<(), String> {
        if self.backend == StoreBackend::Mongo && self.uri.trim().is_empty() {
            return Err("store.uri must not be empty".to_string());
        }
        if self.database.trim().is_empty() {
            return Err("store.database must not be empty".to_string());
        }
        if self.collection.trim().is_empty() {
            return Err("store.collection must not be empty".to_string());
        }
        Ok(())
    }
}
