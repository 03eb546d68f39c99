//! CLI argument definitions using clap
//!
//! Commands:
//! - registrar serve [--config <path>] [--store <backend>] [--port <port>]
//! - registrar ping [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::StoreBackend;

/// Registrar - student record service over MongoDB
#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the store and serve the HTTP API until interrupted
    Serve {
        /// Path to configuration file (default: ./registrar.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured store backend
        #[arg(long, value_enum)]
        store: Option<StoreBackend>,

        /// Override the configured HTTP port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Check that the configured store is reachable and exit
    Ping {
        /// Path to configuration file (default: ./registrar.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
