//! CLI command implementations
//!
//! Boot order for `serve`: load config, install logging, open the store,
//! ping it, serve HTTP until a shutdown signal, close the store.

use std::path::Path;

use serde_json::json;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::{self, StoreBackend};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            store,
            port,
        } => serve(config.as_deref(), store, port),
        Command::Ping { config } => ping(config.as_deref()),
    }
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Serve the HTTP API
pub fn serve(
    config_path: Option<&Path>,
    backend: Option<StoreBackend>,
    port: Option<u16>,
) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    config.apply_cli_overrides(backend, port);
    config.validate()?;

    init_logging(&config.log)
        .map_err(|e| CliError::boot_failed(format!("Failed to install logger: {}", e)))?;

    runtime()?.block_on(async move {
        let store = store::open(&config.store).await?;
        tracing::info!(
            backend = ?config.store.backend,
            database = %config.store.database,
            collection = %config.store.collection,
            "Store opened"
        );

        // An unreachable store does not stop boot; requests will surface the failure
        match store.ping().await {
            Ok(()) => tracing::info!("Store ping succeeded"),
            Err(e) => tracing::warn!(error = %e, "Store ping failed"),
        }

        let server = HttpServer::new(config.http.clone(), store.clone());
        let served = server.start(shutdown_signal()).await;

        store.close().await;
        tracing::info!("Store closed");

        served.map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Ping the configured store and report the result on stdout
pub fn ping(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    config.validate()?;

    runtime()?.block_on(async move {
        let store = store::open(&config.store).await?;
        let result = store.ping().await;
        store.close().await;
        result?;

        println!(
            "{}",
            json!({
                "ping": "ok",
                "database": config.store.database,
                "collection": config.store.collection,
            })
        );
        Ok(())
    })
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
