//! ChartPDF server - main entry point.

use anyhow::{Context, Result};
use chartpdf_common::init_logging;
use chartpdf_config::{ConfigLoader, CONFIG_PATH_ENV};
use chartpdf_server::{create_router, AppState};
use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Log level, overriding the configuration file
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ConfigLoader::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    let _log_guard = init_logging(&config.logging).context("Failed to initialise logging")?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting ChartPDF server");

    let address = config.server.bind_address();
    let state = AppState::new(config)
        .await
        .context("Failed to prepare application state")?;
    let app = create_router(state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(%address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("ChartPDF server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
