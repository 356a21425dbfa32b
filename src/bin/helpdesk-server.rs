//! # Helpdesk Server
//!
//! Standalone HTTP server for the request lifecycle API.
//!
//! ## Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin helpdesk-server
//!
//! # Production logging, explicit database and legacy overwrite semantics
//! HELPDESK_ENV=production \
//! DATABASE_URL=postgresql://helpdesk:secret@db/helpdesk \
//! HELPDESK__LIFECYCLE__STRICT_TRANSITIONS=false \
//!   cargo run --release --bin helpdesk-server
//! ```

use anyhow::Context;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use helpdesk_core::config::ConfigManager;
use helpdesk_core::database::{DatabaseConnection, PgStoreGateway};
use helpdesk_core::logging;
use helpdesk_core::web::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging first
    logging::init_structured_logging(&logging::get_environment());

    info!("🚀 Starting Helpdesk Server...");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));
    info!(
        "   Build Mode: {}",
        if cfg!(debug_assertions) {
            "Debug"
        } else {
            "Release"
        }
    );

    let manager = ConfigManager::load().context("Failed to load configuration")?;
    if let Some(path) = manager.source_file() {
        info!("   Config File: {}", path.display());
    }
    let config = manager.into_config();
    info!("   Environment: {}", config.environment);

    let db = DatabaseConnection::connect(&config.database)
        .await
        .context("Failed to connect to the database")?;
    let gateway = Arc::new(PgStoreGateway::new(db.pool().clone()));

    let app = create_app(AppState::from_config(&config, gateway));
    let address = config.web.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("🎉 Helpdesk Server listening on {address}");
    info!("   Press Ctrl+C to shutdown gracefully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("🛑 HTTP server stopped, closing database pool...");
    db.close().await;

    info!("👋 Helpdesk Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
