//! # scangated — scangate daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use scangate_adapter_http_axum::state::AppState;
use scangate_adapter_storage_sqlite_sqlx::{Config as StorageConfig, SqliteScannerRepository};
use scangate_app::services::scanner_validation::ScannerValidationService;
use scangate_domain::policy::FallbackPolicy;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    tracing::info!(bind = %config.bind_addr(), "starting scangated");

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Repositories
    let scanner_repo = SqliteScannerRepository::new(db.pool().clone());

    // Services
    let scanner_validation =
        ScannerValidationService::new(scanner_repo, config.validation.fallback);
    if scanner_validation.policy() == FallbackPolicy::Disabled {
        tracing::info!("naming-convention fallback disabled, only registered scanners accepted");
    } else {
        tracing::warn!(
            fallback = %scanner_validation.policy(),
            "naming-convention fallback enabled, unregistered scanners may be accepted"
        );
    }

    // HTTP
    let state = AppState::new(scanner_validation);
    let app = scangate_adapter_http_axum::router::build(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(address = %listener.local_addr()?, "scangated listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("scangated stopped");
    Ok(())
}

/// Resolve once SIGINT (Ctrl+C) or, on Unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
