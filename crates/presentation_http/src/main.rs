//! Voice relay HTTP server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use infrastructure::{AppConfig, init_tracing};
use presentation_http::{create_app, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading any environment
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load();
    let json_logs = loaded.as_ref().is_ok_and(|c| c.server.json_logs());
    init_tracing(json_logs);

    info!("Voice relay v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.completion.model,
        voices = ?config.speech.synthesis.voice_candidates(),
        "Configuration loaded"
    );

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    let state = AppState::from_config(config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize services: {e}"))?;

    let app = create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for SIGINT/SIGTERM, then bound how long in-flight requests may drain
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!("Shutdown timeout elapsed, exiting with open connections");
        std::process::exit(1);
    });
}
