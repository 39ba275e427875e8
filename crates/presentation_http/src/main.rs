//! evoreply HTTP Server
//!
//! Main entry point for the webhook server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{AutoReplyService, MessageSender};
use infrastructure::{AppConfig, EvolutionMessagingAdapter, init_tracing};
use integration_evolution::EvolutionClient;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env, config.toml, environment)
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(config.server.log_format, &config.server.log_filter)?;

    info!("📨 evoreply v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        log_format = %config.server.log_format,
        evolution = ?config.evolution,
        "Configuration loaded"
    );

    // Initialize messaging adapter
    let adapter = EvolutionMessagingAdapter::new(config.evolution.to_client_config())
        .context("Invalid Evolution API configuration")?;

    spawn_connection_check(adapter.client().clone());

    let sender = MessageSender::new(Arc::new(adapter));
    let state = AppState::new(AutoReplyService::new(sender), config.clone());

    // Build router
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}{}", addr, routes::MESSAGES_UPSERT_PATH);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Log whether the Evolution instance is connected without delaying startup
fn spawn_connection_check(client: EvolutionClient) {
    tokio::spawn(async move {
        match client.connection_state().await {
            Ok(state) if state.is_open() => {
                info!(instance = %client.instance_name(), "Evolution instance connected");
            },
            Ok(state) => {
                warn!(
                    instance = %client.instance_name(),
                    state = %state.instance.state,
                    "Evolution instance is not connected, replies will fail until it is"
                );
            },
            Err(e) => {
                warn!(error = %e, "Could not reach the Evolution API");
            },
        }
    });
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!("Shutdown timeout elapsed, forcing exit");
        std::process::exit(1);
    });
}
