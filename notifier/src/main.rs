//! GitHub Notifier web server.
//!
//! Receives GitHub webhooks, verifies their signature, renders the supported
//! events and posts them to the configured Telegram channel topics.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ghnotify::{web, AppState, Config, Dispatcher, Notifier, TelegramTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("web_server_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        webhook_secret_configured = config.github_webhook_secret.is_some(),
        bot_token_configured = config.bot_token.is_some(),
        notify_channel_id = ?config.notify_channel_id,
        topics = ?config.topics,
        "config_loaded"
    );

    if config.github_webhook_secret.is_none() {
        warn!("github_webhook_secret_not_configured");
    }
    if config.notify_channel_id.is_none() {
        warn!("notify_channel_not_configured");
    }

    let bot_token = config
        .bot_token
        .as_deref()
        .context("BOT_TOKEN must be set")?;

    let transport = TelegramTransport::new(
        &config.telegram_api_url,
        bot_token,
        Duration::from_millis(config.request_timeout_ms),
    )
    .context("Failed to build Telegram HTTP client")?;

    let notifier = Notifier::new(
        Arc::new(transport),
        config.notify_channel_id,
        config.topics.clone(),
    );
    let state = AppState::new(config.clone(), Dispatcher::new(notifier));

    let app = web::router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, webhook_path = web::WEBHOOK_PATH, "web_server_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("web_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "ctrl_c_handler_install_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "sigterm_handler_install_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("web_server_shutting_down");
}
