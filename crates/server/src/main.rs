mod api;
mod bootstrap;
mod health;

use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use gavel_core::config::{AppConfig, CorsConfig, LoadOptions, LogFormat};
use tower_http::cors::{Any, CorsLayer};

fn init_logging(config: &AppConfig) {
    let level = config.logging.level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);

    match config.logging.format {
        LogFormat::Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(level).compact().init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(level).pretty().init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

async fn run() -> Result<()> {
    // Load config and initialize logging before any other work.
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config)?;

    let cors = cors_layer(&app.config.cors)?;
    let router = api::router(app.engine.clone()).merge(health::router(app.engine.clone())).layer(cors);

    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind `{address}`"))?;

    tracing::info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        allowed_origin = %app.config.cors.allowed_origin,
        "gavel-server listening"
    );

    let drain_window = Duration::from_secs(app.config.server.graceful_shutdown_secs);
    let server = axum::serve(listener, router).with_graceful_shutdown(wait_for_shutdown());

    tokio::select! {
        result = async move { server.await } => result?,
        () = drain_deadline(drain_window) => {
            tracing::warn!(
                event_name = "system.server.drain_timeout",
                correlation_id = "shutdown",
                "shutdown window elapsed before connections drained"
            );
        }
    }

    tracing::info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        "gavel-server stopped"
    );

    Ok(())
}

fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let origin = cors
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid cors.allowed_origin `{}`", cors.allowed_origin))?;

    Ok(CorsLayer::new().allow_origin(origin).allow_methods(Any).allow_headers(Any))
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(
            event_name = "system.server.signal_error",
            error = %error,
            "failed to listen for shutdown signal"
        );
    }
}

/// Arms only after the shutdown signal fires; bounds how long draining may take.
async fn drain_deadline(window: Duration) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tokio::time::sleep(window).await;
    } else {
        std::future::pending::<()>().await
    }
}
