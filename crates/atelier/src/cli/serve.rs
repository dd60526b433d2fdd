//! Gateway command handler.

use atelier_server::{AppState, GatewayConfig, create_router};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

/// Handle the `serve` command.
#[tracing::instrument(skip_all)]
pub async fn handle_serve_command(port: Option<u16>) -> anyhow::Result<()> {
    info!("Starting Atelier gateway");

    let config = GatewayConfig::from_env()?;
    let port = port.unwrap_or(*config.port());
    if config.store_uri().is_some() {
        info!("Persistent store configured; no request path uses it");
    }
    info!(
        ollama_host = %config.ollama_host(),
        text_model = %config.text_model(),
        image_model = %config.image_model(),
        audio_model = %config.audio_model(),
        "Model runtime configured"
    );

    let state = AppState::from_config(&config).await?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        },
    }
}
