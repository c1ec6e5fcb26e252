use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use weather_core::{Config, RequestProxy};

use crate::routes::app_router;
use crate::state::AppState;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

pub struct ServerConfig {
    pub bind_address: SocketAddr,
}

/// Build the proxy from `config` and serve until Ctrl+C or SIGTERM.
pub async fn serve(server: ServerConfig, config: &Config) -> anyhow::Result<()> {
    let proxy = RequestProxy::from_config(config).context("failed to configure upstream providers")?;
    let app = app_router(AppState::new(proxy));

    let listener = TcpListener::bind(server.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", server.bind_address))?;

    info!(address = %server.bind_address, "starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
