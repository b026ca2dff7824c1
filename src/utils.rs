//! Utility functions.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

/// Bind the HTTP listener.
pub async fn bind_listener(addr: SocketAddr) -> crate::Result<TcpListener> {
    Ok(TcpListener::bind(addr).await?)
}

/// Resolve when the process receives Ctrl-C or, on Unix, SIGTERM.
///
/// Used with `axum::serve(..).with_graceful_shutdown(..)`.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
