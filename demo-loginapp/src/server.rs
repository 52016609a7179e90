use axum::Router;
use axum_server::Handle;
use std::{net::SocketAddr, time::Duration};

use crate::config::SHUTDOWN_GRACE_SECS;

pub(crate) async fn serve(port: u16, app: Router) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let handle = Handle::new();
    tokio::spawn(shutdown_signal(handle.clone()));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM, then stops accepting connections and gives
/// in-flight requests `SHUTDOWN_GRACE_SECS` to finish.
async fn shutdown_signal(handle: Handle) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!(
        "Shutdown signal received, draining for up to {}s",
        *SHUTDOWN_GRACE_SECS
    );
    handle.graceful_shutdown(Some(Duration::from_secs(*SHUTDOWN_GRACE_SECS)));
}
