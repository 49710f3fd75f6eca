use std::future::pending;

use tokio::signal;
use tracing::{error, warn};

/// Resolve once the process is asked to stop (Ctrl+C or SIGTERM).
///
/// A signal source whose handler cannot be installed is logged and then
/// ignored; the other source still triggers shutdown.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Received Ctrl+C, shutting down Keycloak demo server"),
        _ = terminate => warn!("Received SIGTERM, shutting down Keycloak demo server"),
    }
}
