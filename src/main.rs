use std::net::SocketAddr;
use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use keycloak_openid::{Config, KeycloakAuthLayer, ServerConfig, build_router, utils};

/// Instance name used for the single activation this binary performs.
const INSTANCE_NAME: &str = "keycloak";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Keycloak OpenID demo v{}", env!("CARGO_PKG_VERSION"));

    match run().await {
        Ok(()) => ExitCode::from(exitcode::OK as u8),
        Err(exit_code) => ExitCode::from(exit_code as u8),
    }
}

/// Run the application, returning an exit code on error.
async fn run() -> Result<(), exitcode::ExitCode> {
    let server = ServerConfig::from_env().map_err(|e| {
        error!("Configuration error: {e}");
        exitcode::CONFIG
    })?;

    // Activation fails outright on any configuration problem
    let keycloak = KeycloakAuthLayer::new(Config::from_env(), INSTANCE_NAME).map_err(|e| {
        error!(kind = e.kind(), "Keycloak middleware activation failed: {e}");
        exitcode::CONFIG
    })?;
    info!(
        realm = keycloak.settings().realm(),
        issuer = %keycloak.settings().realm_url(),
        "Keycloak middleware ready"
    );

    let app = build_router(keycloak);

    let addr: SocketAddr = server.server_addr().parse().map_err(|e| {
        error!("Invalid server address: {e}");
        exitcode::CONFIG
    })?;
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind to {addr}: {e}");
        exitcode::UNAVAILABLE
    })?;

    info!("Server listening on http://{addr}");
    info!("  GET  /health    - Health check");
    info!("  GET  /provider  - Active Keycloak realm and endpoints");

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown_signal())
        .await
        .map_err(|e| {
            error!("Server error: {e}");
            exitcode::SOFTWARE
        })?;

    info!("Server shutdown complete");
    Ok(())
}
