//! Consents Server — application entry point.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("consents=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting consents server...");

    // TODO: Load configuration
    // TODO: Initialize consent and log stores
    // TODO: Wire the HTTP transport to the lifecycle service

    tracing::info!("Consents server stopped.");
}
