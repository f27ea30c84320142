use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use tones_backend::config::AppConfig;
use tones_backend::{routes, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so its values feed the env-backed flags
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();
    telemetry::init(config.log_format);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tones-backend starting");

    let app = routes::build_router(&config)?;
    if let Some(prefix) = config.mount_prefix()? {
        tracing::info!(prefix = %prefix, "routes also mounted under prefix");
    }

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    server::serve(listener, app, server::shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}
