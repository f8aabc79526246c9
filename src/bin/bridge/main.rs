use anyhow::{Context, Result};
use clap::Parser;
use object_store_bridge::{
    adapters::inbound::http::{create_router, AppState},
    app::{AppBuilder, StorageBackend, StorageConfig, DEFAULT_CONFIG_PATH},
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "object-store-bridge")]
#[command(about = "Publishes client events as objects in an S3-compatible store", long_about = None)]
struct Cli {
    /// Path to the JSON storage config
    #[arg(short, long, env = "BRIDGE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Server port to listen on
    #[arg(short, long, env = "BRIDGE_PORT", default_value = "3000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "BRIDGE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Storage backend type (s3 or memory)
    #[arg(long, env = "STORAGE_BACKEND", default_value = "s3")]
    storage_backend: String,

    /// Log level or filter directive, e.g. `debug` or `object_store_bridge=trace`
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn backend(&self) -> Result<StorageBackend> {
        match self.storage_backend.as_str() {
            "s3" | "minio" => Ok(StorageBackend::S3),
            "memory" => Ok(StorageBackend::InMemory),
            other => anyhow::bail!("Unknown storage backend: {}", other),
        }
    }

    fn init_logging(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("Invalid log level: {}", self.log_level))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to install tracing subscriber")?;

        Ok(())
    }
}

async fn run(cli: Cli) -> Result<()> {
    let backend = cli.backend()?;

    info!(config = %cli.config.display(), "Loading storage config");
    let config = StorageConfig::load(&cli.config)?;

    // Bucket provisioning happens here; no listener until it succeeds
    let publisher = AppBuilder::new(config)
        .with_storage_backend(backend)
        .build()
        .await
        .context("Failed to initialise publisher")?;

    let router = create_router(AppState::new(Arc::new(publisher)));

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("Invalid listen address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Bridge listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Bridge stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    let result = run(cli).await;
    if let Err(e) = &result {
        error!(error = %format!("{:#}", e), "Fatal error, shutting down");
    }
    result
}
