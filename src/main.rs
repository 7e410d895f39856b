use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use upload_service::config::{self, ServerConfig};
use upload_service::http::HttpServer;
use upload_service::lifecycle::Shutdown;
use upload_service::upload::UploadStore;

/// PDF upload service.
#[derive(Debug, Parser)]
#[command(name = "upload-service", version)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "upload_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("upload-service v0.1.0 starting");

    let args = Args::parse();
    let config = match args.config {
        Some(path) => config::load_config(&path)?,
        None => ServerConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upload_dir = %config.storage.upload_dir,
        max_files = config.limits.max_files_per_request,
        "Configuration loaded"
    );

    // The upload directory must exist before the first request is accepted.
    let store = UploadStore::new(&config.storage.upload_dir);
    store.ensure_dir().await?;

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
