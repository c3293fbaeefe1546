use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use depot_blob_fs::FsBlobStore;
use depot_metadata_postgres::PostgresMetadataStore;
use depot_server::api::AppState;
use depot_server::config::DepotConfig;
use depot_service::DocumentService;

/// Depot document-ingestion HTTP server.
#[derive(Parser, Debug)]
#[command(name = "depot-server", about = "Standalone HTTP server for depot")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "depot.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration from TOML file, or use defaults if the file does not exist.
    let config: DepotConfig = if Path::new(&cli.config).exists() {
        let contents = std::fs::read_to_string(&cli.config)?;
        toml::from_str(&contents)?
    } else {
        toml::from_str("")?
    };

    depot_server::telemetry::init();

    if !Path::new(&cli.config).exists() {
        info!(
            path = %cli.config,
            "config file not found, using defaults"
        );
    }

    // Resolve the bind address (CLI overrides take precedence).
    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");
    let base_url = config.server.base_url();

    // Connect to PostgreSQL (bounded retries) and run migrations. An
    // unreachable database is fatal to the process, not a per-request error.
    let metadata = PostgresMetadataStore::new(config.metadata.to_postgres_config()).await?;
    info!("metadata store initialized");

    // Create the blob storage root if needed.
    let blob = FsBlobStore::new(&config.blob.root).await?;
    info!(root = %config.blob.root, "blob store initialized");

    let service = Arc::new(DocumentService::new(
        Arc::new(blob),
        Arc::new(metadata),
        base_url,
    ));
    let app = depot_server::api::router(AppState { service });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "depot-server listening");

    // Serve with graceful shutdown on SIGINT / SIGTERM.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("depot-server shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM, then return to trigger graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}
