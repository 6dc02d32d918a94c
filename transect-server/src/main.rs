//! Binary entry point for the TranSECT storage gateway.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transect_server::config::Config;
use transect_server::storage::s3::S3ImageStore;
use transect_server::{AppState, router};
use transect_viz::PlotCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transect_server=debug,tower_http=debug".into()),
        )
        .init();

    // Parse CLI args
    let config = Config::parse();
    info!("Starting transect-server on {}:{}", config.host, config.port);

    // Connect to object storage
    let store = S3ImageStore::new(&config)?;

    // Build app state
    let state = Arc::new(AppState {
        store: Arc::new(store),
        config: config.clone(),
        catalog: PlotCatalog::coastal_survey(),
    });

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
