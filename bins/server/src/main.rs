//! Docdrop API Server
//!
//! Main entry point for the Docdrop upload service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docdrop_api::{AppState, create_router};
use docdrop_core::storage::{StorageProvider, StorageService};
use docdrop_shared::{AppConfig, StorageSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docdrop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Create storage service
    let provider = storage_provider(&config.storage)?;
    let storage = StorageService::from_provider(provider)?;
    info!(
        provider = storage.provider_name(),
        bucket = storage.bucket(),
        "Storage configured"
    );

    // Create application state
    let state = AppState {
        storage: Arc::new(storage),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Map the storage settings section onto a concrete provider.
fn storage_provider(settings: &StorageSettings) -> anyhow::Result<StorageProvider> {
    match settings.provider.as_str() {
        "s3" => Ok(StorageProvider::S3 {
            endpoint: settings.endpoint.clone(),
            bucket: settings.bucket.clone(),
            access_key_id: settings.access_key_id.clone(),
            secret_access_key: settings.secret_access_key.clone(),
            region: settings.region.clone(),
        }),
        "azure_blob" => Ok(StorageProvider::AzureBlob {
            account: settings.account.clone(),
            access_key: settings.access_key.clone(),
            container: settings.container.clone(),
        }),
        "local" => Ok(StorageProvider::LocalFs {
            root: PathBuf::from(&settings.root),
        }),
        other => anyhow::bail!("unknown storage provider '{other}'"),
    }
}
