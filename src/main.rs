/// Main application entry point
mod clients;
mod config;
mod domain;
mod errors;
mod gallery;
mod handlers;
mod routes;
mod services;
mod store;
mod utils;

use crate::clients::{AlmanacClient, ApodClient};
use crate::config::AppConfig;
use crate::domain::Snapshot;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::SnapshotService;
use crate::store::SnapshotStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize clients
    let almanac_client = AlmanacClient::new(
        config.almanac_url.clone(),
        config.observer_coords.clone(),
        config.observer_tz.clone(),
        config.almanac_id.clone(),
    )?;
    let apod_client = ApodClient::new(config.apod_url.clone(), config.apod_api_key.clone())?;

    // Initialize snapshot store and service
    let snapshot_store = Arc::new(SnapshotStore::new(Snapshot::default()));
    let snapshot_service = Arc::new(SnapshotService::new(
        snapshot_store.clone(),
        almanac_client,
        apod_client,
        config.utc_offset(),
    ));

    // Build the first snapshot before accepting requests
    snapshot_service.refresh().await;
    info!("Initial snapshot installed");

    // Start background refresh task
    start_refresh_task(snapshot_service.clone(), config.refresh_every_seconds);

    // Initialize application state
    let state = AppState {
        snapshot_service,
        snapshot_store,
        photos_dir: config.photos_dir.clone(),
        pages_dir: config.pages_dir.clone(),
    };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("night_sky service listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Start the periodic snapshot refresh task. The startup build covers
/// the first period, so the loop sleeps before each refresh.
fn start_refresh_task(service: Arc<SnapshotService>, interval: u64) {
    tokio::spawn(async move {
        info!("Starting snapshot refresh task (interval: {}s)", interval);
        loop {
            tokio::time::sleep(Duration::from_secs(interval)).await;
            service.refresh().await;
        }
    });
}
