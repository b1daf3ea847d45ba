//! # wattwised — wattwise daemon
//!
//! Composition root that wires the adapters together and starts the
//! server.
//!
//! ## Responsibilities
//! - Load configuration (`wattwise.toml` + env overrides) and fail fast
//!   on invalid values
//! - Initialize the `SQLite` connection pool and run migrations
//! - Seed the device catalog when the store is empty
//! - Construct the device service, event bus, and chart feed
//! - Spawn the background sampling tasks
//! - Build the axum router, bind, and serve with graceful shutdown
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;

use wattwise_adapter_http_axum::state::AppState;
use wattwise_adapter_storage_sqlite_sqlx::device_repo::SqliteDeviceRepository;
use wattwise_adapter_storage_sqlite_sqlx::pool;
use wattwise_app::event_bus::InProcessEventBus;
use wattwise_app::services::device_service::DeviceService;
use wattwise_app::telemetry::{self, ConsumptionFeed, SyntheticFeed};
use wattwise_domain::catalog;
use wattwise_domain::id::DeviceId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = pool::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("initialising database")?;
    let device_repo = SqliteDeviceRepository::new(db.pool().clone());

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(256));

    // Device state store
    let service = Arc::new(DeviceService::new(
        device_repo,
        Arc::clone(&event_bus),
        catalog::rooms()?,
        DeviceId::new(catalog::GLOBAL_LIGHTS)?,
    ));
    service
        .seed(catalog::devices()?)
        .await
        .context("seeding device catalog")?;

    // Chart feed, backfilled from the live aggregate
    let baseline = service.consumption().await;
    let feed = Arc::new(SyntheticFeed::backfilled(baseline.current));

    // Periodic sampling
    {
        let service = Arc::clone(&service);
        let feed = Arc::clone(&feed);
        tokio::spawn(async move { telemetry::drive(&*service, &*feed).await });
    }

    // An extra sample on every status change, so toggles show up on the
    // chart before the next periodic tick
    {
        let feed = Arc::clone(&feed);
        let mut events = event_bus.subscribe();
        tokio::spawn(async move {
            while let Ok(event) = events.recv().await {
                feed.tick(event.consumption.current);
            }
        });
    }

    // HTTP
    let state = AppState::new(
        Arc::clone(&service),
        Arc::clone(&feed),
        config.dashboard.grouping_policy,
        config.tariff(),
    );
    let app = wattwise_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "wattwised listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
    tracing::info!("shutting down");
}
