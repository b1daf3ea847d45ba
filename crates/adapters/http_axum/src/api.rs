//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod consumption;
#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;
pub mod sse;

use axum::Router;
use axum::routing::{get, post};

use wattwise_app::ports::{DeviceRepository, EventPublisher};
use wattwise_app::telemetry::ConsumptionFeed;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, P, F>() -> Router<AppState<R, P, F>>
where
    R: DeviceRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    F: ConsumptionFeed + Send + Sync + 'static,
{
    Router::new()
        // Devices
        .route("/devices", get(devices::list::<R, P, F>))
        .route("/devices/toggle-all", post(devices::toggle_all::<R, P, F>))
        .route("/devices/{id}", get(devices::get::<R, P, F>))
        .route("/devices/{id}/toggle", post(devices::toggle::<R, P, F>))
        // Rooms
        .route("/rooms", get(rooms::list::<R, P, F>))
        // Consumption
        .route("/consumption", get(consumption::summary::<R, P, F>))
        .route("/consumption/chart", get(consumption::chart::<R, P, F>))
        .route("/consumption/stream", get(sse::stream::<R, P, F>))
}
