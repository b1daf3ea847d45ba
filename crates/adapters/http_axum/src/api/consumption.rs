//! JSON REST handlers for aggregate consumption.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wattwise_app::ports::{DeviceRepository, EventPublisher};
use wattwise_app::telemetry::{ChartPoint, ConsumptionFeed};

use crate::error::ApiError;
use crate::state::AppState;

/// Aggregate consumption with the fixed tariff applied.
#[derive(Serialize)]
pub struct ConsumptionSummary {
    pub current_w: u32,
    pub active_w: u32,
    pub standby_w: u32,
    pub current_kw: f64,
    pub cost_per_hour: f64,
}

/// Possible responses from the summary endpoint.
pub enum SummaryResponse {
    Ok(Json<ConsumptionSummary>),
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the chart endpoint.
pub enum ChartResponse {
    Ok(Json<Vec<ChartPoint>>),
}

impl IntoResponse for ChartResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/consumption`
pub async fn summary<R, P, F>(
    State(state): State<AppState<R, P, F>>,
) -> Result<SummaryResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    F: ConsumptionFeed + Send + Sync + 'static,
{
    let total = state.device_service.consumption().await;
    Ok(SummaryResponse::Ok(Json(ConsumptionSummary {
        current_w: total.current,
        active_w: total.active,
        standby_w: total.standby,
        current_kw: total.current_kw(),
        cost_per_hour: state.tariff.cost_per_hour(total.current),
    })))
}

/// `GET /api/consumption/chart`
///
/// The current rolling window of chart samples, oldest first.
pub async fn chart<R, P, F>(
    State(state): State<AppState<R, P, F>>,
) -> Result<ChartResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    F: ConsumptionFeed + Send + Sync + 'static,
{
    Ok(ChartResponse::Ok(Json(state.feed.window())))
}
