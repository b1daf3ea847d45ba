//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use wattwise_app::ports::{DeviceRepository, EventPublisher};
use wattwise_app::services::device_service::BulkTarget;
use wattwise_app::telemetry::ConsumptionFeed;
use wattwise_domain::consumption::Consumption;
use wattwise_domain::device::Device;
use wattwise_domain::error::{NotFoundError, ValidationError, WattwiseError};
use wattwise_domain::id::DeviceId;
use wattwise_domain::status::PowerStatus;
use wattwise_domain::usage;

use crate::error::ApiError;
use crate::state::AppState;

/// Device detail with derived cost figures.
#[derive(Serialize)]
pub struct DeviceDetail {
    #[serde(flatten)]
    pub device: Device,
    /// Heuristic yearly runtime used for the annual projection.
    pub estimated_hours_per_year: u32,
    /// Projected yearly cost at full draw under the fixed tariff.
    pub estimated_annual_cost: f64,
}

/// Response body after a single-device toggle.
#[derive(Serialize)]
pub struct ToggleOutcome {
    pub id: DeviceId,
    pub status: PowerStatus,
}

/// Request body for the bulk toggle.
#[derive(Deserialize)]
pub struct ToggleAllRequest {
    pub target: BulkTarget,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<DeviceDetail>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the toggle endpoint.
pub enum ToggleResponse {
    Ok(Json<ToggleOutcome>),
}

impl IntoResponse for ToggleResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the bulk toggle endpoint.
pub enum ToggleAllResponse {
    Ok(Json<Consumption>),
}

impl IntoResponse for ToggleAllResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<DeviceId, ApiError> {
    DeviceId::new(id)
        .map_err(|_| ApiError::from(WattwiseError::from(ValidationError::InvalidSlug(id.into()))))
}

fn not_found(id: &DeviceId) -> ApiError {
    ApiError::from(WattwiseError::from(NotFoundError {
        entity: "Device",
        id: id.to_string(),
    }))
}

/// `GET /api/devices`
pub async fn list<R, P, F>(State(state): State<AppState<R, P, F>>) -> Result<ListResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    F: ConsumptionFeed + Send + Sync + 'static,
{
    let devices = state.device_service.snapshot().await;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/{id}`
pub async fn get<R, P, F>(
    State(state): State<AppState<R, P, F>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    F: ConsumptionFeed + Send + Sync + 'static,
{
    let device_id = parse_id(&id)?;
    let device = state
        .device_service
        .device(&device_id)
        .await
        .ok_or_else(|| not_found(&device_id))?;

    let hours = usage::estimated_hours_per_year(device.category, &device.name);
    let annual = state.tariff.annual_cost(device.wattage, hours);
    Ok(GetResponse::Ok(Json(DeviceDetail {
        device,
        estimated_hours_per_year: hours,
        estimated_annual_cost: annual,
    })))
}

/// `POST /api/devices/{id}/toggle`
///
/// The state store treats unknown ids as a silent no-op; the HTTP
/// surface still reports 404 so clients see their typo.
pub async fn toggle<R, P, F>(
    State(state): State<AppState<R, P, F>>,
    Path(id): Path<String>,
) -> Result<ToggleResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    F: ConsumptionFeed + Send + Sync + 'static,
{
    let device_id = parse_id(&id)?;
    let status = state
        .device_service
        .toggle_device(&device_id)
        .await?
        .ok_or_else(|| not_found(&device_id))?;

    Ok(ToggleResponse::Ok(Json(ToggleOutcome {
        id: device_id,
        status,
    })))
}

/// `POST /api/devices/toggle-all`
pub async fn toggle_all<R, P, F>(
    State(state): State<AppState<R, P, F>>,
    Json(req): Json<ToggleAllRequest>,
) -> Result<ToggleAllResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    F: ConsumptionFeed + Send + Sync + 'static,
{
    let consumption = state.device_service.toggle_all(req.target).await?;
    Ok(ToggleAllResponse::Ok(Json(consumption)))
}
