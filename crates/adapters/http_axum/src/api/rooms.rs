//! JSON REST handlers for rooms.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use wattwise_app::ports::{DeviceRepository, EventPublisher};
use wattwise_app::telemetry::ConsumptionFeed;
use wattwise_domain::room::RoomView;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RoomView>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/rooms`
///
/// Room views under the configured grouping policy.
pub async fn list<R, P, F>(State(state): State<AppState<R, P, F>>) -> Result<ListResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    F: ConsumptionFeed + Send + Sync + 'static,
{
    let views = state.device_service.rooms(state.grouping_policy).await;
    Ok(ListResponse::Ok(Json(views)))
}
