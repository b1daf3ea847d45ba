//! Server-Sent Events (SSE) stream for live chart samples.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use wattwise_app::ports::{DeviceRepository, EventPublisher};
use wattwise_app::telemetry::ConsumptionFeed;

use crate::state::AppState;

/// `GET /api/consumption/stream` — SSE stream of chart samples.
///
/// Subscribes to the feed's broadcast channel and sends JSON-encoded
/// samples as SSE `data:` frames. The stream continues until the
/// client disconnects.
pub async fn stream<R, P, F>(
    State(state): State<AppState<R, P, F>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>
where
    R: DeviceRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    F: ConsumptionFeed + Send + Sync + 'static,
{
    let rx = state.feed.subscribe();
    let sample_stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(point) => match serde_json::to_string(&point) {
            Ok(json) => Some(Ok(Event::default().data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize chart sample for SSE stream");
                None
            }
        },
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(
                skipped = n,
                "SSE subscriber lagged, some samples were dropped"
            );
            None
        }
    });

    Sse::new(sample_stream).keep_alive(KeepAlive::default())
}
