//! Shared application state for axum handlers.

use std::sync::Arc;

use wattwise_app::ports::{DeviceRepository, EventPublisher};
use wattwise_app::services::device_service::DeviceService;
use wattwise_app::telemetry::ConsumptionFeed;
use wattwise_domain::room::GroupingPolicy;
use wattwise_domain::tariff::Tariff;

/// Application state shared across all axum handlers.
///
/// Generic over the repository, event publisher, and chart feed types
/// to avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone` — only the
/// `Arc` wrappers are cloned.
pub struct AppState<R, P, F> {
    /// Owner of the in-memory device map.
    pub device_service: Arc<DeviceService<R, P>>,
    /// Source of chart samples for `/api/consumption`.
    pub feed: Arc<F>,
    /// How whole-house devices appear in room views.
    pub grouping_policy: GroupingPolicy,
    /// Fixed electricity tariff used for cost figures.
    pub tariff: Tariff,
}

impl<R, P, F> Clone for AppState<R, P, F> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            feed: Arc::clone(&self.feed),
            grouping_policy: self.grouping_policy,
            tariff: self.tariff,
        }
    }
}

impl<R, P, F> AppState<R, P, F>
where
    R: DeviceRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    F: ConsumptionFeed + Send + Sync + 'static,
{
    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// The service and feed are shared with background tasks, so they
    /// arrive already wrapped.
    pub fn new(
        device_service: Arc<DeviceService<R, P>>,
        feed: Arc<F>,
        grouping_policy: GroupingPolicy,
        tariff: Tariff,
    ) -> Self {
        Self {
            device_service,
            feed,
            grouping_policy,
            tariff,
        }
    }
}
