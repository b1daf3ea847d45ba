//! Event publishing port and the status-change event itself.

use std::future::Future;

use serde::{Deserialize, Serialize};

use wattwise_domain::consumption::Consumption;
use wattwise_domain::error::WattwiseError;
use wattwise_domain::id::DeviceId;
use wattwise_domain::status::PowerStatus;
use wattwise_domain::time::Timestamp;

/// Published after every successful status mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChanged {
    /// The toggled device, or `None` for a bulk operation.
    pub device_id: Option<DeviceId>,
    /// The status the device(s) ended up in.
    pub status: PowerStatus,
    /// Aggregate consumption after the change.
    pub consumption: Consumption,
    pub timestamp: Timestamp,
}

/// Outbound port for status-change notifications.
pub trait EventPublisher {
    /// Publish an event. Implementations must not fail just because
    /// nobody is listening.
    fn publish(
        &self,
        event: StatusChanged,
    ) -> impl Future<Output = Result<(), WattwiseError>> + Send;
}
