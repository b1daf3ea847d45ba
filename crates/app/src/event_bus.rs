//! In-process event bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use wattwise_domain::error::WattwiseError;

use crate::ports::{EventPublisher, StatusChanged};

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
pub struct InProcessEventBus {
    sender: broadcast::Sender<StatusChanged>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to status changes on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StatusChanged> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(
        &self,
        event: StatusChanged,
    ) -> impl Future<Output = Result<(), WattwiseError>> + Send {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — we simply ignore the error.
        let _ = self.sender.send(event);
        async { Ok(()) }
    }
}

impl EventPublisher for &InProcessEventBus {
    fn publish(
        &self,
        event: StatusChanged,
    ) -> impl Future<Output = Result<(), WattwiseError>> + Send {
        (*self).publish(event)
    }
}

impl EventPublisher for std::sync::Arc<InProcessEventBus> {
    fn publish(
        &self,
        event: StatusChanged,
    ) -> impl Future<Output = Result<(), WattwiseError>> + Send {
        self.as_ref().publish(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wattwise_domain::consumption::Consumption;
    use wattwise_domain::id::DeviceId;
    use wattwise_domain::status::PowerStatus;
    use wattwise_domain::time::now;

    fn event(device: &str, status: PowerStatus) -> StatusChanged {
        StatusChanged {
            device_id: Some(DeviceId::new(device).unwrap()),
            status,
            consumption: Consumption::default(),
            timestamp: now(),
        }
    }

    #[tokio::test]
    async fn should_deliver_event_to_subscriber() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(event("kitchen-fridge", PowerStatus::On))
            .await
            .unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(
            received.device_id.unwrap().as_str(),
            "kitchen-fridge"
        );
        assert_eq!(received.status, PowerStatus::On);
    }

    #[tokio::test]
    async fn should_deliver_event_to_multiple_subscribers() {
        let bus = InProcessEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(event("living-tv", PowerStatus::Standby))
            .await
            .unwrap();

        assert_eq!(rx1.recv().await.unwrap().status, PowerStatus::Standby);
        assert_eq!(rx2.recv().await.unwrap().status, PowerStatus::Standby);
    }

    #[tokio::test]
    async fn should_succeed_when_no_subscribers() {
        let bus = InProcessEventBus::new(16);
        let result = bus.publish(event("living-tv", PowerStatus::Off)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_deliver_events_published_before_subscription() {
        let bus = InProcessEventBus::new(16);
        bus.publish(event("living-tv", PowerStatus::On))
            .await
            .unwrap();

        let mut rx = bus.subscribe();
        bus.publish(event("bedroom-pc", PowerStatus::On))
            .await
            .unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.device_id.unwrap().as_str(), "bedroom-pc");
    }
}
