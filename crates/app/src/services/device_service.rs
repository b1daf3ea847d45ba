//! Device service — the authoritative, in-memory device state store.
//!
//! Exclusive owner of the mutable device map; every other component gets
//! cloned snapshots or derived values. Toggles apply optimistically in
//! memory and are mirrored to storage best-effort: a failed mirror write
//! triggers a full reload, after which the external store wins (the
//! user-visible effect is a possible snap-back of the failed toggle).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use wattwise_domain::consumption::Consumption;
use wattwise_domain::device::Device;
use wattwise_domain::error::WattwiseError;
use wattwise_domain::id::DeviceId;
use wattwise_domain::room::{GroupingPolicy, Room, RoomView, group_by_room};
use wattwise_domain::status::PowerStatus;
use wattwise_domain::time::now;

use crate::ports::{DeviceRepository, EventPublisher, StatusChanged};

/// Target state for a bulk toggle. Standby is deliberately not offered:
/// the bulk operation bypasses the per-device cycle and jumps straight
/// to fully on or fully off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkTarget {
    On,
    Off,
}

impl BulkTarget {
    #[must_use]
    fn status(self) -> PowerStatus {
        match self {
            Self::On => PowerStatus::On,
            Self::Off => PowerStatus::Off,
        }
    }
}

/// Application service owning the device list.
pub struct DeviceService<R, P> {
    repo: R,
    publisher: P,
    rooms: Vec<Room>,
    /// The designated always-on row skipped by bulk mirror writes.
    excluded_from_bulk: DeviceId,
    devices: RwLock<BTreeMap<DeviceId, Device>>,
}

impl<R: DeviceRepository, P: EventPublisher> DeviceService<R, P> {
    /// Create a service with an empty device map; call
    /// [`load`](Self::load) or [`seed`](Self::seed) before serving reads.
    pub fn new(repo: R, publisher: P, rooms: Vec<Room>, excluded_from_bulk: DeviceId) -> Self {
        Self {
            repo,
            publisher,
            rooms,
            excluded_from_bulk,
            devices: RwLock::new(BTreeMap::new()),
        }
    }

    /// Replace the in-memory state with the repository's rows.
    ///
    /// # Errors
    ///
    /// Propagates the storage error; an initial-load failure is surfaced
    /// to the caller rather than retried.
    pub async fn load(&self) -> Result<(), WattwiseError> {
        let rows = self.repo.get_all().await?;
        let mut devices = self.devices.write().await;
        devices.clear();
        for device in rows {
            devices.insert(device.id.clone(), device);
        }
        Ok(())
    }

    /// Insert the catalog when the repository is empty, then load.
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the count, inserts, or reload.
    #[tracing::instrument(skip(self, catalog))]
    pub async fn seed(&self, catalog: Vec<Device>) -> Result<(), WattwiseError> {
        if self.repo.count().await? == 0 {
            tracing::info!(devices = catalog.len(), "seeding empty device store");
            for device in catalog {
                self.repo.insert(device).await?;
            }
        }
        self.load().await
    }

    /// Cloned snapshot of all devices, ordered by room id then device id.
    pub async fn snapshot(&self) -> Vec<Device> {
        let devices = self.devices.read().await;
        let mut list: Vec<Device> = devices.values().cloned().collect();
        list.sort_by(|a, b| (&a.room_id, &a.id).cmp(&(&b.room_id, &b.id)));
        list
    }

    /// Look up a single device.
    pub async fn device(&self, id: &DeviceId) -> Option<Device> {
        self.devices.read().await.get(id).cloned()
    }

    /// Aggregate consumption over the current state.
    pub async fn consumption(&self) -> Consumption {
        Consumption::measure(self.devices.read().await.values())
    }

    /// Room views over the current state under the given policy.
    pub async fn rooms(&self, policy: GroupingPolicy) -> Vec<RoomView> {
        group_by_room(&self.rooms, &self.snapshot().await, policy)
    }

    /// Advance one device's status a single step in its cycle.
    ///
    /// Unknown ids are a no-op and return `Ok(None)` — not an error.
    /// The in-memory update always succeeds immediately; the mirror
    /// write happens afterwards and a mirror failure forces a reload.
    ///
    /// # Errors
    ///
    /// Propagates a storage error only when the corrective reload after
    /// a failed mirror write fails as well.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_device(
        &self,
        id: &DeviceId,
    ) -> Result<Option<PowerStatus>, WattwiseError> {
        let (status, consumption) = {
            let mut devices = self.devices.write().await;
            let Some(device) = devices.get_mut(id) else {
                tracing::debug!(%id, "toggle for unknown device ignored");
                return Ok(None);
            };
            device.status = device.status.advanced(device.has_standby);
            (device.status, Consumption::measure(devices.values()))
        };

        self.publisher
            .publish(StatusChanged {
                device_id: Some(id.clone()),
                status,
                consumption,
                timestamp: now(),
            })
            .await?;

        if let Err(err) = self.repo.update_status(id, status).await {
            tracing::warn!(%id, error = %err, "mirror write failed, reloading from storage");
            self.load().await?;
        }

        Ok(Some(status))
    }

    /// Set every device to the target status unconditionally.
    ///
    /// This bypasses the per-device cycle on purpose: a bulk "on" puts
    /// `on` even on devices whose single-step cycle would pass through
    /// standby first. The mirror write skips the designated always-on
    /// row, so its stored status survives the next reload.
    ///
    /// # Errors
    ///
    /// Propagates a storage error only when the corrective reload after
    /// a failed mirror write fails as well.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_all(&self, target: BulkTarget) -> Result<Consumption, WattwiseError> {
        let status = target.status();
        let consumption = {
            let mut devices = self.devices.write().await;
            for device in devices.values_mut() {
                device.status = status;
            }
            Consumption::measure(devices.values())
        };

        self.publisher
            .publish(StatusChanged {
                device_id: None,
                status,
                consumption,
                timestamp: now(),
            })
            .await?;

        if let Err(err) = self
            .repo
            .update_status_all(status, &self.excluded_from_bulk)
            .await
        {
            tracing::warn!(error = %err, "bulk mirror write failed, reloading from storage");
            self.load().await?;
        }

        Ok(self.consumption().await)
    }
}
