//! Storage port — the persistence mirror for device rows.
//!
//! The in-memory state owned by
//! [`DeviceService`](crate::services::device_service::DeviceService) is
//! authoritative during normal operation; the repository mirrors status
//! changes and becomes authoritative again on the next full reload.

use std::future::Future;

use wattwise_domain::device::Device;
use wattwise_domain::error::WattwiseError;
use wattwise_domain::id::DeviceId;
use wattwise_domain::status::PowerStatus;

/// Repository for device rows.
pub trait DeviceRepository {
    /// Fetch all device rows, ordered by room id then device id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, WattwiseError>> + Send;

    /// Number of stored device rows.
    fn count(&self) -> impl Future<Output = Result<u64, WattwiseError>> + Send;

    /// Insert a full device row (seeding only).
    fn insert(&self, device: Device) -> impl Future<Output = Result<(), WattwiseError>> + Send;

    /// Update a single row's status by primary key.
    fn update_status(
        &self,
        id: &DeviceId,
        status: PowerStatus,
    ) -> impl Future<Output = Result<(), WattwiseError>> + Send;

    /// Update every row's status in one request, skipping `except`.
    fn update_status_all(
        &self,
        status: PowerStatus,
        except: &DeviceId,
    ) -> impl Future<Output = Result<(), WattwiseError>> + Send;
}
