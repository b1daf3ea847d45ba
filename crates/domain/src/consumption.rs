//! Consumption aggregation — derived wattage totals.
//!
//! Aggregates are computed fresh from a device snapshot on every read and
//! never stored independently.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::status::PowerStatus;

/// Aggregate wattage totals over a device snapshot.
///
/// `current` is defined as `active + standby`, so the identity
/// `current == active + standby` holds by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumption {
    /// Total instantaneous draw in watts.
    pub current: u32,
    /// Draw from devices that are fully on.
    pub active: u32,
    /// Draw from devices idling in standby.
    pub standby: u32,
}

impl Consumption {
    /// Compute aggregates in a single pass over the snapshot.
    #[must_use]
    pub fn measure<'a>(devices: impl IntoIterator<Item = &'a Device>) -> Self {
        let mut active = 0;
        let mut standby = 0;
        for device in devices {
            match device.status {
                PowerStatus::On => active += device.wattage,
                PowerStatus::Standby => standby += device.standby_wattage,
                PowerStatus::Off => {}
            }
        }
        Self {
            current: active + standby,
            active,
            standby,
        }
    }

    /// Current draw in kilowatts, for display.
    #[must_use]
    pub fn current_kw(&self) -> f64 {
        f64::from(self.current) / 1000.0
    }
}
