//! Room — a named grouping of devices.
//!
//! Rooms hold no mutable state of their own; a [`RoomView`] is recomputed
//! from a device snapshot on every read.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::id::RoomId;

/// The pseudo-room holding whole-house devices such as central lighting.
pub const GLOBAL_ROOM: &str = "global";

/// A named grouping of devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
}

impl Room {
    /// Construct a room from slug and display name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed slug.
    pub fn new(id: &str, name: impl Into<String>) -> Result<Self, crate::error::WattwiseError> {
        Ok(Self {
            id: RoomId::new(id)?,
            name: name.into(),
        })
    }

    /// Whether this is the whole-house pseudo-room.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.id.as_str() == GLOBAL_ROOM
    }
}

/// A room together with the devices currently assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomView {
    pub room: Room,
    pub devices: Vec<Device>,
}

/// How whole-house devices are presented in room views.
///
/// The source material was inconsistent here; the policy is explicit so
/// callers choose one deliberately. The default keeps global devices in
/// their own pseudo-room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingPolicy {
    /// Global devices appear in a single separate pseudo-room.
    #[default]
    SeparateGlobalRoom,
    /// Global devices are injected into every room's view.
    GlobalInEveryRoom,
}

/// Partition a device snapshot into room views.
///
/// Every device lands in the room named by its explicit `room_id`; no
/// device is dropped. Rooms keep their catalog order, devices keep
/// snapshot order within a room.
#[must_use]
pub fn group_by_room(rooms: &[Room], devices: &[Device], policy: GroupingPolicy) -> Vec<RoomView> {
    let global_devices: Vec<Device> = devices
        .iter()
        .filter(|d| d.room_id.as_str() == GLOBAL_ROOM)
        .cloned()
        .collect();

    let mut views: Vec<RoomView> = rooms
        .iter()
        .filter(|room| !room.is_global())
        .map(|room| {
            let mut members: Vec<Device> = devices
                .iter()
                .filter(|d| d.room_id == room.id)
                .cloned()
                .collect();
            if policy == GroupingPolicy::GlobalInEveryRoom {
                members.extend(global_devices.iter().cloned());
            }
            RoomView {
                room: room.clone(),
                devices: members,
            }
        })
        .collect();

    if policy == GroupingPolicy::SeparateGlobalRoom {
        if let Some(global) = rooms.iter().find(|room| room.is_global()) {
            views.push(RoomView {
                room: global.clone(),
                devices: global_devices,
            });
        }
    }

    views
}
