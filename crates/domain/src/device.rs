//! Device — one controllable household appliance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, WattwiseError};
use crate::id::{DeviceId, RoomId};
use crate::status::PowerStatus;

/// Classification tag used for display and usage-hour estimation only;
/// it never influences toggle behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Cooking,
    Cooling,
    Heating,
    Cleaning,
    Entertainment,
    Electronics,
    Network,
    Comfort,
    Mobility,
    PersonalCare,
    Lighting,
    Ventilation,
}

impl Category {
    /// The stable kebab-case tag, matching the storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cooking => "cooking",
            Self::Cooling => "cooling",
            Self::Heating => "heating",
            Self::Cleaning => "cleaning",
            Self::Entertainment => "entertainment",
            Self::Electronics => "electronics",
            Self::Network => "network",
            Self::Comfort => "comfort",
            Self::Mobility => "mobility",
            Self::PersonalCare => "personal-care",
            Self::Lighting => "lighting",
            Self::Ventilation => "ventilation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category tag.
#[derive(Debug, thiserror::Error)]
#[error("unknown category: {0:?}")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cooking" => Ok(Self::Cooking),
            "cooling" => Ok(Self::Cooling),
            "heating" => Ok(Self::Heating),
            "cleaning" => Ok(Self::Cleaning),
            "entertainment" => Ok(Self::Entertainment),
            "electronics" => Ok(Self::Electronics),
            "network" => Ok(Self::Network),
            "comfort" => Ok(Self::Comfort),
            "mobility" => Ok(Self::Mobility),
            "personal-care" => Ok(Self::PersonalCare),
            "lighting" => Ok(Self::Lighting),
            "ventilation" => Ok(Self::Ventilation),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// A household appliance with a three-state power status.
///
/// Only `status` is mutable during normal operation; everything else is
/// fixed once the catalog is loaded. Room membership is an explicit
/// field resolved at catalog-construction time, not inferred from the
/// id prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub room_id: RoomId,
    pub category: Category,
    /// Power draw in watts while `on`.
    pub wattage: u32,
    /// Power draw in watts while in `standby`; 0 unless `has_standby`.
    pub standby_wattage: u32,
    /// Whether the device cycles through three states or two.
    pub has_standby: bool,
    pub status: PowerStatus,
    /// Running cost at full draw, in currency units per hour.
    pub cost_per_hour: f64,
    pub efficiency_rating: String,
    pub tips: Vec<String>,
    pub description: String,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`WattwiseError::Validation`] when the name is empty, when
    /// a device without standby support is in the standby state, or when
    /// it carries a non-zero standby wattage.
    pub fn validate(&self) -> Result<(), WattwiseError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.has_standby {
            if self.status == PowerStatus::Standby {
                return Err(ValidationError::StandbyUnsupported(self.id.to_string()).into());
            }
            if self.standby_wattage != 0 {
                return Err(
                    ValidationError::StandbyWattageUnsupported(self.id.to_string()).into(),
                );
            }
        }
        Ok(())
    }

    /// Instantaneous power draw in watts for the current status.
    #[must_use]
    pub fn draw(&self) -> u32 {
        match self.status {
            PowerStatus::On => self.wattage,
            PowerStatus::Standby => self.standby_wattage,
            PowerStatus::Off => 0,
        }
    }

    /// This device with its status advanced one step in its cycle.
    #[must_use]
    pub fn toggled(mut self) -> Self {
        self.status = self.status.advanced(self.has_standby);
        self
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    room_id: Option<RoomId>,
    category: Option<Category>,
    wattage: u32,
    standby_wattage: u32,
    has_standby: bool,
    status: Option<PowerStatus>,
    cost_per_hour: f64,
    efficiency_rating: Option<String>,
    tips: Vec<String>,
    description: Option<String>,
}

impl DeviceBuilder {
    /// Set the device id from a slug.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSlug`] for malformed slugs.
    pub fn id(mut self, slug: &str) -> Result<Self, ValidationError> {
        self.id = Some(DeviceId::new(slug)?);
        Ok(self)
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the room this device belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSlug`] for malformed slugs.
    pub fn room(mut self, slug: &str) -> Result<Self, ValidationError> {
        self.room_id = Some(RoomId::new(slug)?);
        Ok(self)
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn wattage(mut self, watts: u32) -> Self {
        self.wattage = watts;
        self
    }

    #[must_use]
    pub fn standby_wattage(mut self, watts: u32) -> Self {
        self.standby_wattage = watts;
        self.has_standby = true;
        self
    }

    #[must_use]
    pub fn status(mut self, status: PowerStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn cost_per_hour(mut self, cost: f64) -> Self {
        self.cost_per_hour = cost;
        self
    }

    #[must_use]
    pub fn efficiency_rating(mut self, rating: impl Into<String>) -> Self {
        self.efficiency_rating = Some(rating.into());
        self
    }

    #[must_use]
    pub fn tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }

    #[must_use]
    pub fn tips(mut self, tips: impl IntoIterator<Item = String>) -> Self {
        self.tips.extend(tips);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`WattwiseError::Validation`] when the id or room is
    /// missing, or when [`Device::validate`] fails.
    pub fn build(self) -> Result<Device, WattwiseError> {
        let device = Device {
            id: self
                .id
                .ok_or(ValidationError::InvalidSlug(String::new()))?,
            name: self.name.unwrap_or_default(),
            room_id: self
                .room_id
                .ok_or(ValidationError::InvalidSlug(String::new()))?,
            category: self.category.unwrap_or(Category::Electronics),
            wattage: self.wattage,
            standby_wattage: self.standby_wattage,
            has_standby: self.has_standby,
            status: self.status.unwrap_or(PowerStatus::Off),
            cost_per_hour: self.cost_per_hour,
            efficiency_rating: self.efficiency_rating.unwrap_or_else(|| "A".to_string()),
            tips: self.tips,
            description: self.description.unwrap_or_default(),
        };
        device.validate()?;
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fridge() -> Device {
        Device::builder()
            .id("kitchen-fridge")
            .unwrap()
            .name("Fridge")
            .room("kitchen")
            .unwrap()
            .category(Category::Cooling)
            .wattage(150)
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_device_when_required_fields_given() {
        let device = fridge();
        assert_eq!(device.id.as_str(), "kitchen-fridge");
        assert_eq!(device.room_id.as_str(), "kitchen");
        assert_eq!(device.status, PowerStatus::Off);
        assert!(!device.has_standby);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Device::builder()
            .id("kitchen-fridge")
            .unwrap()
            .room("kitchen")
            .unwrap()
            .build();
        assert!(matches!(
            result,
            Err(WattwiseError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_standby_status_without_standby_support() {
        let result = Device::builder()
            .id("kitchen-fridge")
            .unwrap()
            .name("Fridge")
            .room("kitchen")
            .unwrap()
            .status(PowerStatus::Standby)
            .build();
        assert!(matches!(
            result,
            Err(WattwiseError::Validation(
                ValidationError::StandbyUnsupported(_)
            ))
        ));
    }

    #[test]
    fn should_enable_standby_support_when_standby_wattage_set() {
        let device = Device::builder()
            .id("living-tv")
            .unwrap()
            .name("TV")
            .room("living")
            .unwrap()
            .category(Category::Entertainment)
            .wattage(120)
            .standby_wattage(2)
            .build()
            .unwrap();
        assert!(device.has_standby);
        assert_eq!(device.standby_wattage, 2);
    }

    #[test]
    fn should_draw_wattage_for_each_status() {
        let mut device = Device::builder()
            .id("living-tv")
            .unwrap()
            .name("TV")
            .room("living")
            .unwrap()
            .wattage(120)
            .standby_wattage(2)
            .build()
            .unwrap();
        assert_eq!(device.draw(), 0);
        device.status = PowerStatus::Standby;
        assert_eq!(device.draw(), 2);
        device.status = PowerStatus::On;
        assert_eq!(device.draw(), 120);
    }

    #[test]
    fn should_toggle_two_state_device_off_to_on() {
        let device = fridge().toggled();
        assert_eq!(device.status, PowerStatus::On);
        assert_eq!(device.toggled().status, PowerStatus::Off);
    }

    #[test]
    fn should_roundtrip_category_through_display_and_from_str() {
        for category in [
            Category::Cooking,
            Category::PersonalCare,
            Category::Ventilation,
        ] {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn should_serialize_category_as_kebab_case() {
        let json = serde_json::to_string(&Category::PersonalCare).unwrap();
        assert_eq!(json, "\"personal-care\"");
    }

    #[test]
    fn should_roundtrip_device_through_serde_json() {
        let device = fridge();
        let json = serde_json::to_string(&device).unwrap();
        let parsed: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, device.id);
        assert_eq!(parsed.status, device.status);
        assert_eq!(parsed.wattage, device.wattage);
    }
}
