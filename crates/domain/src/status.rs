//! Power status — the three-state cycle at the heart of the hub.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Power state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerStatus {
    /// Fully off, drawing nothing.
    Off,
    /// Low-power standby, only reachable on devices with standby support.
    Standby,
    /// Running at full wattage.
    On,
}

impl PowerStatus {
    /// Advance one step in the device's cycle.
    ///
    /// With standby support the cycle is `off → standby → on → off`
    /// (period 3); without it, `off → on → off` (period 2).
    #[must_use]
    pub fn advanced(self, has_standby: bool) -> Self {
        if has_standby {
            match self {
                Self::Off => Self::Standby,
                Self::Standby => Self::On,
                Self::On => Self::Off,
            }
        } else {
            match self {
                Self::Off | Self::Standby => Self::On,
                Self::On => Self::Off,
            }
        }
    }

    /// The stable lowercase tag, matching the storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Standby => "standby",
            Self::On => "on",
        }
    }
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, thiserror::Error)]
#[error("unknown power status: {0:?}")]
pub struct ParseStatusError(String);

impl FromStr for PowerStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "standby" => Ok(Self::Standby),
            "on" => Ok(Self::On),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_cycle_through_three_states_with_standby() {
        let mut status = PowerStatus::Off;
        let visited: Vec<PowerStatus> = (0..3)
            .map(|_| {
                status = status.advanced(true);
                status
            })
            .collect();
        assert_eq!(
            visited,
            vec![PowerStatus::Standby, PowerStatus::On, PowerStatus::Off]
        );
    }

    #[test]
    fn should_cycle_through_two_states_without_standby() {
        let mut status = PowerStatus::Off;
        status = status.advanced(false);
        assert_eq!(status, PowerStatus::On);
        status = status.advanced(false);
        assert_eq!(status, PowerStatus::Off);
    }

    #[test]
    fn should_return_to_start_after_full_cycle_from_any_state() {
        for start in [PowerStatus::Off, PowerStatus::Standby, PowerStatus::On] {
            let mut status = start;
            for _ in 0..3 {
                status = status.advanced(true);
            }
            assert_eq!(status, start);
        }
    }

    #[test]
    fn should_leave_standby_toward_on_when_support_is_absent() {
        // A standby state on a non-standby device is already invalid; the
        // transition still converges into the two-state cycle.
        assert_eq!(PowerStatus::Standby.advanced(false), PowerStatus::On);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        for status in [PowerStatus::Off, PowerStatus::Standby, PowerStatus::On] {
            let parsed: PowerStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn should_serialize_as_lowercase_string() {
        let json = serde_json::to_string(&PowerStatus::Standby).unwrap();
        assert_eq!(json, "\"standby\"");
    }

    #[test]
    fn should_reject_unknown_status_string() {
        let result: Result<PowerStatus, _> = "dimmed".parse();
        assert!(result.is_err());
    }
}
