//! Typed identifier newtypes backed by slugs.
//!
//! Catalog identifiers are human-readable slugs (`kitchen-fridge`,
//! `global-lights`) rather than synthetic UUIDs, so the newtypes wrap a
//! validated lowercase string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap a slug, validating its shape.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::InvalidSlug`] when the slug is empty
            /// or contains characters outside lowercase `[a-z0-9-]`.
            pub fn new(slug: impl Into<String>) -> Result<Self, ValidationError> {
                let slug = slug.into();
                if is_valid_slug(&slug) {
                    Ok(Self(slug))
                } else {
                    Err(ValidationError::InvalidSlug(slug))
                }
            }

            /// Access the inner slug.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    DeviceId
);

define_id!(
    /// Unique identifier for a [`Room`](crate::room::Room).
    RoomId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_lowercase_slug_with_dashes() {
        let id = DeviceId::new("kitchen-fridge").unwrap();
        assert_eq!(id.as_str(), "kitchen-fridge");
    }

    #[test]
    fn should_reject_empty_slug() {
        assert!(matches!(
            DeviceId::new(""),
            Err(ValidationError::InvalidSlug(_))
        ));
    }

    #[test]
    fn should_reject_uppercase_and_spaces() {
        assert!(DeviceId::new("Kitchen-Fridge").is_err());
        assert!(RoomId::new("living room").is_err());
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = RoomId::new("basement").unwrap();
        let parsed: RoomId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = DeviceId::new("living-tv").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"living-tv\"");
        let parsed: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_deserializing_invalid_slug() {
        let result: Result<DeviceId, _> = serde_json::from_str("\"not a slug\"");
        assert!(result.is_err());
    }
}
