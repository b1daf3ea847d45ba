//! # wattwise-domain
//!
//! Pure domain model for the wattwise energy-monitoring hub.
//!
//! ## Responsibilities
//! - Foundational types: slug identifiers, error conventions, timestamps
//! - Define **Devices** (household appliances with a three-state power status)
//! - Define **Rooms** (named groupings of devices) and room views
//! - Define **Consumption** aggregation (current / active / standby watts)
//! - Define the **Tariff** cost model and usage-hour estimation table
//! - Provide the built-in seed **catalog**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod catalog;
pub mod consumption;
pub mod device;
pub mod room;
pub mod status;
pub mod tariff;
pub mod usage;
