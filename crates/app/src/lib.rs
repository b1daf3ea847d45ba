//! # wattwise-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository` — persistence mirror for device rows
//!   - `EventPublisher` — status-change notifications
//! - Own the authoritative in-memory device state (`DeviceService`) and
//!   provide the only operations that may change device status
//! - Provide **in-process infrastructure** (event bus, synthetic
//!   consumption feed) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `wattwise-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
pub mod telemetry;
