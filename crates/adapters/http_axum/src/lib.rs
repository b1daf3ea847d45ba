//! # wattwise-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API the dashboard consumes (`/api/devices`,
//!   `/api/rooms`, `/api/consumption`, …)
//! - Stream chart samples over SSE for live updates
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `wattwise-app` (for ports and services) and
//! `wattwise-domain` (for domain types used in request/response
//! mapping). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
