//! # wattwise-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port defined in `wattwise-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `wattwise-app` (for the port trait) and `wattwise-domain`
//! (for domain types). The `app` and `domain` crates must never
//! reference this adapter.

pub mod device_repo;
pub mod error;
pub mod pool;
