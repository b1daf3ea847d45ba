//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`WattwiseError`] via `#[from]`; no `String` variants.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum WattwiseError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A storage adapter failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` must not be empty.
    #[error("name must not be empty")]
    EmptyName,

    /// Identifier slugs are lowercase `[a-z0-9-]`, non-empty.
    #[error("invalid identifier slug: {0:?}")]
    InvalidSlug(String),

    /// A device without standby support cannot be in the standby state.
    #[error("device {0} does not support standby")]
    StandbyUnsupported(String),

    /// A device without standby support must draw 0 W in standby.
    #[error("device {0} has a standby wattage but no standby support")]
    StandbyWattageUnsupported(String),
}

/// A lookup that found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"Device"`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}
