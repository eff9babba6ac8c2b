//! Error types for lens-core.
//!
//! Two disjoint error families:
//!
//! - [`LensError`] covers pure-compute failures (validation, dimension
//!   mismatch, incomplete profiles, configuration). These are synchronous
//!   and carry structured context naming the framework and fields involved.
//! - [`StoreError`] covers I/O failures at the profile store boundary
//!   (timeout, unavailability, backend faults). Callers may retry these;
//!   the core never retries on its own.
//!
//! The two are deliberately separate types so a store outage can never be
//! mistaken for bad caller input.

use thiserror::Error;

use crate::types::FrameworkKind;

/// Top-level error type for pure-compute lens operations.
#[derive(Debug, Error)]
pub enum LensError {
    /// Raw assessment input is missing required fields for a framework.
    #[error("validation failed for {framework}: missing required fields {missing_fields:?}")]
    Validation {
        framework: FrameworkKind,
        missing_fields: Vec<String>,
    },

    /// A framework vector does not match its declared schema length.
    ///
    /// This indicates an implementation bug, not a caller error.
    #[error("dimension mismatch for {framework}: expected {expected}, got {actual}")]
    DimensionMismatch {
        framework: FrameworkKind,
        expected: usize,
        actual: usize,
    },

    /// An integrated profile is missing one or more standardized profiles.
    #[error("incomplete profile {profile_id}: missing {missing:?}")]
    IncompleteProfile {
        profile_id: uuid::Uuid,
        missing: Vec<FrameworkKind>,
    },

    /// Configuration table failed validation at load time.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LensError {
    fn from(err: serde_json::Error) -> Self {
        LensError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LensError {
    fn from(err: config::ConfigError) -> Self {
        LensError::Config(err.to_string())
    }
}

/// Result type alias for pure-compute lens operations.
pub type LensResult<T> = Result<T, LensError>;

/// Errors surfaced by the external profile store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("profile store unavailable: {0}")]
    Unavailable(String),

    /// A store call exceeded its bounded wait.
    #[error("profile store timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// The backing index reported a fault.
    #[error("profile store backend error: {0}")]
    Backend(String),
}

/// Result type alias for store adapter operations.
pub type StoreResult<T> = Result<T, StoreError>;
