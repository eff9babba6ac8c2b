//! Profile Lens Core Library
//!
//! Domain types, configuration tables, similarity math, and the external
//! profile-store contract for the multi-framework profile fusion engine.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`IntegratedProfile`, `CompositeEmbedding`,
//!   `CompoundTraits`, `ComparisonResult`, the four standardized framework
//!   profiles)
//! - The `ProfileStore` trait (injected k-NN vector-index capability) and
//!   `ProfileIndex` search front-end with bounded waits
//! - Error types: `LensError` for pure compute, `StoreError` for adapter I/O
//! - Versioned configuration (fusion weights, context weight vectors,
//!   compound-trait coefficient tables), validated once at load
//! - An in-memory store stub for tests and development
//!
//! Everything outside the store boundary is synchronous pure computation
//! with no shared mutable state; profiles are immutable once constructed
//! and safe to use concurrently without locks.
//!
//! # Example
//!
//! ```
//! use lens_core::traits::SearchOptions;
//!
//! let options = SearchOptions::new(10).with_min_score(0.75);
//! assert_eq!(options.limit, 10);
//! ```

pub mod config;
pub mod error;
pub mod search;
pub mod similarity;
pub mod stubs;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::{CoefficientTable, ContextWeightTable, FusionWeights, LensConfig, StoreConfig};
pub use error::{LensError, LensResult, StoreError, StoreResult};
pub use search::ProfileIndex;
pub use types::{
    ComparisonContext, ComparisonResult, CompositeEmbedding, CompoundTrait, CompoundTraits,
    FrameworkKind, FrameworkScores, IntegratedProfile, ProfileId, ProfileMetadata, ProfileType,
    RawAssessmentInput,
};
