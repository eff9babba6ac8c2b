//! Framework processors and fusion for the profile lens engine.
//!
//! This crate turns raw multi-framework assessment payloads into fused
//! composite embeddings and compares integrated profiles:
//!
//! - **Standardizers/Vectorizers** ([`mbti`], [`disc`], [`holland`],
//!   [`hogan`]): validate raw payloads into standardized profiles and map
//!   them onto fixed-length vectors under static index schemas
//! - **Fusion** ([`fusion`]): weighted disjoint placement of framework
//!   vectors plus blended compound-trait slots into the composite embedding
//! - **Compound traits** ([`derive`]): cross-framework scores from the
//!   versioned coefficient table, rescaled to [0, 100]
//! - **Comparison** ([`compare`]): context-weighted fit scoring
//! - **Pipeline** ([`pipeline`]): the end-to-end standardize → vectorize →
//!   derive → fuse flow
//!
//! # Example
//!
//! ```rust,ignore
//! use lens_frameworks::pipeline::LensPipeline;
//! use lens_core::types::{ProfileType, RawAssessmentInput};
//!
//! let pipeline = LensPipeline::with_defaults();
//! let profile = pipeline.build_profile(&raw, ProfileType::Individual, Default::default())?;
//! assert_eq!(profile.embedding.dimension(), 128);
//! ```

pub mod compare;
pub mod derive;
pub mod dimensions;
pub mod disc;
pub mod fusion;
pub mod hogan;
pub mod holland;
pub mod mbti;
pub mod pipeline;
mod scores;

pub use compare::ComparisonEngine;
pub use fusion::{fuse, FrameworkVectors};
pub use pipeline::LensPipeline;
