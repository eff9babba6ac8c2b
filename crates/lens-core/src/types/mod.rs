//! Domain types for the profile lens engine.

mod comparison;
mod compound;
pub mod embedding;
mod frameworks;
mod kind;
mod profile;
mod raw;

pub use comparison::{ComparisonContext, ComparisonResult, FrameworkScores};
pub use compound::{CompoundTrait, CompoundTraits};
pub use embedding::{CompositeEmbedding, EMBEDDING_SCHEMA_VERSION};
pub use frameworks::{
    DiscProfile, HoganPotential, HoganProfile, HoganRisk, HoganValues, HollandProfile, MbtiProfile,
};
pub use kind::FrameworkKind;
pub use profile::{IntegratedProfile, ProfileId, ProfileMetadata, ProfileType, StandardizedSet};
pub use raw::{RawAssessmentInput, RawScores};
