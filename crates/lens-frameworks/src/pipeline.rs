//! Profile construction pipeline: raw assessment input → integrated profile.

use lens_core::config::LensConfig;
use lens_core::types::{
    IntegratedProfile, ProfileMetadata, ProfileType, RawAssessmentInput, StandardizedSet,
};
use lens_core::LensResult;
use tracing::debug;

use crate::compare::ComparisonEngine;
use crate::derive::derive_traits;
use crate::fusion::{fuse, FrameworkVectors};
use crate::{disc, hogan, holland, mbti};

/// Standardize → vectorize → derive → fuse, producing immutable
/// [`IntegratedProfile`]s.
///
/// Holds the validated configuration tables loaded at process start. The
/// pipeline is pure computation with no shared mutable state; one instance
/// can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct LensPipeline {
    config: LensConfig,
}

impl LensPipeline {
    /// Create a pipeline over a configuration, validating it first.
    pub fn new(config: LensConfig) -> LensResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Pipeline with default configuration tables.
    pub fn with_defaults() -> Self {
        // The default tables always validate.
        Self {
            config: LensConfig::default(),
        }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    /// A comparison engine sharing this pipeline's context weight table.
    pub fn comparison_engine(&self) -> ComparisonEngine {
        ComparisonEngine::new(self.config.contexts.clone())
    }

    /// Build an integrated profile from raw assessment input.
    ///
    /// Each framework payload is validated and standardized, vectorized
    /// under its static schema, compound traits are derived, and the
    /// vectors fused into the composite embedding. The returned profile is
    /// complete and immutable; callers persist it explicitly through a
    /// profile store if desired.
    pub fn build_profile(
        &self,
        raw: &RawAssessmentInput,
        profile_type: ProfileType,
        metadata: ProfileMetadata,
    ) -> LensResult<IntegratedProfile> {
        let mbti_profile = mbti::standardize(&raw.mbti)?;
        let disc_profile = disc::standardize(&raw.disc)?;
        let holland_profile = holland::standardize(&raw.holland)?;
        let hogan_profile = hogan::standardize(&raw.hogan)?;
        debug!(profile_type = profile_type.as_str(), "standardized all frameworks");

        let vectors = FrameworkVectors {
            mbti: mbti::vectorize(&mbti_profile),
            disc: disc::vectorize(&disc_profile),
            holland: holland::vectorize(&holland_profile),
            hogan: hogan::vectorize(&hogan_profile),
        };

        let set = StandardizedSet {
            mbti: &mbti_profile,
            disc: &disc_profile,
            holland: &holland_profile,
            hogan: &hogan_profile,
        };
        let traits = derive_traits(&set, &self.config.coefficients)?;
        let embedding = fuse(&vectors, &traits, &self.config.fusion)?;

        Ok(IntegratedProfile::new(
            profile_type,
            mbti_profile,
            disc_profile,
            holland_profile,
            hogan_profile,
            embedding,
            traits,
            metadata,
        ))
    }
}

impl Default for LensPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
