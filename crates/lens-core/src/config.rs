//! Configuration tables for the profile lens engine.
//!
//! All framework weights, context weight vectors, and compound-trait
//! coefficient tables are explicit, versioned configuration loaded once at
//! process start and treated as read-only afterwards. Loading validates
//! every table and fails fast on malformed input; nothing is looked up by
//! ad hoc string keys at call time.
//!
//! Configuration is loaded in order:
//! 1. `config/default.toml` (base settings)
//! 2. `config/{PROFILE_LENS_ENV}.toml` (environment-specific)
//! 3. Environment variables with the `PROFILE_LENS` prefix

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{LensError, LensResult};
use crate::types::{CompoundTrait, StandardizedSet};

/// Version tag for the default coefficient and weight tables.
///
/// The coefficients shipped here are an illustrative, replaceable artifact;
/// deployments tune them via config files and bump this tag when they do.
pub const DEFAULT_TABLE_VERSION: &str = "2024.1";

/// Weight normalization tolerance.
pub const WEIGHT_EPSILON: f64 = 1e-9;

// =============================================================================
// Fusion weights
// =============================================================================

/// Per-framework contribution weights for vector fusion.
///
/// Weights are normalized to sum to 1.0 before use, so only their ratios
/// matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionWeights {
    pub mbti: f32,
    pub disc: f32,
    pub holland: f32,
    pub hogan: f32,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            mbti: 0.3,
            disc: 0.25,
            holland: 0.2,
            hogan: 0.25,
        }
    }
}

impl FusionWeights {
    /// Weights in canonical framework order.
    pub fn as_array(&self) -> [f32; 4] {
        [self.mbti, self.disc, self.holland, self.hogan]
    }

    /// Normalize so the weights sum to 1.0.
    ///
    /// Fails with a config error when any weight is negative or non-finite,
    /// or the sum is zero.
    pub fn normalized(&self) -> LensResult<[f32; 4]> {
        let raw = self.as_array();
        validate_weight_set("fusion", &raw)?;
        let sum: f64 = raw.iter().map(|w| *w as f64).sum();
        let mut out = [0.0f32; 4];
        for (o, w) in out.iter_mut().zip(raw) {
            *o = (w as f64 / sum) as f32;
        }
        Ok(out)
    }
}

fn validate_weight_set(name: &str, weights: &[f32]) -> LensResult<()> {
    for w in weights {
        if !w.is_finite() || *w < 0.0 {
            return Err(LensError::Config(format!(
                "{name} weights must be finite and non-negative, got {w}"
            )));
        }
    }
    let sum: f64 = weights.iter().map(|w| *w as f64).sum();
    if sum <= WEIGHT_EPSILON {
        return Err(LensError::Config(format!(
            "{name} weights must not all be zero"
        )));
    }
    Ok(())
}

// =============================================================================
// Context weight vectors
// =============================================================================

/// Weight vector applied by the comparison engine under one context.
///
/// Covers the composite-similarity term plus the four framework sub-scores.
/// Normalized to sum to 1.0 before synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextWeights {
    pub composite: f32,
    pub mbti: f32,
    pub disc: f32,
    pub holland: f32,
    pub hogan: f32,
}

impl ContextWeights {
    /// Normalize so the weights sum to 1.0.
    pub fn normalized(&self) -> LensResult<[f32; 5]> {
        let raw = [self.composite, self.mbti, self.disc, self.holland, self.hogan];
        validate_weight_set("context", &raw)?;
        let sum: f64 = raw.iter().map(|w| *w as f64).sum();
        let mut out = [0.0f32; 5];
        for (o, w) in out.iter_mut().zip(raw) {
            *o = (w as f64 / sum) as f32;
        }
        Ok(out)
    }
}

/// Fixed table of recognized comparison contexts and their weight vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextWeightTable {
    pub team_member_relationship: ContextWeights,
    pub individual_to_organization: ContextWeights,
    pub candidate_to_role: ContextWeights,
    pub peer_collaboration: ContextWeights,
}

impl Default for ContextWeightTable {
    fn default() -> Self {
        Self {
            // Peers: frameworks roughly equal, composite anchors the score.
            team_member_relationship: ContextWeights {
                composite: 0.2,
                mbti: 0.2,
                disc: 0.2,
                holland: 0.2,
                hogan: 0.2,
            },
            // Culture fit: interests and values dominate.
            individual_to_organization: ContextWeights {
                composite: 0.2,
                mbti: 0.1,
                disc: 0.1,
                holland: 0.3,
                hogan: 0.3,
            },
            // Role fit: behavioral style and inventory scales dominate.
            candidate_to_role: ContextWeights {
                composite: 0.15,
                mbti: 0.15,
                disc: 0.25,
                holland: 0.2,
                hogan: 0.25,
            },
            // Collaboration: interaction style dominates.
            peer_collaboration: ContextWeights {
                composite: 0.15,
                mbti: 0.3,
                disc: 0.3,
                holland: 0.1,
                hogan: 0.15,
            },
        }
    }
}

impl ContextWeightTable {
    /// Weight vector for a context.
    pub fn weights_for(&self, context: crate::types::ComparisonContext) -> &ContextWeights {
        use crate::types::ComparisonContext::*;
        match context {
            TeamMemberRelationship => &self.team_member_relationship,
            IndividualToOrganization => &self.individual_to_organization,
            CandidateToRole => &self.candidate_to_role,
            PeerCollaboration => &self.peer_collaboration,
        }
    }

    fn validate(&self) -> LensResult<()> {
        for context in crate::types::ComparisonContext::ALL {
            self.weights_for(context).normalized().map_err(|e| {
                LensError::Config(format!("context '{context}': {e}"))
            })?;
        }
        Ok(())
    }
}

// =============================================================================
// Compound-trait coefficient table
// =============================================================================

/// Addressable standardized-profile field, used by trait coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRef {
    Mbti(MbtiField),
    Disc(DiscField),
    Holland(HollandField),
    Hogan(HoganField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MbtiField {
    Extraversion,
    Intuition,
    Thinking,
    Judging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscField {
    Dominance,
    Influence,
    Steadiness,
    Conscientiousness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HollandField {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoganField {
    Adjustment,
    Ambition,
    Sociability,
    InterpersonalSensitivity,
    Prudence,
    Inquisitive,
    LearningApproach,
    Excitable,
    Skeptical,
    Cautious,
    Reserved,
    Leisurely,
    Bold,
    Mischievous,
    Colorful,
    Imaginative,
    Diligent,
    Dutiful,
    Recognition,
    Power,
    Hedonism,
    Altruism,
    Affiliation,
    Tradition,
    Security,
    Commerce,
    Aesthetics,
    Science,
}

impl FieldRef {
    /// Read this field's standardized value, in [0, 1].
    pub fn value(&self, set: &StandardizedSet<'_>) -> f32 {
        match self {
            FieldRef::Mbti(f) => {
                let p = set.mbti;
                match f {
                    MbtiField::Extraversion => p.extraversion,
                    MbtiField::Intuition => p.intuition,
                    MbtiField::Thinking => p.thinking,
                    MbtiField::Judging => p.judging,
                }
            }
            FieldRef::Disc(f) => {
                let p = set.disc;
                match f {
                    DiscField::Dominance => p.dominance,
                    DiscField::Influence => p.influence,
                    DiscField::Steadiness => p.steadiness,
                    DiscField::Conscientiousness => p.conscientiousness,
                }
            }
            FieldRef::Holland(f) => {
                let p = set.holland;
                match f {
                    HollandField::Realistic => p.realistic,
                    HollandField::Investigative => p.investigative,
                    HollandField::Artistic => p.artistic,
                    HollandField::Social => p.social,
                    HollandField::Enterprising => p.enterprising,
                    HollandField::Conventional => p.conventional,
                }
            }
            FieldRef::Hogan(f) => {
                let p = set.hogan;
                match f {
                    HoganField::Adjustment => p.potential.adjustment,
                    HoganField::Ambition => p.potential.ambition,
                    HoganField::Sociability => p.potential.sociability,
                    HoganField::InterpersonalSensitivity => p.potential.interpersonal_sensitivity,
                    HoganField::Prudence => p.potential.prudence,
                    HoganField::Inquisitive => p.potential.inquisitive,
                    HoganField::LearningApproach => p.potential.learning_approach,
                    HoganField::Excitable => p.risk.excitable,
                    HoganField::Skeptical => p.risk.skeptical,
                    HoganField::Cautious => p.risk.cautious,
                    HoganField::Reserved => p.risk.reserved,
                    HoganField::Leisurely => p.risk.leisurely,
                    HoganField::Bold => p.risk.bold,
                    HoganField::Mischievous => p.risk.mischievous,
                    HoganField::Colorful => p.risk.colorful,
                    HoganField::Imaginative => p.risk.imaginative,
                    HoganField::Diligent => p.risk.diligent,
                    HoganField::Dutiful => p.risk.dutiful,
                    HoganField::Recognition => p.values.recognition,
                    HoganField::Power => p.values.power,
                    HoganField::Hedonism => p.values.hedonism,
                    HoganField::Altruism => p.values.altruism,
                    HoganField::Affiliation => p.values.affiliation,
                    HoganField::Tradition => p.values.tradition,
                    HoganField::Security => p.values.security,
                    HoganField::Commerce => p.values.commerce,
                    HoganField::Aesthetics => p.values.aesthetics,
                    HoganField::Science => p.values.science,
                }
            }
        }
    }
}

/// One term of a compound-trait linear combination.
///
/// Weights are strictly positive; a term that should reward a *low* field
/// value sets `invert`, contributing `weight * (1 - value)`. With every
/// field in [0, 1] this keeps the combination's theoretical range at
/// [0, sum of weights], which is what the [0, 100] rescale divides by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitTerm {
    pub field: FieldRef,
    pub weight: f32,
    #[serde(default)]
    pub invert: bool,
}

impl TraitTerm {
    fn direct(field: FieldRef, weight: f32) -> Self {
        Self {
            field,
            weight,
            invert: false,
        }
    }

    fn inverted(field: FieldRef, weight: f32) -> Self {
        Self {
            field,
            weight,
            invert: true,
        }
    }
}

/// Versioned coefficient table for compound-trait derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTable {
    /// Table version, recorded so stored embeddings can be tied to the
    /// coefficients that produced their trait slots.
    pub version: String,
    /// Terms per trait. Every trait must have at least one term.
    pub terms: BTreeMap<CompoundTrait, Vec<TraitTerm>>,
}

impl Default for CoefficientTable {
    fn default() -> Self {
        use CompoundTrait::*;
        use DiscField as D;
        use FieldRef::*;
        use HoganField as Hg;
        use HollandField as H;
        use MbtiField as M;

        let mut terms = BTreeMap::new();
        terms.insert(
            Adaptability,
            vec![
                TraitTerm::direct(Mbti(M::Intuition), 0.3),
                TraitTerm::inverted(Disc(D::Steadiness), 0.4),
                TraitTerm::direct(Hogan(Hg::Adjustment), 0.3),
            ],
        );
        terms.insert(
            LeadershipPotential,
            vec![
                TraitTerm::direct(Hogan(Hg::Ambition), 0.35),
                TraitTerm::direct(Disc(D::Dominance), 0.3),
                TraitTerm::direct(Mbti(M::Thinking), 0.15),
                TraitTerm::direct(Hogan(Hg::Power), 0.2),
            ],
        );
        terms.insert(
            InnovationOrientation,
            vec![
                TraitTerm::direct(Mbti(M::Intuition), 0.35),
                TraitTerm::direct(Holland(H::Artistic), 0.25),
                TraitTerm::direct(Hogan(Hg::Inquisitive), 0.4),
            ],
        );
        terms.insert(
            TeamOrientation,
            vec![
                TraitTerm::direct(Disc(D::Influence), 0.2),
                TraitTerm::direct(Disc(D::Steadiness), 0.3),
                TraitTerm::direct(Holland(H::Social), 0.25),
                TraitTerm::direct(Hogan(Hg::Affiliation), 0.25),
            ],
        );
        terms.insert(
            StressResilience,
            vec![
                TraitTerm::direct(Hogan(Hg::Adjustment), 0.45),
                TraitTerm::inverted(Hogan(Hg::Excitable), 0.35),
                TraitTerm::direct(Disc(D::Steadiness), 0.2),
            ],
        );
        terms.insert(
            CulturalAgility,
            vec![
                TraitTerm::direct(Mbti(M::Intuition), 0.2),
                TraitTerm::direct(Hogan(Hg::InterpersonalSensitivity), 0.35),
                TraitTerm::direct(Holland(H::Social), 0.2),
                TraitTerm::inverted(Hogan(Hg::Tradition), 0.25),
            ],
        );
        terms.insert(
            CareerMobility,
            vec![
                TraitTerm::direct(Hogan(Hg::Ambition), 0.3),
                TraitTerm::direct(Holland(H::Enterprising), 0.3),
                TraitTerm::direct(Disc(D::Dominance), 0.2),
                TraitTerm::inverted(Hogan(Hg::Security), 0.2),
            ],
        );
        terms.insert(
            LearningOrientation,
            vec![
                TraitTerm::direct(Hogan(Hg::LearningApproach), 0.4),
                TraitTerm::direct(Hogan(Hg::Inquisitive), 0.3),
                TraitTerm::direct(Mbti(M::Intuition), 0.3),
            ],
        );

        Self {
            version: DEFAULT_TABLE_VERSION.to_string(),
            terms,
        }
    }
}

impl CoefficientTable {
    /// Terms for one trait.
    pub fn terms_for(&self, trait_name: CompoundTrait) -> LensResult<&[TraitTerm]> {
        self.terms
            .get(&trait_name)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                LensError::Config(format!("coefficient table missing trait '{trait_name}'"))
            })
    }

    fn validate(&self) -> LensResult<()> {
        if self.version.is_empty() {
            return Err(LensError::Config(
                "coefficient table version must not be empty".to_string(),
            ));
        }
        for trait_name in CompoundTrait::ALL {
            let terms = self.terms_for(trait_name)?;
            if terms.is_empty() {
                return Err(LensError::Config(format!(
                    "coefficient table has no terms for '{trait_name}'"
                )));
            }
            for term in terms {
                if !term.weight.is_finite() || term.weight <= 0.0 {
                    return Err(LensError::Config(format!(
                        "trait '{trait_name}' has non-positive weight {}",
                        term.weight
                    )));
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Store and top-level config
// =============================================================================

/// Settings for the profile store boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Bounded wait for store calls, in milliseconds.
    pub query_timeout_ms: u64,
    /// Advisory top-k passed to the store when the caller does not set one.
    pub default_top_k: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: 5_000,
            default_top_k: 50,
        }
    }
}

/// Complete lens configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LensConfig {
    #[serde(default)]
    pub fusion: FusionWeights,
    #[serde(default)]
    pub contexts: ContextWeightTable,
    #[serde(default)]
    pub coefficients: CoefficientTable,
    #[serde(default)]
    pub store: StoreConfig,
}

impl LensConfig {
    /// Load configuration from files and environment, then validate.
    pub fn load() -> LensResult<Self> {
        let env = std::env::var("PROFILE_LENS_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(config::Environment::with_prefix("PROFILE_LENS").separator("__"));

        let loaded: LensConfig = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Load configuration from a single TOML file, then validate.
    pub fn from_file(path: &std::path::Path) -> LensResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()).required(true));
        let loaded: LensConfig = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate every table, failing fast on the first malformed entry.
    pub fn validate(&self) -> LensResult<()> {
        self.fusion.normalized()?;
        self.contexts.validate()?;
        self.coefficients.validate()?;
        if self.store.query_timeout_ms == 0 {
            return Err(LensError::Config(
                "store query timeout must be positive".to_string(),
            ));
        }
        if self.store.default_top_k == 0 {
            return Err(LensError::Config(
                "store default top_k must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        DiscProfile, HoganProfile, HollandProfile, MbtiProfile, StandardizedSet,
    };

    #[test]
    fn default_config_validates() {
        LensConfig::default().validate().unwrap();
    }

    #[test]
    fn fusion_weights_normalize_to_unit_sum() {
        let weights = FusionWeights {
            mbti: 2.0,
            disc: 1.0,
            holland: 3.0,
            hogan: 2.0,
        };
        let normalized = weights.normalized().unwrap();
        let sum: f64 = normalized.iter().map(|w| *w as f64).sum();
        assert!((sum - 1.0).abs() < WEIGHT_EPSILON);
        assert!((normalized[0] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn all_zero_fusion_weights_are_rejected() {
        let weights = FusionWeights {
            mbti: 0.0,
            disc: 0.0,
            holland: 0.0,
            hogan: 0.0,
        };
        assert!(weights.normalized().is_err());
    }

    #[test]
    fn negative_weight_is_rejected() {
        let weights = FusionWeights {
            mbti: -0.1,
            disc: 0.5,
            holland: 0.3,
            hogan: 0.3,
        };
        assert!(weights.normalized().is_err());
    }

    #[test]
    fn coefficient_table_covers_every_trait() {
        let table = CoefficientTable::default();
        for trait_name in CompoundTrait::ALL {
            assert!(!table.terms_for(trait_name).unwrap().is_empty());
        }
    }

    #[test]
    fn empty_trait_terms_fail_validation() {
        let mut table = CoefficientTable::default();
        table
            .terms
            .insert(CompoundTrait::Adaptability, Vec::new());
        let config = LensConfig {
            coefficients: table,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn field_ref_reads_the_addressed_field() {
        let mbti = MbtiProfile::new(0.9, 0.2, 0.3, 0.4);
        let disc = DiscProfile::new(0.1, 0.2, 0.8, 0.4);
        let holland = HollandProfile::new(0.1, 0.2, 0.3, 0.7, 0.5, 0.6);
        let hogan = HoganProfile::from_scales(&[0.25; 28]);
        let set = StandardizedSet {
            mbti: &mbti,
            disc: &disc,
            holland: &holland,
            hogan: &hogan,
        };
        assert_eq!(FieldRef::Mbti(MbtiField::Extraversion).value(&set), 0.9);
        assert_eq!(FieldRef::Disc(DiscField::Steadiness).value(&set), 0.8);
        assert_eq!(FieldRef::Holland(HollandField::Social).value(&set), 0.7);
        assert_eq!(FieldRef::Hogan(HoganField::Science).value(&set), 0.25);
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = LensConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: LensConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn from_file_overrides_only_named_sections() {
        use std::io::Write;

        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[store]\nquery_timeout_ms = 1000\ndefault_top_k = 5").unwrap();

        let config = LensConfig::from_file(file.path()).unwrap();
        assert_eq!(config.store.query_timeout_ms, 1000);
        assert_eq!(config.store.default_top_k, 5);
        assert_eq!(config.fusion, FusionWeights::default());
    }
}
