//! Integrated multi-framework profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::{LensError, LensResult};
use crate::types::{
    CompositeEmbedding, CompoundTraits, DiscProfile, FrameworkKind, HoganProfile, HollandProfile,
    MbtiProfile,
};

/// Unique identifier for integrated profiles.
pub type ProfileId = Uuid;

/// Opaque caller metadata, passed through to the store uninterpreted.
pub type ProfileMetadata = BTreeMap<String, serde_json::Value>;

/// What kind of entity a profile describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    #[default]
    Individual,
    Organization,
}

impl ProfileType {
    /// Canonical lowercase name, used in store metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Individual => "individual",
            ProfileType::Organization => "organization",
        }
    }
}

/// Borrowed view of a profile's four standardized profiles, available only
/// when all four are present.
#[derive(Debug, Clone, Copy)]
pub struct StandardizedSet<'a> {
    pub mbti: &'a MbtiProfile,
    pub disc: &'a DiscProfile,
    pub holland: &'a HollandProfile,
    pub hogan: &'a HoganProfile,
}

/// A complete multi-framework profile with its fused embedding.
///
/// Immutable once created: an update is a new profile with a new ID, never
/// a mutation, so historical comparisons stay reproducible. Durability is
/// owned by the external profile store, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedProfile {
    /// Opaque identity.
    pub id: ProfileId,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Individual or organization.
    pub profile_type: ProfileType,

    /// Standardized framework profiles. Profiles built by the pipeline
    /// always carry all four; externally sourced ones may not, and every
    /// computation over them revalidates completeness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbti: Option<MbtiProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc: Option<DiscProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holland: Option<HollandProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hogan: Option<HoganProfile>,

    /// The fused composite embedding.
    pub embedding: CompositeEmbedding,

    /// Derived cross-framework scores, recomputable from the profiles.
    pub compound_traits: CompoundTraits,

    /// Opaque caller metadata.
    #[serde(default)]
    pub metadata: ProfileMetadata,
}

impl IntegratedProfile {
    /// Assemble a complete profile with a fresh ID and timestamp.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile_type: ProfileType,
        mbti: MbtiProfile,
        disc: DiscProfile,
        holland: HollandProfile,
        hogan: HoganProfile,
        embedding: CompositeEmbedding,
        compound_traits: CompoundTraits,
        metadata: ProfileMetadata,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            profile_type,
            mbti: Some(mbti),
            disc: Some(disc),
            holland: Some(holland),
            hogan: Some(hogan),
            embedding,
            compound_traits,
            metadata,
        }
    }

    /// Borrow all four standardized profiles, or fail with an incomplete
    /// profile error naming every missing framework.
    pub fn standardized(&self) -> LensResult<StandardizedSet<'_>> {
        let mut missing = Vec::new();
        if self.mbti.is_none() {
            missing.push(FrameworkKind::Mbti);
        }
        if self.disc.is_none() {
            missing.push(FrameworkKind::Disc);
        }
        if self.holland.is_none() {
            missing.push(FrameworkKind::Holland);
        }
        if self.hogan.is_none() {
            missing.push(FrameworkKind::Hogan);
        }
        if !missing.is_empty() {
            return Err(LensError::IncompleteProfile {
                profile_id: self.id,
                missing,
            });
        }
        Ok(StandardizedSet {
            mbti: self.mbti.as_ref().unwrap(),
            disc: self.disc.as_ref().unwrap(),
            holland: self.holland.as_ref().unwrap(),
            hogan: self.hogan.as_ref().unwrap(),
        })
    }
}
