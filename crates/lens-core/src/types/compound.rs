//! Compound cross-framework trait scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named cross-framework traits derived from standardized profiles.
///
/// The variant order is the canonical order of the compound-trait slots in
/// the composite embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundTrait {
    Adaptability,
    LeadershipPotential,
    InnovationOrientation,
    TeamOrientation,
    StressResilience,
    CulturalAgility,
    CareerMobility,
    LearningOrientation,
}

impl CompoundTrait {
    /// All traits in canonical slot order.
    pub const ALL: [CompoundTrait; 8] = [
        CompoundTrait::Adaptability,
        CompoundTrait::LeadershipPotential,
        CompoundTrait::InnovationOrientation,
        CompoundTrait::TeamOrientation,
        CompoundTrait::StressResilience,
        CompoundTrait::CulturalAgility,
        CompoundTrait::CareerMobility,
        CompoundTrait::LearningOrientation,
    ];

    /// Canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundTrait::Adaptability => "adaptability",
            CompoundTrait::LeadershipPotential => "leadership_potential",
            CompoundTrait::InnovationOrientation => "innovation_orientation",
            CompoundTrait::TeamOrientation => "team_orientation",
            CompoundTrait::StressResilience => "stress_resilience",
            CompoundTrait::CulturalAgility => "cultural_agility",
            CompoundTrait::CareerMobility => "career_mobility",
            CompoundTrait::LearningOrientation => "learning_orientation",
        }
    }
}

impl fmt::Display for CompoundTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived compound trait scores, each in [0, 100].
///
/// Always recomputed from standardized profiles; never mutated or stored
/// as an independent source of truth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompoundTraits {
    pub adaptability: f32,
    pub leadership_potential: f32,
    pub innovation_orientation: f32,
    pub team_orientation: f32,
    pub stress_resilience: f32,
    pub cultural_agility: f32,
    pub career_mobility: f32,
    pub learning_orientation: f32,
}

impl CompoundTraits {
    /// Read a score by trait name.
    pub fn get(&self, trait_name: CompoundTrait) -> f32 {
        match trait_name {
            CompoundTrait::Adaptability => self.adaptability,
            CompoundTrait::LeadershipPotential => self.leadership_potential,
            CompoundTrait::InnovationOrientation => self.innovation_orientation,
            CompoundTrait::TeamOrientation => self.team_orientation,
            CompoundTrait::StressResilience => self.stress_resilience,
            CompoundTrait::CulturalAgility => self.cultural_agility,
            CompoundTrait::CareerMobility => self.career_mobility,
            CompoundTrait::LearningOrientation => self.learning_orientation,
        }
    }

    /// Write a score by trait name.
    pub fn set(&mut self, trait_name: CompoundTrait, score: f32) {
        let slot = match trait_name {
            CompoundTrait::Adaptability => &mut self.adaptability,
            CompoundTrait::LeadershipPotential => &mut self.leadership_potential,
            CompoundTrait::InnovationOrientation => &mut self.innovation_orientation,
            CompoundTrait::TeamOrientation => &mut self.team_orientation,
            CompoundTrait::StressResilience => &mut self.stress_resilience,
            CompoundTrait::CulturalAgility => &mut self.cultural_agility,
            CompoundTrait::CareerMobility => &mut self.career_mobility,
            CompoundTrait::LearningOrientation => &mut self.learning_orientation,
        };
        *slot = score;
    }

    /// Scores in canonical slot order.
    pub fn to_vector(&self) -> [f32; 8] {
        let mut out = [0.0f32; 8];
        for (slot, trait_name) in out.iter_mut().zip(CompoundTrait::ALL) {
            *slot = self.get(trait_name);
        }
        out
    }

    /// Iterate (trait, score) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CompoundTrait, f32)> + '_ {
        CompoundTrait::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_round_trip_for_every_trait() {
        let mut traits = CompoundTraits::default();
        for (i, t) in CompoundTrait::ALL.into_iter().enumerate() {
            traits.set(t, i as f32 * 10.0);
        }
        for (i, t) in CompoundTrait::ALL.into_iter().enumerate() {
            assert_eq!(traits.get(t), i as f32 * 10.0);
        }
    }

    #[test]
    fn to_vector_follows_canonical_order() {
        let mut traits = CompoundTraits::default();
        traits.adaptability = 1.0;
        traits.learning_orientation = 8.0;
        let v = traits.to_vector();
        assert_eq!(v[0], 1.0);
        assert_eq!(v[7], 8.0);
    }

    #[test]
    fn trait_names_serialize_snake_case() {
        let json = serde_json::to_string(&CompoundTrait::LeadershipPotential).unwrap();
        assert_eq!(json, "\"leadership_potential\"");
    }
}
