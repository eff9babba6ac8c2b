//! Standardized per-framework profiles.
//!
//! Each profile holds named scalar fields in [0.0, 1.0]. Constructors clamp
//! out-of-range values rather than rejecting them; missing fields are a
//! validation concern handled upstream by the standardizers. Derived
//! categorical labels (type codes, style letters, interest codes) are pure
//! functions of the numeric fields and are never stored.

use serde::{Deserialize, Serialize};

fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Four-dichotomy type profile (MBTI analog).
///
/// Each field measures the strength of the first-letter pole: a value of
/// 0.8 for `extraversion` reads as strongly E, 0.2 as strongly I.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MbtiProfile {
    /// Extraversion (E) vs. introversion (I), [0, 1].
    pub extraversion: f32,
    /// Intuition (N) vs. sensing (S), [0, 1].
    pub intuition: f32,
    /// Thinking (T) vs. feeling (F), [0, 1].
    pub thinking: f32,
    /// Judging (J) vs. perceiving (P), [0, 1].
    pub judging: f32,
}

impl MbtiProfile {
    /// Build a profile, clamping every field to [0, 1].
    pub fn new(extraversion: f32, intuition: f32, thinking: f32, judging: f32) -> Self {
        Self {
            extraversion: clamp_unit(extraversion),
            intuition: clamp_unit(intuition),
            thinking: clamp_unit(thinking),
            judging: clamp_unit(judging),
        }
    }

    /// Derive the 4-letter type code from the dichotomy scores.
    ///
    /// A score of exactly 0.5 resolves to the first-letter pole.
    pub fn type_code(&self) -> String {
        let mut code = String::with_capacity(4);
        code.push(if self.extraversion >= 0.5 { 'E' } else { 'I' });
        code.push(if self.intuition >= 0.5 { 'N' } else { 'S' });
        code.push(if self.thinking >= 0.5 { 'T' } else { 'F' });
        code.push(if self.judging >= 0.5 { 'J' } else { 'P' });
        code
    }

    /// Dichotomy scores in declared order (E/I, N/S, T/F, J/P).
    pub fn field_values(&self) -> [f32; 4] {
        [self.extraversion, self.intuition, self.thinking, self.judging]
    }
}

/// Behavioral-style profile (DISC analog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscProfile {
    pub dominance: f32,
    pub influence: f32,
    pub steadiness: f32,
    pub conscientiousness: f32,
}

impl DiscProfile {
    /// Build a profile, clamping every field to [0, 1].
    pub fn new(dominance: f32, influence: f32, steadiness: f32, conscientiousness: f32) -> Self {
        Self {
            dominance: clamp_unit(dominance),
            influence: clamp_unit(influence),
            steadiness: clamp_unit(steadiness),
            conscientiousness: clamp_unit(conscientiousness),
        }
    }

    /// Derive the primary style letter. Ties resolve in D, I, S, C order.
    pub fn primary_style(&self) -> char {
        let fields = [
            ('D', self.dominance),
            ('I', self.influence),
            ('S', self.steadiness),
            ('C', self.conscientiousness),
        ];
        let mut best = fields[0];
        for candidate in &fields[1..] {
            if candidate.1 > best.1 {
                best = *candidate;
            }
        }
        best.0
    }

    /// Style scores in declared order (D, I, S, C).
    pub fn field_values(&self) -> [f32; 4] {
        [
            self.dominance,
            self.influence,
            self.steadiness,
            self.conscientiousness,
        ]
    }
}

/// RIASEC interest profile (Holland analog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HollandProfile {
    pub realistic: f32,
    pub investigative: f32,
    pub artistic: f32,
    pub social: f32,
    pub enterprising: f32,
    pub conventional: f32,
}

impl HollandProfile {
    /// Build a profile, clamping every field to [0, 1].
    pub fn new(
        realistic: f32,
        investigative: f32,
        artistic: f32,
        social: f32,
        enterprising: f32,
        conventional: f32,
    ) -> Self {
        Self {
            realistic: clamp_unit(realistic),
            investigative: clamp_unit(investigative),
            artistic: clamp_unit(artistic),
            social: clamp_unit(social),
            enterprising: clamp_unit(enterprising),
            conventional: clamp_unit(conventional),
        }
    }

    /// Derive the 3-letter interest code: top three interests by score,
    /// ties broken by canonical RIASEC order.
    pub fn interest_code(&self) -> String {
        const LETTERS: [char; 6] = ['R', 'I', 'A', 'S', 'E', 'C'];
        let scores = self.field_values();
        let mut order: Vec<usize> = (0..6).collect();
        // Stable sort keeps RIASEC order among equal scores.
        order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(std::cmp::Ordering::Equal));
        order.iter().take(3).map(|&i| LETTERS[i]).collect()
    }

    /// Interest scores in canonical RIASEC order.
    pub fn field_values(&self) -> [f32; 6] {
        [
            self.realistic,
            self.investigative,
            self.artistic,
            self.social,
            self.enterprising,
            self.conventional,
        ]
    }
}

/// Personality inventory profile (Hogan analog): 7 potential scales,
/// 11 risk scales, 10 values scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoganProfile {
    pub potential: HoganPotential,
    pub risk: HoganRisk,
    pub values: HoganValues,
}

/// Day-to-day potential scales (HPI analog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoganPotential {
    pub adjustment: f32,
    pub ambition: f32,
    pub sociability: f32,
    pub interpersonal_sensitivity: f32,
    pub prudence: f32,
    pub inquisitive: f32,
    pub learning_approach: f32,
}

/// Derailment risk scales (HDS analog). Higher means more at-risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoganRisk {
    pub excitable: f32,
    pub skeptical: f32,
    pub cautious: f32,
    pub reserved: f32,
    pub leisurely: f32,
    pub bold: f32,
    pub mischievous: f32,
    pub colorful: f32,
    pub imaginative: f32,
    pub diligent: f32,
    pub dutiful: f32,
}

/// Motives and values scales (MVPI analog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoganValues {
    pub recognition: f32,
    pub power: f32,
    pub hedonism: f32,
    pub altruism: f32,
    pub affiliation: f32,
    pub tradition: f32,
    pub security: f32,
    pub commerce: f32,
    pub aesthetics: f32,
    pub science: f32,
}

impl HoganProfile {
    /// Build a profile from the 28 scales in declared order, clamping
    /// every value to [0, 1].
    pub fn from_scales(scales: &[f32; 28]) -> Self {
        let s: Vec<f32> = scales.iter().copied().map(clamp_unit).collect();
        Self {
            potential: HoganPotential {
                adjustment: s[0],
                ambition: s[1],
                sociability: s[2],
                interpersonal_sensitivity: s[3],
                prudence: s[4],
                inquisitive: s[5],
                learning_approach: s[6],
            },
            risk: HoganRisk {
                excitable: s[7],
                skeptical: s[8],
                cautious: s[9],
                reserved: s[10],
                leisurely: s[11],
                bold: s[12],
                mischievous: s[13],
                colorful: s[14],
                imaginative: s[15],
                diligent: s[16],
                dutiful: s[17],
            },
            values: HoganValues {
                recognition: s[18],
                power: s[19],
                hedonism: s[20],
                altruism: s[21],
                affiliation: s[22],
                tradition: s[23],
                security: s[24],
                commerce: s[25],
                aesthetics: s[26],
                science: s[27],
            },
        }
    }

    /// All 28 scales in declared order: potential, then risk, then values.
    pub fn field_values(&self) -> [f32; 28] {
        [
            self.potential.adjustment,
            self.potential.ambition,
            self.potential.sociability,
            self.potential.interpersonal_sensitivity,
            self.potential.prudence,
            self.potential.inquisitive,
            self.potential.learning_approach,
            self.risk.excitable,
            self.risk.skeptical,
            self.risk.cautious,
            self.risk.reserved,
            self.risk.leisurely,
            self.risk.bold,
            self.risk.mischievous,
            self.risk.colorful,
            self.risk.imaginative,
            self.risk.diligent,
            self.risk.dutiful,
            self.values.recognition,
            self.values.power,
            self.values.hedonism,
            self.values.altruism,
            self.values.affiliation,
            self.values.tradition,
            self.values.security,
            self.values.commerce,
            self.values.aesthetics,
            self.values.science,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mbti_clamps_out_of_range_fields() {
        let p = MbtiProfile::new(1.4, -0.2, 0.5, 0.5);
        assert_eq!(p.extraversion, 1.0);
        assert_eq!(p.intuition, 0.0);
    }

    #[test]
    fn mbti_type_code_resolves_midpoint_to_first_pole() {
        let p = MbtiProfile::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(p.type_code(), "ENTJ");
        let q = MbtiProfile::new(0.2, 0.9, 0.4, 0.6);
        assert_eq!(q.type_code(), "INFJ");
    }

    #[test]
    fn disc_primary_style_ties_resolve_in_disc_order() {
        let p = DiscProfile::new(0.7, 0.7, 0.3, 0.3);
        assert_eq!(p.primary_style(), 'D');
        let q = DiscProfile::new(0.1, 0.2, 0.9, 0.4);
        assert_eq!(q.primary_style(), 'S');
    }

    #[test]
    fn holland_interest_code_takes_top_three() {
        let p = HollandProfile::new(0.1, 0.9, 0.8, 0.7, 0.2, 0.3);
        assert_eq!(p.interest_code(), "IAS");
    }

    #[test]
    fn holland_interest_code_ties_keep_riasec_order() {
        let p = HollandProfile::new(0.5, 0.5, 0.5, 0.5, 0.5, 0.5);
        assert_eq!(p.interest_code(), "RIA");
    }

    #[test]
    fn hogan_round_trips_through_field_values() {
        let mut scales = [0.0f32; 28];
        for (i, s) in scales.iter_mut().enumerate() {
            *s = i as f32 / 28.0;
        }
        let p = HoganProfile::from_scales(&scales);
        assert_eq!(p.field_values(), scales);
        assert_eq!(p.potential.adjustment, 0.0);
        assert_eq!(p.values.science, 27.0 / 28.0);
    }

    #[test]
    fn profiles_serialize_round_trip() {
        let p = HollandProfile::new(0.1, 0.2, 0.3, 0.4, 0.5, 0.6);
        let json = serde_json::to_string(&p).unwrap();
        let back: HollandProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
