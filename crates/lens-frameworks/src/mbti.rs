//! MBTI-analog framework processor.
//!
//! Vector layout (length 8):
//! - [0..4): the four dichotomy scores (E/I, N/S, T/F, J/P)
//! - [4..8): derived preference-clarity components, one per dichotomy,
//!   computed as `|score - 0.5| * 2`. A clarity of 1.0 means a maximally
//!   expressed preference on that axis regardless of its direction; 0.0
//!   means the axis is balanced. Pure function of the profile.

use lens_core::types::{FrameworkKind, MbtiProfile, RawScores};
use lens_core::LensResult;

use crate::dimensions::MBTI_DIM;
use crate::scores::require_fields;

/// Required raw fields, in vector order.
pub const REQUIRED_FIELDS: [&str; 4] = ["extraversion", "intuition", "thinking", "judging"];

/// Validate and standardize a raw MBTI payload.
///
/// The 4-letter type code is always derivable, so raw payloads never need
/// to supply it.
pub fn standardize(raw: &RawScores) -> LensResult<MbtiProfile> {
    let v = require_fields(FrameworkKind::Mbti, raw, &REQUIRED_FIELDS)?;
    Ok(MbtiProfile::new(v[0], v[1], v[2], v[3]))
}

/// Map a standardized profile to its fixed-length vector.
pub fn vectorize(profile: &MbtiProfile) -> Vec<f32> {
    let fields = profile.field_values();
    let mut vector = Vec::with_capacity(MBTI_DIM);
    vector.extend_from_slice(&fields);
    for score in fields {
        vector.push(clarity(score));
    }
    debug_assert_eq!(vector.len(), MBTI_DIM);
    vector
}

/// Preference clarity for one dichotomy score.
#[inline]
fn clarity(score: f32) -> f32 {
    (score - 0.5).abs() * 2.0
}

/// Symmetric similarity between two profiles, in [0, 1].
///
/// Blends dichotomy closeness (1 - mean absolute difference) with type
/// compatibility (fraction of shared type-code letters), equally weighted.
pub fn compare(a: &MbtiProfile, b: &MbtiProfile) -> f32 {
    let fa = a.field_values();
    let fb = b.field_values();
    let mean_diff: f32 = fa
        .iter()
        .zip(fb.iter())
        .map(|(x, y)| (x - y).abs())
        .sum::<f32>()
        / fa.len() as f32;
    let dimension_score = 1.0 - mean_diff;

    let shared_letters = a
        .type_code()
        .chars()
        .zip(b.type_code().chars())
        .filter(|(x, y)| x == y)
        .count();
    let type_score = shared_letters as f32 / 4.0;

    (0.5 * dimension_score + 0.5 * type_score).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_input() -> RawScores {
        [
            ("extraversion", json!(0.8)),
            ("intuition", json!(0.3)),
            ("thinking", json!(0.6)),
            ("judging", json!(0.5)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    #[test]
    fn standardize_then_vectorize_is_deterministic() {
        let raw = raw_input();
        let v1 = vectorize(&standardize(&raw).unwrap());
        let v2 = vectorize(&standardize(&raw).unwrap());
        assert_eq!(v1, v2);
        assert_eq!(v1.len(), MBTI_DIM);
    }

    #[test]
    fn vector_carries_fields_then_clarity() {
        let profile = MbtiProfile::new(0.8, 0.3, 0.6, 0.5);
        let v = vectorize(&profile);
        assert_eq!(&v[..4], &[0.8, 0.3, 0.6, 0.5]);
        assert!((v[4] - 0.6).abs() < 1e-6); // |0.8 - 0.5| * 2
        assert!((v[5] - 0.4).abs() < 1e-6);
        assert!((v[7] - 0.0).abs() < 1e-6); // balanced axis
    }

    #[test]
    fn missing_fields_fail_validation() {
        let mut raw = raw_input();
        raw.remove("thinking");
        let err = standardize(&raw).unwrap_err();
        assert!(err.to_string().contains("thinking"));
    }

    #[test]
    fn compare_is_symmetric_and_self_is_one() {
        let a = MbtiProfile::new(0.8, 0.3, 0.6, 0.5);
        let b = MbtiProfile::new(0.2, 0.7, 0.4, 0.9);
        assert_eq!(compare(&a, &b), compare(&b, &a));
        assert!((compare(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn opposite_types_score_low() {
        let entj = MbtiProfile::new(1.0, 1.0, 1.0, 1.0);
        let isfp = MbtiProfile::new(0.0, 0.0, 0.0, 0.0);
        let score = compare(&entj, &isfp);
        assert!(score < 0.1);
    }
}
