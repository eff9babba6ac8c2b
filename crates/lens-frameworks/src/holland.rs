//! Holland-analog (RIASEC) framework processor.
//!
//! Vector layout (length 6): the six interest scores in canonical
//! R, I, A, S, E, C order.
//!
//! Comparison blends scalar interest closeness with hexagonal congruence:
//! the RIASEC types sit on a circle, and the circular distance between two
//! primary interest letters (0..=3) grades how compatible the interest
//! orientations are.

use lens_core::types::{FrameworkKind, HollandProfile, RawScores};
use lens_core::LensResult;

use crate::dimensions::HOLLAND_DIM;
use crate::scores::require_fields;

/// Required raw fields, in vector order.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "realistic",
    "investigative",
    "artistic",
    "social",
    "enterprising",
    "conventional",
];

/// Validate and standardize a raw Holland payload.
///
/// The 3-letter interest code is derivable and never required in raw input.
pub fn standardize(raw: &RawScores) -> LensResult<HollandProfile> {
    let v = require_fields(FrameworkKind::Holland, raw, &REQUIRED_FIELDS)?;
    Ok(HollandProfile::new(v[0], v[1], v[2], v[3], v[4], v[5]))
}

/// Map a standardized profile to its fixed-length vector.
pub fn vectorize(profile: &HollandProfile) -> Vec<f32> {
    let vector = profile.field_values().to_vec();
    debug_assert_eq!(vector.len(), HOLLAND_DIM);
    vector
}

/// Circular distance between two RIASEC letters on the hexagon, 0..=3.
fn hexagon_distance(a: char, b: char) -> usize {
    const ORDER: [char; 6] = ['R', 'I', 'A', 'S', 'E', 'C'];
    let pos = |c: char| ORDER.iter().position(|&x| x == c).unwrap_or(0);
    let d = pos(a).abs_diff(pos(b));
    d.min(6 - d)
}

/// Congruence score from the hexagon distance of the primary letters.
fn congruence(a: &HollandProfile, b: &HollandProfile) -> f32 {
    let first = |p: &HollandProfile| p.interest_code().chars().next().unwrap_or('R');
    match hexagon_distance(first(a), first(b)) {
        0 => 1.0,
        1 => 0.75,
        2 => 0.5,
        _ => 0.25,
    }
}

/// Symmetric similarity between two profiles, in [0, 1]:
/// equal blend of scalar closeness and hexagonal congruence.
pub fn compare(a: &HollandProfile, b: &HollandProfile) -> f32 {
    let fa = a.field_values();
    let fb = b.field_values();
    let mean_diff: f32 = fa
        .iter()
        .zip(fb.iter())
        .map(|(x, y)| (x - y).abs())
        .sum::<f32>()
        / fa.len() as f32;
    let scalar_score = 1.0 - mean_diff;

    (0.5 * scalar_score + 0.5 * congruence(a, b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(scores: [f32; 6]) -> HollandProfile {
        HollandProfile::new(scores[0], scores[1], scores[2], scores[3], scores[4], scores[5])
    }

    #[test]
    fn standardize_clamps_and_derives_code() {
        let raw: RawScores = REQUIRED_FIELDS
            .iter()
            .zip([1.5, 0.9, 0.8, 0.1, 0.2, -0.4])
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();
        let p = standardize(&raw).unwrap();
        assert_eq!(p.realistic, 1.0);
        assert_eq!(p.conventional, 0.0);
        assert_eq!(p.interest_code(), "RIA");
    }

    #[test]
    fn hexagon_distance_is_circular() {
        assert_eq!(hexagon_distance('R', 'R'), 0);
        assert_eq!(hexagon_distance('R', 'I'), 1);
        assert_eq!(hexagon_distance('R', 'S'), 3);
        assert_eq!(hexagon_distance('R', 'C'), 1);
        assert_eq!(hexagon_distance('A', 'C'), 3);
    }

    #[test]
    fn adjacent_interests_score_higher_than_opposite() {
        let realistic = profile([0.9, 0.3, 0.1, 0.1, 0.1, 0.1]);
        let investigative = profile([0.3, 0.9, 0.1, 0.1, 0.1, 0.1]);
        let social = profile([0.1, 0.1, 0.1, 0.9, 0.3, 0.1]);
        assert!(compare(&realistic, &investigative) > compare(&realistic, &social));
    }

    #[test]
    fn compare_is_symmetric_and_self_is_one() {
        let a = profile([0.2, 0.8, 0.6, 0.5, 0.4, 0.3]);
        let b = profile([0.7, 0.1, 0.3, 0.6, 0.8, 0.2]);
        assert_eq!(compare(&a, &b), compare(&b, &a));
        assert!((compare(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn vector_has_declared_length() {
        assert_eq!(vectorize(&profile([0.5; 6])).len(), HOLLAND_DIM);
    }
}
