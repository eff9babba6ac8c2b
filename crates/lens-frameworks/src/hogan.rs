//! Hogan-analog framework processor.
//!
//! Vector layout (length 28): the 7 potential scales, then the 11 risk
//! scales, then the 10 values scales, in declared field order.

use lens_core::types::{FrameworkKind, HoganProfile, RawScores};
use lens_core::LensResult;

use crate::dimensions::HOGAN_DIM;
use crate::scores::require_fields;

/// Required raw fields, in vector order: potential, risk, then values.
pub const REQUIRED_FIELDS: [&str; 28] = [
    // Potential (HPI analog)
    "adjustment",
    "ambition",
    "sociability",
    "interpersonal_sensitivity",
    "prudence",
    "inquisitive",
    "learning_approach",
    // Risk (HDS analog)
    "excitable",
    "skeptical",
    "cautious",
    "reserved",
    "leisurely",
    "bold",
    "mischievous",
    "colorful",
    "imaginative",
    "diligent",
    "dutiful",
    // Values (MVPI analog)
    "recognition",
    "power",
    "hedonism",
    "altruism",
    "affiliation",
    "tradition",
    "security",
    "commerce",
    "aesthetics",
    "science",
];

/// Validate and standardize a raw Hogan payload.
pub fn standardize(raw: &RawScores) -> LensResult<HoganProfile> {
    let v = require_fields(FrameworkKind::Hogan, raw, &REQUIRED_FIELDS)?;
    let mut scales = [0.0f32; HOGAN_DIM];
    scales.copy_from_slice(&v);
    Ok(HoganProfile::from_scales(&scales))
}

/// Map a standardized profile to its fixed-length vector.
pub fn vectorize(profile: &HoganProfile) -> Vec<f32> {
    let vector = profile.field_values().to_vec();
    debug_assert_eq!(vector.len(), HOGAN_DIM);
    vector
}

/// Symmetric similarity between two profiles, in [0, 1]:
/// 1 - mean absolute difference across all 28 scales.
pub fn compare(a: &HoganProfile, b: &HoganProfile) -> f32 {
    let fa = a.field_values();
    let fb = b.field_values();
    let mean_diff: f32 = fa
        .iter()
        .zip(fb.iter())
        .map(|(x, y)| (x - y).abs())
        .sum::<f32>()
        / fa.len() as f32;
    (1.0 - mean_diff).clamp(0.0, 1.0)
}
