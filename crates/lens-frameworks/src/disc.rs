//! DISC-analog framework processor.
//!
//! Vector layout (length 4): the four behavioral-style scores in
//! D, I, S, C order. No derived components.

use lens_core::types::{DiscProfile, FrameworkKind, RawScores};
use lens_core::LensResult;

use crate::dimensions::DISC_DIM;
use crate::scores::require_fields;

/// Required raw fields, in vector order.
pub const REQUIRED_FIELDS: [&str; 4] = ["dominance", "influence", "steadiness", "conscientiousness"];

/// Validate and standardize a raw DISC payload.
pub fn standardize(raw: &RawScores) -> LensResult<DiscProfile> {
    let v = require_fields(FrameworkKind::Disc, raw, &REQUIRED_FIELDS)?;
    Ok(DiscProfile::new(v[0], v[1], v[2], v[3]))
}

/// Map a standardized profile to its fixed-length vector.
pub fn vectorize(profile: &DiscProfile) -> Vec<f32> {
    let vector = profile.field_values().to_vec();
    debug_assert_eq!(vector.len(), DISC_DIM);
    vector
}

/// Symmetric similarity between two profiles, in [0, 1]:
/// 1 - mean absolute difference across the four styles.
pub fn compare(a: &DiscProfile, b: &DiscProfile) -> f32 {
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
