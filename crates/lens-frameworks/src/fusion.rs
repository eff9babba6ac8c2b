//! Vector fusion: framework vectors → composite embedding.
//!
//! All four framework vectors use disjoint placement: each is scaled by its
//! normalized fusion weight and written into its reserved index range.
//! Compound traits are the blended contribution: already a weighted
//! combination across frameworks, their [0, 100] scores are rescaled to
//! [0, 1] and written into the trait slot range. The tail beyond
//! [`USED_DIMS`](crate::dimensions::USED_DIMS) stays zero-filled.

use lens_core::config::FusionWeights;
use lens_core::error::{LensError, LensResult};
use lens_core::types::{CompositeEmbedding, CompoundTraits, FrameworkKind};
use tracing::error;

use crate::dimensions::{
    vector_len, COMPOSITE_DIM, DISC_OFFSET, HOGAN_OFFSET, HOLLAND_OFFSET, MBTI_OFFSET,
    TRAIT_OFFSET,
};

/// The four framework vectors produced by the vectorizers.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkVectors {
    pub mbti: Vec<f32>,
    pub disc: Vec<f32>,
    pub holland: Vec<f32>,
    pub hogan: Vec<f32>,
}

/// Write weighted segments into a zero-initialized vector of `dim` slots.
///
/// Each segment is `(offset, values, scale)`; values land at
/// `offset..offset + values.len()` multiplied by `scale`. Segments must fit
/// within `dim`; callers validate lengths before placement.
pub fn place_segments(dim: usize, segments: &[(usize, &[f32], f32)]) -> Vec<f32> {
    let mut out = vec![0.0f32; dim];
    for (offset, values, scale) in segments {
        for (slot, value) in out[*offset..offset + values.len()].iter_mut().zip(*values) {
            *slot = value * scale;
        }
    }
    out
}

fn check_length(framework: FrameworkKind, vector: &[f32]) -> LensResult<()> {
    let expected = vector_len(framework);
    if vector.len() != expected {
        // A wrong-length framework vector is an implementation bug, never
        // silently truncated or padded.
        error!(
            framework = framework.as_str(),
            expected,
            actual = vector.len(),
            "framework vector length mismatch"
        );
        return Err(LensError::DimensionMismatch {
            framework,
            expected,
            actual: vector.len(),
        });
    }
    Ok(())
}

/// Fuse framework vectors and compound traits into a composite embedding.
///
/// Weights are normalized to sum to 1.0 before scaling. Fails fast with a
/// dimension mismatch if any framework vector deviates from its declared
/// schema length.
pub fn fuse(
    vectors: &FrameworkVectors,
    traits: &CompoundTraits,
    weights: &FusionWeights,
) -> LensResult<CompositeEmbedding> {
    check_length(FrameworkKind::Mbti, &vectors.mbti)?;
    check_length(FrameworkKind::Disc, &vectors.disc)?;
    check_length(FrameworkKind::Holland, &vectors.holland)?;
    check_length(FrameworkKind::Hogan, &vectors.hogan)?;

    let [w_mbti, w_disc, w_holland, w_hogan] = weights.normalized()?;

    // Trait scores rescaled from [0, 100] to [0, 1] for the blended slots.
    let trait_values: Vec<f32> = traits.to_vector().iter().map(|t| t / 100.0).collect();

    let values = place_segments(
        COMPOSITE_DIM,
        &[
            (MBTI_OFFSET, &vectors.mbti, w_mbti),
            (DISC_OFFSET, &vectors.disc, w_disc),
            (HOLLAND_OFFSET, &vectors.holland, w_holland),
            (HOGAN_OFFSET, &vectors.hogan, w_hogan),
            (TRAIT_OFFSET, &trait_values, 1.0),
        ],
    );

    Ok(CompositeEmbedding::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::{DISC_DIM, HOGAN_DIM, HOLLAND_DIM, MBTI_DIM, USED_DIMS};

    fn sample_vectors() -> FrameworkVectors {
        FrameworkVectors {
            mbti: vec![0.5; MBTI_DIM],
            disc: vec![0.25; DISC_DIM],
            holland: vec![0.75; HOLLAND_DIM],
            hogan: vec![1.0; HOGAN_DIM],
        }
    }

    #[test]
    fn toy_layout_places_scaled_vectors_at_reserved_offsets() {
        // 10-dim toy composite: mbti [0,4), disc [4,6), holland [6,9),
        // hogan [9,10), equal weights already normalized to 0.25.
        let mbti = [1.0, 0.0, 0.0, 0.0];
        let disc = [0.0, 1.0];
        let holland = [0.0, 0.0, 1.0];
        let hogan = [1.0];
        let composite = place_segments(
            10,
            &[
                (0, &mbti, 0.25),
                (4, &disc, 0.25),
                (6, &holland, 0.25),
                (9, &hogan, 0.25),
            ],
        );

        let expected = [0.25, 0.0, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.25, 0.25];
        assert_eq!(composite, expected);
    }

    #[test]
    fn fuse_zero_fills_the_tail() {
        let embedding = fuse(
            &sample_vectors(),
            &CompoundTraits::default(),
            &FusionWeights::default(),
        )
        .unwrap();
        assert_eq!(embedding.dimension(), COMPOSITE_DIM);
        assert!(embedding.values[USED_DIMS..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn fuse_scales_by_normalized_weights() {
        let weights = FusionWeights {
            mbti: 2.0,
            disc: 2.0,
            holland: 2.0,
            hogan: 2.0,
        };
        let embedding = fuse(&sample_vectors(), &CompoundTraits::default(), &weights).unwrap();
        // Effective weight 0.25 each regardless of raw magnitude.
        assert!((embedding.values[MBTI_OFFSET] - 0.5 * 0.25).abs() < 1e-6);
        assert!((embedding.values[HOGAN_OFFSET] - 1.0 * 0.25).abs() < 1e-6);
    }

    #[test]
    fn fuse_places_trait_slots_rescaled_to_unit_range() {
        let mut traits = CompoundTraits::default();
        traits.adaptability = 80.0;
        traits.learning_orientation = 40.0;
        let embedding = fuse(&sample_vectors(), &traits, &FusionWeights::default()).unwrap();
        assert!((embedding.values[TRAIT_OFFSET] - 0.8).abs() < 1e-6);
        assert!((embedding.values[TRAIT_OFFSET + 7] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn wrong_length_vector_fails_fast() {
        let mut vectors = sample_vectors();
        vectors.holland.push(0.0);
        let err = fuse(
            &vectors,
            &CompoundTraits::default(),
            &FusionWeights::default(),
        )
        .unwrap_err();
        match err {
            LensError::DimensionMismatch {
                framework,
                expected,
                actual,
            } => {
                assert_eq!(framework, FrameworkKind::Holland);
                assert_eq!(expected, HOLLAND_DIM);
                assert_eq!(actual, HOLLAND_DIM + 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fusion_is_deterministic() {
        let a = fuse(
            &sample_vectors(),
            &CompoundTraits::default(),
            &FusionWeights::default(),
        )
        .unwrap();
        let b = fuse(
            &sample_vectors(),
            &CompoundTraits::default(),
            &FusionWeights::default(),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
