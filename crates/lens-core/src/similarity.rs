//! Vector similarity utilities.

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 (never NaN) when the lengths differ, either vector is
/// empty, or either norm is zero.
///
/// # Example
/// ```
/// use lens_core::similarity::cosine_similarity;
///
/// let sim = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]);
/// assert!((sim - 1.0).abs() < 1e-6);
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
/// ```
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < f32::EPSILON {
        0.0
    } else {
        dot / denom
    }
}

/// Clamp a cosine similarity into [0, 1] for score synthesis.
///
/// Negative similarity contributes zero fit rather than being remapped,
/// which keeps self-comparison at exactly 1.0.
#[inline]
pub fn unit_score(cosine: f32) -> f32 {
    cosine.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_similarity_is_one() {
        let v = vec![0.3, -0.2, 0.9, 0.05];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = vec![0.1, 0.5, -0.3, 0.8];
        let b = vec![0.9, -0.2, 0.4, 0.1];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn zero_vector_yields_zero_not_nan() {
        let zero = vec![0.0; 4];
        let v = vec![1.0, 2.0, 3.0, 4.0];
        let sim = cosine_similarity(&zero, &v);
        assert_eq!(sim, 0.0);
        assert!(!sim.is_nan());
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn mismatched_lengths_yield_zero() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn opposite_vectors_are_negative_but_unit_score_clamps() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        let sim = cosine_similarity(&a, &b);
        assert!((sim + 1.0).abs() < 1e-6);
        assert_eq!(unit_score(sim), 0.0);
        assert_eq!(unit_score(1.0), 1.0);
    }
}
