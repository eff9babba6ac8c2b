//! Compile-time layout constants for the composite embedding.
//!
//! The composite is assembled by disjoint placement: each framework vector
//! occupies a reserved index range, the blended compound-trait slots follow,
//! and the tail is zero-filled. Changing any constant here changes the
//! embedding schema and must bump `EMBEDDING_SCHEMA_VERSION`.

// =============================================================================
// FRAMEWORK VECTOR LENGTHS
// =============================================================================

/// MBTI vector length: 4 dichotomy scores + 4 derived preference-clarity
/// components.
pub const MBTI_DIM: usize = 8;

/// DISC vector length: the 4 behavioral-style scores.
pub const DISC_DIM: usize = 4;

/// Holland vector length: the 6 RIASEC interest scores.
pub const HOLLAND_DIM: usize = 6;

/// Hogan vector length: 7 potential + 11 risk + 10 values scales.
pub const HOGAN_DIM: usize = 28;

/// Compound-trait slot count (blended weighted combination).
pub const TRAIT_DIM: usize = 8;

// =============================================================================
// RESERVED SLOT OFFSETS (disjoint placement)
// =============================================================================

pub const MBTI_OFFSET: usize = 0;
pub const DISC_OFFSET: usize = MBTI_OFFSET + MBTI_DIM;
pub const HOLLAND_OFFSET: usize = DISC_OFFSET + DISC_DIM;
pub const HOGAN_OFFSET: usize = HOLLAND_OFFSET + HOLLAND_DIM;
pub const TRAIT_OFFSET: usize = HOGAN_OFFSET + HOGAN_DIM;

// =============================================================================
// AGGREGATE DIMENSIONS
// =============================================================================

/// Occupied prefix of the composite embedding.
pub const USED_DIMS: usize = TRAIT_OFFSET + TRAIT_DIM;

/// Full composite embedding dimension; positions beyond [`USED_DIMS`] are
/// zero-filled.
pub const COMPOSITE_DIM: usize = 128;

/// Declared vector length for a framework.
pub const fn vector_len(kind: lens_core::types::FrameworkKind) -> usize {
    use lens_core::types::FrameworkKind::*;
    match kind {
        Mbti => MBTI_DIM,
        Disc => DISC_DIM,
        Holland => HOLLAND_DIM,
        Hogan => HOGAN_DIM,
    }
}

/// Reserved composite offset for a framework.
pub const fn slot_offset(kind: lens_core::types::FrameworkKind) -> usize {
    use lens_core::types::FrameworkKind::*;
    match kind {
        Mbti => MBTI_OFFSET,
        Disc => DISC_OFFSET,
        Holland => HOLLAND_OFFSET,
        Hogan => HOGAN_OFFSET,
    }
}

const _: () = assert!(DISC_OFFSET == 8);
const _: () = assert!(HOLLAND_OFFSET == 12);
const _: () = assert!(HOGAN_OFFSET == 18);
const _: () = assert!(TRAIT_OFFSET == 46);
const _: () = assert!(USED_DIMS == 54);
const _: () = assert!(USED_DIMS <= COMPOSITE_DIM);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_lookup_matches_constants() {
        use lens_core::types::FrameworkKind;
        let total: usize = FrameworkKind::ALL.iter().map(|k| vector_len(*k)).sum();
        assert_eq!(total + TRAIT_DIM, USED_DIMS);
        assert_eq!(slot_offset(FrameworkKind::Hogan), HOGAN_OFFSET);
    }

    #[test]
    fn reserved_ranges_are_disjoint_and_ordered() {
        assert!(MBTI_OFFSET + MBTI_DIM <= DISC_OFFSET + DISC_DIM);
        assert!(DISC_OFFSET + DISC_DIM == HOLLAND_OFFSET);
        assert!(HOLLAND_OFFSET + HOLLAND_DIM == HOGAN_OFFSET);
        assert!(HOGAN_OFFSET + HOGAN_DIM == TRAIT_OFFSET);
        assert!(TRAIT_OFFSET + TRAIT_DIM == USED_DIMS);
    }
}
