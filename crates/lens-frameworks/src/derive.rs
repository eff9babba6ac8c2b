//! Compound-trait derivation.
//!
//! Each trait is a fixed weighted linear combination over standardized
//! fields from one or more frameworks, read from the versioned coefficient
//! table. With every field in [0, 1] and strictly positive term weights
//! (inverted terms contribute `1 - value`), the combination's theoretical
//! range is [0, Σw], so the [0, 100] rescale divides by the weight sum.
//! No population statistics are involved; percentile ranking against norms
//! is an external concern.

use lens_core::config::CoefficientTable;
use lens_core::types::{CompoundTrait, CompoundTraits, StandardizedSet};
use lens_core::LensResult;

/// Derive all compound traits from a complete standardized set.
///
/// Idempotent: identical inputs always produce identical scores.
pub fn derive_traits(
    set: &StandardizedSet<'_>,
    table: &CoefficientTable,
) -> LensResult<CompoundTraits> {
    let mut traits = CompoundTraits::default();
    for trait_name in CompoundTrait::ALL {
        let terms = table.terms_for(trait_name)?;
        let mut weighted_sum = 0.0f64;
        let mut weight_total = 0.0f64;
        for term in terms {
            let value = term.field.value(set);
            let contribution = if term.invert { 1.0 - value } else { value };
            weighted_sum += term.weight as f64 * contribution as f64;
            weight_total += term.weight as f64;
        }
        let score = (100.0 * weighted_sum / weight_total).clamp(0.0, 100.0) as f32;
        traits.set(trait_name, score);
    }
    Ok(traits)
}
