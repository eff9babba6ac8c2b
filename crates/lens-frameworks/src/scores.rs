//! Raw score extraction shared by the framework standardizers.

use lens_core::error::{LensError, LensResult};
use lens_core::types::{FrameworkKind, RawScores};
use serde_json::Value;

/// Coerce a raw JSON value to a float, accepting numbers and numeric
/// strings. Returns None for everything else.
pub(crate) fn coerce_score(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    }
}

/// Extract every required field from a raw payload, clamped to [0, 1].
///
/// Fields that are absent or not coercible are collected and reported
/// together in a single validation error, so callers can fix their whole
/// payload in one round trip. Out-of-range values clamp rather than fail.
pub(crate) fn require_fields(
    framework: FrameworkKind,
    raw: &RawScores,
    fields: &[&str],
) -> LensResult<Vec<f32>> {
    let mut values = Vec::with_capacity(fields.len());
    let mut missing = Vec::new();

    for field in fields {
        match raw.get(*field).and_then(coerce_score) {
            Some(v) if v.is_finite() => values.push(v.clamp(0.0, 1.0)),
            _ => missing.push((*field).to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(LensError::Validation {
            framework,
            missing_fields: missing,
        });
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(pairs: &[(&str, Value)]) -> RawScores {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn coerces_numbers_and_numeric_strings() {
        assert_eq!(coerce_score(&json!(0.7)), Some(0.7));
        assert_eq!(coerce_score(&json!("0.4")), Some(0.4));
        assert_eq!(coerce_score(&json!(" 0.9 ")), Some(0.9));
        assert_eq!(coerce_score(&json!("high")), None);
        assert_eq!(coerce_score(&json!(null)), None);
        assert_eq!(coerce_score(&json!([0.5])), None);
    }

    #[test]
    fn out_of_range_values_clamp() {
        let scores = raw(&[("a", json!(1.7)), ("b", json!(-2.0))]);
        let values = require_fields(FrameworkKind::Disc, &scores, &["a", "b"]).unwrap();
        assert_eq!(values, vec![1.0, 0.0]);
    }

    #[test]
    fn all_missing_fields_reported_together() {
        let scores = raw(&[("a", json!(0.5)), ("b", json!("n/a"))]);
        let err = require_fields(FrameworkKind::Mbti, &scores, &["a", "b", "c"]).unwrap_err();
        match err {
            LensError::Validation {
                framework,
                missing_fields,
            } => {
                assert_eq!(framework, FrameworkKind::Mbti);
                assert_eq!(missing_fields, vec!["b".to_string(), "c".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
