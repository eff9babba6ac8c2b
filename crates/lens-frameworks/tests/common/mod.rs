//! Shared fixtures for integration tests.

use lens_core::types::{RawAssessmentInput, RawScores};
use serde_json::json;

fn scores(pairs: &[(&str, f64)]) -> RawScores {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect()
}

/// A complete raw assessment payload with distinctive values per framework.
pub fn sample_raw() -> RawAssessmentInput {
    RawAssessmentInput {
        mbti: scores(&[
            ("extraversion", 0.72),
            ("intuition", 0.64),
            ("thinking", 0.41),
            ("judging", 0.55),
        ]),
        disc: scores(&[
            ("dominance", 0.35),
            ("influence", 0.81),
            ("steadiness", 0.52),
            ("conscientiousness", 0.44),
        ]),
        holland: scores(&[
            ("realistic", 0.22),
            ("investigative", 0.68),
            ("artistic", 0.74),
            ("social", 0.59),
            ("enterprising", 0.47),
            ("conventional", 0.31),
        ]),
        hogan: hogan_scores(0.55),
    }
}

/// A second, clearly different payload.
pub fn other_raw() -> RawAssessmentInput {
    RawAssessmentInput {
        mbti: scores(&[
            ("extraversion", 0.18),
            ("intuition", 0.33),
            ("thinking", 0.79),
            ("judging", 0.84),
        ]),
        disc: scores(&[
            ("dominance", 0.77),
            ("influence", 0.25),
            ("steadiness", 0.31),
            ("conscientiousness", 0.82),
        ]),
        holland: scores(&[
            ("realistic", 0.71),
            ("investigative", 0.52),
            ("artistic", 0.19),
            ("social", 0.28),
            ("enterprising", 0.63),
            ("conventional", 0.66),
        ]),
        hogan: hogan_scores(0.4),
    }
}

fn hogan_scores(base: f64) -> RawScores {
    const FIELDS: [&str; 28] = [
        "adjustment",
        "ambition",
        "sociability",
        "interpersonal_sensitivity",
        "prudence",
        "inquisitive",
        "learning_approach",
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
    FIELDS
        .iter()
        .enumerate()
        .map(|(i, k)| {
            let value = (base + i as f64 * 0.013).min(1.0);
            (k.to_string(), json!(value))
        })
        .collect()
}
