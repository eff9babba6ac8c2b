//! Raw assessment input, unvalidated at ingress.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw named scores for one framework, as supplied by an external intake
/// collaborator. Values may be numbers or numeric strings; standardizers
/// coerce and validate.
pub type RawScores = BTreeMap<String, serde_json::Value>;

/// One raw payload per framework.
///
/// A framework whose map is empty (or missing from the wire payload) fails
/// standardization with a validation error listing every required field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAssessmentInput {
    #[serde(default)]
    pub mbti: RawScores,
    #[serde(default)]
    pub disc: RawScores,
    #[serde(default)]
    pub holland: RawScores,
    #[serde(default)]
    pub hogan: RawScores,
}
