//! Closed set of supported assessment frameworks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four assessment frameworks the lens understands.
///
/// The set is closed by design: adding a framework changes the embedding
/// schema and requires a new schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkKind {
    Mbti,
    Disc,
    Holland,
    Hogan,
}

impl FrameworkKind {
    /// All frameworks, in canonical embedding order.
    pub const ALL: [FrameworkKind; 4] = [
        FrameworkKind::Mbti,
        FrameworkKind::Disc,
        FrameworkKind::Holland,
        FrameworkKind::Hogan,
    ];

    /// Canonical lowercase name, used in errors and store metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkKind::Mbti => "mbti",
            FrameworkKind::Disc => "disc",
            FrameworkKind::Holland => "holland",
            FrameworkKind::Hogan => "hogan",
        }
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_stable() {
        let names: Vec<&str> = FrameworkKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["mbti", "disc", "holland", "hogan"]);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&FrameworkKind::Holland).unwrap();
        assert_eq!(json, "\"holland\"");
    }
}
