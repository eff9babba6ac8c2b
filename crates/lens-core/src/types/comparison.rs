//! Comparison contexts and results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ProfileId;

/// Named comparison scenario selecting the weighting scheme the comparison
/// engine applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonContext {
    /// Two team members as peers; frameworks weighted roughly equally.
    TeamMemberRelationship,
    /// An individual against an organization profile; values and culture
    /// fields weighted more heavily.
    IndividualToOrganization,
    /// A candidate against a role target. Directional: the role's field
    /// levels are requirements, not a peer to be mirrored.
    CandidateToRole,
    /// Day-to-day collaboration fit; interaction-style frameworks
    /// weighted more heavily.
    PeerCollaboration,
}

impl ComparisonContext {
    /// All recognized contexts.
    pub const ALL: [ComparisonContext; 4] = [
        ComparisonContext::TeamMemberRelationship,
        ComparisonContext::IndividualToOrganization,
        ComparisonContext::CandidateToRole,
        ComparisonContext::PeerCollaboration,
    ];

    /// Canonical snake_case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonContext::TeamMemberRelationship => "team_member_relationship",
            ComparisonContext::IndividualToOrganization => "individual_to_organization",
            ComparisonContext::CandidateToRole => "candidate_to_role",
            ComparisonContext::PeerCollaboration => "peer_collaboration",
        }
    }

    /// Whether this context compares toward a target rather than between
    /// peers. Directional contexts use shortfall scoring and are not
    /// symmetric.
    pub fn is_directional(&self) -> bool {
        matches!(self, ComparisonContext::CandidateToRole)
    }
}

impl fmt::Display for ComparisonContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-framework comparison sub-scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameworkScores {
    pub mbti: f32,
    pub disc: f32,
    pub holland: f32,
    pub hogan: f32,
}

/// Outcome of comparing two profiles under a context.
///
/// Ephemeral: never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// The profile on the left of the comparison.
    pub profile_a: ProfileId,
    /// The profile on the right; the target under directional contexts.
    pub profile_b: ProfileId,
    /// The scenario compared under.
    pub context: ComparisonContext,
    /// Overall fit score in [0, 1].
    pub overall: f32,
    /// Raw cosine similarity between composite embeddings, in [-1, 1].
    pub composite_similarity: f32,
    /// Per-framework sub-scores.
    pub framework_scores: FrameworkScores,
}

impl ComparisonResult {
    /// Overall fit mapped to the conventional [0, 100] scale.
    pub fn overall_percent(&self) -> f32 {
        self.overall * 100.0
    }
}
