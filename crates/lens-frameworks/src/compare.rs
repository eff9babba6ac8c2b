//! Comparison engine: pairwise fit scoring under a context.

use lens_core::config::ContextWeightTable;
use lens_core::similarity::{cosine_similarity, unit_score};
use lens_core::types::{
    ComparisonContext, ComparisonResult, FrameworkScores, IntegratedProfile, StandardizedSet,
};
use lens_core::LensResult;
use tracing::debug;

use crate::{disc, hogan, holland, mbti};

/// Computes overall fit between two profiles by combining composite-vector
/// cosine similarity with per-framework sub-scores under a context-selected
/// weight vector.
///
/// Pure computation over immutable profiles; safe to share across threads.
#[derive(Debug, Clone)]
pub struct ComparisonEngine {
    contexts: ContextWeightTable,
}

impl ComparisonEngine {
    /// Build an engine over a validated context weight table.
    pub fn new(contexts: ContextWeightTable) -> Self {
        Self { contexts }
    }

    /// Compare two profiles under a context.
    ///
    /// Non-directional contexts are symmetric and score identical profiles
    /// at exactly 1.0. Under directional contexts `b` is the target:
    /// framework sub-scores measure how far `a` falls short of `b`'s field
    /// levels, and exceeding a target is not penalized.
    ///
    /// Fails only for profiles missing a standardized framework profile.
    pub fn compare(
        &self,
        a: &IntegratedProfile,
        b: &IntegratedProfile,
        context: ComparisonContext,
    ) -> LensResult<ComparisonResult> {
        let set_a = a.standardized()?;
        let set_b = b.standardized()?;

        let composite_similarity =
            cosine_similarity(a.embedding.as_slice(), b.embedding.as_slice());
        let composite_score = unit_score(composite_similarity);

        let framework_scores = if context.is_directional() {
            directional_scores(&set_a, &set_b)
        } else {
            symmetric_scores(&set_a, &set_b)
        };

        let [w_composite, w_mbti, w_disc, w_holland, w_hogan] =
            self.contexts.weights_for(context).normalized()?;
        let overall = (w_composite * composite_score
            + w_mbti * framework_scores.mbti
            + w_disc * framework_scores.disc
            + w_holland * framework_scores.holland
            + w_hogan * framework_scores.hogan)
            .clamp(0.0, 1.0);

        debug!(
            profile_a = %a.id,
            profile_b = %b.id,
            context = context.as_str(),
            overall,
            "comparison complete"
        );

        Ok(ComparisonResult {
            profile_a: a.id,
            profile_b: b.id,
            context,
            overall,
            composite_similarity,
            framework_scores,
        })
    }

    /// Overall fit scores for every ordered pair in a roster.
    ///
    /// Cell `[i][j]` is the fit of profile `i` compared to profile `j`.
    /// Under symmetric contexts the upper triangle is mirrored rather than
    /// recomputed; cells are independent pure computations with no required
    /// ordering between them.
    pub fn relationship_matrix(
        &self,
        roster: &[IntegratedProfile],
        context: ComparisonContext,
    ) -> LensResult<Vec<Vec<f32>>> {
        let n = roster.len();
        let mut matrix = vec![vec![0.0f32; n]; n];
        for i in 0..n {
            for j in 0..n {
                if j < i && !context.is_directional() {
                    matrix[i][j] = matrix[j][i];
                    continue;
                }
                matrix[i][j] = self.compare(&roster[i], &roster[j], context)?.overall;
            }
        }
        Ok(matrix)
    }
}

fn symmetric_scores(a: &StandardizedSet<'_>, b: &StandardizedSet<'_>) -> FrameworkScores {
    FrameworkScores {
        mbti: mbti::compare(a.mbti, b.mbti),
        disc: disc::compare(a.disc, b.disc),
        holland: holland::compare(a.holland, b.holland),
        hogan: hogan::compare(a.hogan, b.hogan),
    }
}

fn directional_scores(a: &StandardizedSet<'_>, b: &StandardizedSet<'_>) -> FrameworkScores {
    FrameworkScores {
        mbti: coverage(&a.mbti.field_values(), &b.mbti.field_values()),
        disc: coverage(&a.disc.field_values(), &b.disc.field_values()),
        holland: coverage(&a.holland.field_values(), &b.holland.field_values()),
        hogan: coverage(&a.hogan.field_values(), &b.hogan.field_values()),
    }
}

/// Shortfall score of `a` against target levels `b`, in [0, 1].
///
/// Only deficits count: `1 - mean(max(0, b_i - a_i))`. Meeting or exceeding
/// every target level scores 1.0.
fn coverage(a: &[f32], b: &[f32]) -> f32 {
    let shortfall: f32 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (y - x).max(0.0))
        .sum::<f32>()
        / a.len() as f32;
    (1.0 - shortfall).clamp(0.0, 1.0)
}
