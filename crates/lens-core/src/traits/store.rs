//! Profile store trait: the external vector-index contract.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::error::StoreResult;
use crate::types::{ProfileId, ProfileMetadata};

/// Metadata equality filter applied by the store during a query.
pub type MetadataFilter = BTreeMap<String, serde_json::Value>;

/// One ranked match returned by a store query.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreMatch {
    pub id: ProfileId,
    /// Similarity score under the store's metric (cosine assumed).
    pub score: f32,
    pub metadata: ProfileMetadata,
}

/// Query options for similarity search.
///
/// # Example
/// ```
/// use lens_core::traits::SearchOptions;
///
/// let options = SearchOptions::new(10).with_min_score(0.8);
/// assert_eq!(options.limit, 10);
/// assert_eq!(options.min_score, 0.8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Maximum results to return.
    pub limit: usize,
    /// Results scoring below this are dropped after retrieval, [0.0, 1.0].
    pub min_score: f32,
    /// Metadata equality filters passed through to the store.
    pub filter: MetadataFilter,
}

impl SearchOptions {
    /// Create search options with the given result limit.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    /// Set the minimum similarity threshold.
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Add a metadata equality filter.
    pub fn with_filter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.filter.insert(key.into(), value);
        self
    }
}

/// External k-NN-capable vector index holding composite embeddings.
///
/// The lens depends on this capability but never implements a network
/// backend itself; implementations are injected, never process-wide
/// singletons. Profiles are immutable, so the store is append-mostly and
/// an "update" is an upsert under a new profile ID.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert or replace a vector with its metadata.
    async fn upsert(
        &self,
        id: ProfileId,
        vector: Vec<f32>,
        metadata: ProfileMetadata,
    ) -> StoreResult<()>;

    /// Rank the `top_k` nearest vectors by the store's similarity metric,
    /// restricted to records whose metadata matches every filter entry.
    ///
    /// `top_k` is advisory; approximate indexes may return fewer or
    /// slightly reordered results, so callers re-apply thresholds.
    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: &MetadataFilter,
    ) -> StoreResult<Vec<StoreMatch>>;

    /// Total number of stored profiles.
    async fn count(&self) -> StoreResult<usize>;
}
