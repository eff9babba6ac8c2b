//! Similarity search over the profile store.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::traits::{ProfileStore, SearchOptions, StoreMatch};
use crate::types::IntegratedProfile;

/// Search and persistence front-end over an injected [`ProfileStore`].
///
/// Wraps every store call in a bounded wait, and re-applies the caller's
/// similarity threshold after retrieval because approximate indexes treat
/// `top_k` as advisory. An empty result set is a valid outcome, never an
/// error, and no retries are performed here; retry policy belongs to the
/// caller.
pub struct ProfileIndex {
    store: Arc<dyn ProfileStore>,
    query_timeout: Duration,
    default_top_k: usize,
}

impl ProfileIndex {
    /// Create an index over the given store with store-boundary settings.
    pub fn new(store: Arc<dyn ProfileStore>, config: &StoreConfig) -> Self {
        Self {
            store,
            query_timeout: Duration::from_millis(config.query_timeout_ms),
            default_top_k: config.default_top_k,
        }
    }

    /// Persist a profile's composite embedding and metadata.
    ///
    /// Caller metadata is passed through; the lens adds `profile_type`,
    /// `created_at`, and `schema_version` keys so searches can filter on
    /// them. Caller keys win on collision.
    pub async fn upsert_profile(&self, profile: &IntegratedProfile) -> StoreResult<()> {
        let mut metadata = profile.metadata.clone();
        metadata
            .entry("profile_type".to_string())
            .or_insert_with(|| json!(profile.profile_type.as_str()));
        metadata
            .entry("created_at".to_string())
            .or_insert_with(|| json!(profile.created_at.to_rfc3339()));
        metadata
            .entry("schema_version".to_string())
            .or_insert_with(|| json!(profile.embedding.schema_version));

        debug!(profile_id = %profile.id, "upserting profile embedding");
        self.bounded(
            self.store
                .upsert(profile.id, profile.embedding.values.clone(), metadata),
        )
        .await
    }

    /// Rank stored profiles by similarity to a query vector.
    ///
    /// Results below `options.min_score` are dropped after retrieval and
    /// the remainder truncated to `options.limit`, ordered by descending
    /// score.
    pub async fn search(
        &self,
        query: &[f32],
        options: SearchOptions,
    ) -> StoreResult<Vec<StoreMatch>> {
        let top_k = if options.limit > 0 {
            options.limit.max(self.default_top_k)
        } else {
            self.default_top_k
        };

        let mut matches = self
            .bounded(self.store.query(query, top_k, &options.filter))
            .await?;

        matches.retain(|m| m.score >= options.min_score);
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if options.limit > 0 {
            matches.truncate(options.limit);
        }

        debug!(
            results = matches.len(),
            min_score = options.min_score,
            "similarity search complete"
        );
        Ok(matches)
    }

    /// Number of stored profiles.
    pub async fn count(&self) -> StoreResult<usize> {
        self.bounded(self.store.count()).await
    }

    async fn bounded<T>(
        &self,
        fut: impl std::future::Future<Output = StoreResult<T>>,
    ) -> StoreResult<T> {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout {
                timeout_ms: self.query_timeout.as_millis() as u64,
            }),
        }
    }
}
