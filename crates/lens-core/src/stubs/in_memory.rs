//! In-memory profile store for tests and development.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::error::StoreResult;
use crate::similarity::cosine_similarity;
use crate::traits::{MetadataFilter, ProfileStore, StoreMatch};
use crate::types::{ProfileId, ProfileMetadata};

#[derive(Debug, Clone)]
struct StoredRecord {
    vector: Vec<f32>,
    metadata: ProfileMetadata,
}

/// Exact-scan in-memory [`ProfileStore`].
///
/// Computes true cosine similarity over every stored record, so tests get
/// deterministic rankings with no approximation. Not intended for
/// production-sized populations.
///
/// # Example
/// ```
/// use lens_core::stubs::InMemoryProfileStore;
/// use lens_core::traits::ProfileStore;
/// use std::collections::BTreeMap;
///
/// # async fn example() -> lens_core::error::StoreResult<()> {
/// let store = InMemoryProfileStore::new();
/// let id = uuid::Uuid::new_v4();
/// store.upsert(id, vec![1.0, 0.0], BTreeMap::new()).await?;
/// let matches = store.query(&[1.0, 0.0], 10, &BTreeMap::new()).await?;
/// assert_eq!(matches[0].id, id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    records: RwLock<BTreeMap<ProfileId, StoredRecord>>,
}

impl InMemoryProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn matches_filter(metadata: &ProfileMetadata, filter: &MetadataFilter) -> bool {
        filter
            .iter()
            .all(|(key, expected)| metadata.get(key) == Some(expected))
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn upsert(
        &self,
        id: ProfileId,
        vector: Vec<f32>,
        metadata: ProfileMetadata,
    ) -> StoreResult<()> {
        self.records
            .write()
            .insert(id, StoredRecord { vector, metadata });
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: &MetadataFilter,
    ) -> StoreResult<Vec<StoreMatch>> {
        let records = self.records.read();
        let mut matches: Vec<StoreMatch> = records
            .iter()
            .filter(|(_, record)| Self::matches_filter(&record.metadata, filter))
            .map(|(id, record)| StoreMatch {
                id: *id,
                score: cosine_similarity(vector, &record.vector),
                metadata: record.metadata.clone(),
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(top_k);
        Ok(matches)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.records.read().len())
    }
}
