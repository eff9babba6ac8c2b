//! Composite embedding type.

use serde::{Deserialize, Serialize};

/// Schema version for composite embeddings.
///
/// Any change to the embedding layout (dimension, slot offsets, framework
/// vector lengths) must bump this. Embeddings stored under a different
/// schema version are not comparable.
pub const EMBEDDING_SCHEMA_VERSION: &str = "lens-embedding-v1";

/// The single fused vector representing a multi-framework profile.
///
/// The dimension is fixed for the lifetime of a deployment and recorded
/// via [`EMBEDDING_SCHEMA_VERSION`]; the layout itself is declared by the
/// fusion stage that produces these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeEmbedding {
    /// Layout version this embedding was produced under.
    pub schema_version: String,
    /// The fused vector values.
    pub values: Vec<f32>,
}

impl CompositeEmbedding {
    /// Wrap fused values under the current schema version.
    pub fn new(values: Vec<f32>) -> Self {
        Self {
            schema_version: EMBEDDING_SCHEMA_VERSION.to_string(),
            values,
        }
    }

    /// Embedding dimension.
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Borrow the raw values.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_embedding_carries_current_schema_version() {
        let e = CompositeEmbedding::new(vec![0.0; 128]);
        assert_eq!(e.schema_version, EMBEDDING_SCHEMA_VERSION);
        assert_eq!(e.dimension(), 128);
        assert!(e.is_zero());
    }

    #[test]
    fn is_zero_detects_any_nonzero_component() {
        let mut e = CompositeEmbedding::new(vec![0.0; 8]);
        e.values[7] = 1e-6;
        assert!(!e.is_zero());
    }
}
