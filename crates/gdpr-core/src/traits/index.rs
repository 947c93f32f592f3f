use crate::errors::GatewayResult;

/// One nearest-neighbor hit from the violation index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexHit {
    /// The indexed passage text.
    pub document: String,
    /// Article label from ingestion metadata, if tagged.
    pub article: Option<String>,
    /// Recital label from ingestion metadata, if tagged.
    pub recital: Option<String>,
    /// Special-category label from ingestion metadata, if tagged.
    pub category: Option<String>,
    /// Distance in the index's native metric, ascending = closer.
    pub distance: f64,
}

/// Read-only nearest-neighbor lookup over a precomputed passage index.
///
/// The index is built offline by a separate ingestion job; the pipeline
/// only ever queries it. Concurrent queries must not require exclusive
/// locking.
pub trait IVectorIndex: Send + Sync {
    /// Return up to `top_k` hits ordered ascending by distance.
    fn query(&self, embedding: &[f32], top_k: usize) -> GatewayResult<Vec<IndexHit>>;

    /// Human-readable index name.
    fn name(&self) -> &str;

    /// Whether the index is loaded and queryable.
    fn is_available(&self) -> bool;
}
