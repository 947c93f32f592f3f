/// Semantic violation detector errors.
#[derive(Debug, thiserror::Error)]
pub enum SemanticError {
    #[error("embedding failed via '{provider}': {reason}")]
    EmbeddingFailed { provider: String, reason: String },

    #[error("vector index query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
