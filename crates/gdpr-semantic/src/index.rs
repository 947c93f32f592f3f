//! Brute-force in-memory vector index over regulation passages.
//!
//! Stand-in for the persistent index built by the offline ingestion job.
//! Built once, queried read-only; concurrent queries need no locking.

use gdpr_core::errors::{GatewayResult, SemanticError};
use gdpr_core::traits::{IEmbeddingProvider, IVectorIndex, IndexHit};
use tracing::info;

/// One ingested regulation chunk with its provenance metadata.
#[derive(Debug, Clone)]
pub struct IndexedPassage {
    pub text: String,
    pub article: Option<String>,
    pub recital: Option<String>,
    pub category: Option<String>,
}

impl IndexedPassage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            article: None,
            recital: None,
            category: None,
        }
    }

    pub fn article(mut self, article: impl Into<String>) -> Self {
        self.article = Some(article.into());
        self
    }

    pub fn recital(mut self, recital: impl Into<String>) -> Self {
        self.recital = Some(recital.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Exhaustive cosine-distance k-NN over an embedded passage corpus.
pub struct InMemoryIndex {
    entries: Vec<(IndexedPassage, Vec<f32>)>,
    dimensions: usize,
}

impl InMemoryIndex {
    /// Embed every passage with `embedder` and build the index.
    pub fn build(
        embedder: &dyn IEmbeddingProvider,
        passages: Vec<IndexedPassage>,
    ) -> GatewayResult<Self> {
        let dimensions = embedder.dimensions();
        let mut entries = Vec::with_capacity(passages.len());
        for passage in passages {
            let embedding = embedder.embed(&passage.text)?;
            entries.push((passage, embedding));
        }
        info!(
            passages = entries.len(),
            dims = dimensions,
            "in-memory violation index built"
        );
        Ok(Self {
            entries,
            dimensions,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cosine distance `1 - cos(a, b)`, in `[0, 2]`. Zero-norm vectors are
/// treated as orthogonal (distance 1).
fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut na = 0.0f64;
    let mut nb = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += f64::from(*x) * f64::from(*y);
        na += f64::from(*x) * f64::from(*x);
        nb += f64::from(*y) * f64::from(*y);
    }
    let denom = na.sqrt() * nb.sqrt();
    if denom <= f64::EPSILON {
        return 1.0;
    }
    1.0 - dot / denom
}

impl IVectorIndex for InMemoryIndex {
    fn query(&self, embedding: &[f32], top_k: usize) -> GatewayResult<Vec<IndexHit>> {
        if embedding.len() != self.dimensions {
            return Err(SemanticError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }

        let mut hits: Vec<IndexHit> = self
            .entries
            .iter()
            .map(|(passage, vec)| IndexHit {
                document: passage.text.clone(),
                article: passage.article.clone(),
                recital: passage.recital.clone(),
                category: passage.category.clone(),
                distance: cosine_distance(embedding, vec),
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.truncate(top_k);
        Ok(hits)
    }

    fn name(&self) -> &str {
        "in-memory"
    }

    fn is_available(&self) -> bool {
        !self.entries.is_empty()
    }
}
