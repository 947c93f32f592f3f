//! The semantic violation detector.

use std::sync::Arc;

use gdpr_core::config::SemanticConfig;
use gdpr_core::errors::GatewayResult;
use gdpr_core::models::ViolationRecord;
use gdpr_core::traits::{IEmbeddingProvider, IVectorIndex};
use tracing::{debug, warn};

/// Embeds input text and reports regulation passages within the configured
/// distance threshold, best match first.
///
/// A pure read against a read-only index: no mutable state, no writes, no
/// retries. Deterministic and auditable — the threshold comes from config,
/// with `<=` semantics at the boundary.
pub struct SemanticDetector {
    embedder: Arc<dyn IEmbeddingProvider>,
    index: Arc<dyn IVectorIndex>,
    config: SemanticConfig,
}

impl SemanticDetector {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        index: Arc<dyn IVectorIndex>,
        config: SemanticConfig,
    ) -> Self {
        Self {
            embedder,
            index,
            config,
        }
    }

    /// True when lookups will return empty because the embedder or index
    /// is not loaded.
    pub fn is_degraded(&self) -> bool {
        !self.embedder.is_available() || !self.index.is_available()
    }

    /// Nearest-passage lookup, filtered to `distance <= threshold`.
    ///
    /// An unavailable collaborator degrades to an empty result with a
    /// warning; a *failing* one propagates its error.
    pub fn lookup(&self, text: &str) -> GatewayResult<Vec<ViolationRecord>> {
        if !self.embedder.is_available() {
            warn!(
                component = "semantic",
                provider = self.embedder.name(),
                "semantic stage degraded: embedding provider unavailable"
            );
            return Ok(Vec::new());
        }
        if !self.index.is_available() {
            warn!(
                component = "semantic",
                index = self.index.name(),
                "semantic stage degraded: vector index unavailable"
            );
            return Ok(Vec::new());
        }

        let embedding = self.embedder.embed(text)?;
        let mut hits = self.index.query(&embedding, self.config.top_k)?;

        // Index contract says ascending already; sort anyway so a sloppy
        // backend cannot break the best-match-first ordering.
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        let threshold = self.config.distance_threshold;
        let violations: Vec<ViolationRecord> = hits
            .into_iter()
            .filter(|h| h.distance <= threshold)
            .map(|h| ViolationRecord {
                article: h.article,
                recital: h.recital,
                category: h.category,
                distance: h.distance,
                source_text: h.document,
            })
            .collect();

        debug!(
            violations = violations.len(),
            threshold, "semantic lookup complete"
        );

        Ok(violations)
    }
}
