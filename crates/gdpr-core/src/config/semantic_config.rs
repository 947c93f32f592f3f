use serde::{Deserialize, Serialize};

use super::defaults;

/// Semantic violation detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticConfig {
    /// Maximum distance for a passage to count as a violation (inclusive).
    pub distance_threshold: f64,
    /// How many nearest neighbors to fetch before threshold filtering.
    pub top_k: usize,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            distance_threshold: defaults::DEFAULT_DISTANCE_THRESHOLD,
            top_k: defaults::DEFAULT_TOP_K,
        }
    }
}
