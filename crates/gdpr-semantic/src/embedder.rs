//! Hashed TF-IDF embedding provider.
//!
//! Deterministic dense vectors from term frequencies hashed into fixed
//! buckets. Nowhere near a sentence transformer semantically, but always
//! available, dependency-free, and it shares a vector space with any index
//! built by the same embedder — which is all the detector contract needs.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use gdpr_core::errors::GatewayResult;
use gdpr_core::traits::IEmbeddingProvider;

pub const DEFAULT_DIMENSIONS: usize = 256;

/// Deterministic hashed term-frequency embedder.
pub struct TfIdfEmbedder {
    dimensions: usize,
}

impl Default for TfIdfEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl TfIdfEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(&self, term: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        term.hash(&mut hasher);
        (hasher.finish() as usize) % self.dimensions
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let terms: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.len() >= 2)
            .map(str::to_lowercase)
            .collect();

        let mut out = vec![0.0f32; self.dimensions];
        if terms.is_empty() {
            return out;
        }

        let mut counts: HashMap<&str, f32> = HashMap::new();
        for term in &terms {
            *counts.entry(term.as_str()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        for (term, count) in &counts {
            // Longer terms carry more signal; short ones are near-stopwords.
            let weight = (count / total) * (1.0 + (term.len() as f32).ln());
            out[self.bucket(term)] += weight;
        }

        // L2 normalize so cosine distances stay in [0, 2].
        let norm: f32 = out.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut out {
                *v /= norm;
            }
        }

        out
    }
}

impl IEmbeddingProvider for TfIdfEmbedder {
    fn embed(&self, text: &str) -> GatewayResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-hash"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeddings_have_configured_dimensions() {
        let e = TfIdfEmbedder::new(64);
        assert_eq!(e.embed("health records of the patient").unwrap().len(), 64);
    }

    #[test]
    fn embedding_is_deterministic() {
        let e = TfIdfEmbedder::default();
        let a = e.embed("processing of personal data").unwrap();
        let b = e.embed("processing of personal data").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_text_embeds_to_zero_vector() {
        let e = TfIdfEmbedder::new(32);
        let v = e.embed("   ").unwrap();
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn non_empty_embeddings_are_unit_length() {
        let e = TfIdfEmbedder::default();
        let v = e.embed("data subject rights and freedoms").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
    }

    #[test]
    fn different_texts_usually_differ() {
        let e = TfIdfEmbedder::default();
        let a = e.embed("biometric identification systems").unwrap();
        let b = e.embed("shipping container logistics").unwrap();
        assert_ne!(a, b);
    }
}
