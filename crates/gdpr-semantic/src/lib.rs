//! # gdpr-semantic
//!
//! Semantic violation detection: embed the input, look up nearest
//! regulation passages, report those within the distance threshold.
//!
//! The embedding model and vector index are collaborators behind
//! [`IEmbeddingProvider`](gdpr_core::traits::IEmbeddingProvider) and
//! [`IVectorIndex`](gdpr_core::traits::IVectorIndex); this crate ships a
//! deterministic hashed TF-IDF embedder and a brute-force in-memory index
//! so the pipeline runs without external services. Distance semantics must
//! match whatever the index was built with — the threshold is an
//! empirically tuned constant, configured, never hardcoded.

pub mod detector;
pub mod embedder;
pub mod index;

pub use detector::SemanticDetector;
pub use embedder::TfIdfEmbedder;
pub use index::{InMemoryIndex, IndexedPassage};
