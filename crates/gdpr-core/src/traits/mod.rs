pub mod audit;
pub mod embedding;
pub mod index;
pub mod recognizer;

pub use audit::IAuditSink;
pub use embedding::IEmbeddingProvider;
pub use index::{IVectorIndex, IndexHit};
pub use recognizer::{EntitySpan, IEntityRecognizer};
