//! # gdpr-pipeline
//!
//! The orchestrator: sequences pattern, entity, and semantic detection,
//! masks the text, decides whether to block, and writes one audit record
//! per request before answering. Each request is fully synchronous and
//! touches no state shared with other requests beyond the read-only
//! collaborators and the append-only audit sink.

pub mod audit;
pub mod orchestrator;

pub use audit::JsonlAuditLog;
pub use orchestrator::GatewayPipeline;
