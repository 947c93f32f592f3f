//! # gdpr-core
//!
//! Foundation crate for the GDPR gateway pipeline.
//! Defines all types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GatewayConfig;
pub use errors::{GatewayError, GatewayResult};
pub use models::{
    AuditAction, AuditRecord, DetectionBundle, DetectionKind, DetectionMap, ProcessingResult,
    StageTimings, ViolationRecord,
};
