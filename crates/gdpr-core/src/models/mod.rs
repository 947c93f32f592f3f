pub mod audit;
pub mod bundle;
pub mod detection;
pub mod result;
pub mod violation;

pub use audit::{AuditAction, AuditRecord};
pub use bundle::DetectionBundle;
pub use detection::{DetectionKind, DetectionMap};
pub use result::{ProcessingResult, StageTimings};
pub use violation::ViolationRecord;
