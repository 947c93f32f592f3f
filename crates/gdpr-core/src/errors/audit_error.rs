/// Audit-log errors.
///
/// A failed append fails the whole request: a response must never be
/// returned as successful if its audit trail could not be written.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit append to '{path}' failed: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("audit record serialization failed: {reason}")]
    SerializeFailed { reason: String },
}
