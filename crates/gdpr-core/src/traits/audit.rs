use crate::errors::GatewayResult;
use crate::models::AuditRecord;

/// Append-only audit sink.
///
/// Each record must land as one self-contained unit — interleaved appends
/// from concurrent requests may never produce a partially flushed record.
/// The append is synchronous and on the request's critical path.
pub trait IAuditSink: Send + Sync {
    fn append(&self, record: &AuditRecord) -> GatewayResult<()>;
}
