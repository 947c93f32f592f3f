use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bundle::DetectionBundle;
use super::result::StageTimings;

/// What the gateway decided to do with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Blocked,
    Allowed,
}

/// One immutable audit entry per request.
///
/// Written synchronously before the response is returned; the append is on
/// the request's critical path. Serialized as a single JSON object, one
/// line per record in the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub original_text: String,
    pub masked_text: String,
    pub detections: DetectionBundle,
    pub timings: StageTimings,
}

impl AuditRecord {
    /// Build a record for the current instant.
    pub fn new(
        blocked: bool,
        original_text: impl Into<String>,
        masked_text: impl Into<String>,
        detections: DetectionBundle,
        timings: StageTimings,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            action: if blocked {
                AuditAction::Blocked
            } else {
                AuditAction::Allowed
            },
            original_text: original_text.into(),
            masked_text: masked_text.into(),
            detections,
            timings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AuditAction::Blocked).unwrap(),
            "\"blocked\""
        );
        assert_eq!(
            serde_json::to_string(&AuditAction::Allowed).unwrap(),
            "\"allowed\""
        );
    }

    #[test]
    fn action_tracks_blocked_flag() {
        let r = AuditRecord::new(
            true,
            "text",
            "text",
            DetectionBundle::default(),
            StageTimings::default(),
        );
        assert_eq!(r.action, AuditAction::Blocked);

        let r = AuditRecord::new(
            false,
            "text",
            "text",
            DetectionBundle::default(),
            StageTimings::default(),
        );
        assert_eq!(r.action, AuditAction::Allowed);
    }

    #[test]
    fn record_round_trips_as_one_json_object() {
        let r = AuditRecord::new(
            false,
            "hello",
            "hello",
            DetectionBundle::default(),
            StageTimings::default(),
        );
        let line = serde_json::to_string(&r).unwrap();
        assert!(!line.contains('\n'));
        let back: AuditRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back.action, AuditAction::Allowed);
        assert_eq!(back.original_text, "hello");
    }
}
