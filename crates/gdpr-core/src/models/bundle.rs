use serde::{Deserialize, Serialize};

use super::detection::DetectionMap;
use super::violation::ViolationRecord;

/// Aggregate of everything the three detectors found in one request.
///
/// This is the unit handed to the masking engine and embedded in the audit
/// record. The blocking decision is exactly `!is_empty()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionBundle {
    /// Regex detections, kind -> values in order of appearance.
    pub patterns: DetectionMap,
    /// Entity detections, same shape.
    pub entities: DetectionMap,
    /// Semantic violations, ascending by distance.
    pub violations: Vec<ViolationRecord>,
}

impl DetectionBundle {
    /// True when no detector found anything.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.entities.is_empty() && self.violations.is_empty()
    }
}
