use serde::{Deserialize, Serialize};

use super::bundle::DetectionBundle;

/// Wall-clock duration of each pipeline stage, in microseconds.
///
/// `total_us` in a [`ProcessingResult`] spans the
/// whole request, including the synchronous audit write. The copy embedded
/// in the audit record is captured before its own write, so that total
/// stops at masking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimings {
    pub patterns_us: u64,
    pub entities_us: u64,
    pub semantic_us: u64,
    pub masking_us: u64,
    pub total_us: u64,
}

/// The pipeline's response for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub blocked: bool,
    pub masked_text: String,
    pub detections: DetectionBundle,
    pub timings: StageTimings,
}
