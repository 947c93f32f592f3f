//! The gateway pipeline: Pattern -> Entity -> Semantic -> Mask -> Audit.

use std::sync::Arc;
use std::time::Instant;

use gdpr_core::config::GatewayConfig;
use gdpr_core::errors::{GatewayError, GatewayResult};
use gdpr_core::models::{AuditRecord, DetectionBundle, ProcessingResult, StageTimings};
use gdpr_core::traits::{IAuditSink, IEmbeddingProvider, IEntityRecognizer, IVectorIndex};
use gdpr_entities::EntityDetector;
use gdpr_masking::MaskingEngine;
use gdpr_patterns::PatternDetector;
use gdpr_semantic::SemanticDetector;
use tracing::{debug, info};

/// Sequences the detectors, decides blocking, masks, and audits.
///
/// All collaborators are injected at construction — no globals, no lazily
/// initialized singletons — so the pipeline is testable and tear-down is
/// just dropping it. Stages run strictly in order with no internal
/// parallelism; the semantic detector runs on every request rather than
/// only when cheaper signals fire. Stage failures are not caught here: a
/// failing detector or a failing audit append aborts the whole request.
pub struct GatewayPipeline {
    patterns: PatternDetector,
    entities: EntityDetector,
    semantic: SemanticDetector,
    masking: MaskingEngine,
    audit: Arc<dyn IAuditSink>,
}

impl GatewayPipeline {
    /// Assemble a pipeline from its collaborators.
    ///
    /// `recognizer` is optional: without one the entity stage runs
    /// degraded (empty results, logged) instead of failing startup.
    pub fn new(
        config: &GatewayConfig,
        recognizer: Option<Arc<dyn IEntityRecognizer>>,
        embedder: Arc<dyn IEmbeddingProvider>,
        index: Arc<dyn IVectorIndex>,
        audit: Arc<dyn IAuditSink>,
    ) -> Self {
        let entities = match recognizer {
            Some(r) => EntityDetector::new(r),
            None => EntityDetector::disabled(),
        };
        let semantic = SemanticDetector::new(embedder, index, config.semantic.clone());

        let pipeline = Self {
            patterns: PatternDetector::new(),
            entities,
            semantic,
            masking: MaskingEngine::new(),
            audit,
        };

        info!(
            entity_degraded = pipeline.entities.is_degraded(),
            semantic_degraded = pipeline.semantic.is_degraded(),
            "gateway pipeline assembled"
        );

        pipeline
    }

    /// Run the full pipeline for one request.
    ///
    /// Empty or whitespace-only text is rejected before any stage runs.
    /// The audit record is written synchronously before this returns; if
    /// the append fails, the request fails.
    pub fn process(&self, text: &str) -> GatewayResult<ProcessingResult> {
        if text.trim().is_empty() {
            return Err(GatewayError::InvalidInput(
                "text must be non-empty".to_string(),
            ));
        }

        let started = Instant::now();
        let mut timings = StageTimings::default();

        let stage = Instant::now();
        let patterns = self.patterns.detect(text);
        timings.patterns_us = stage.elapsed().as_micros() as u64;

        let stage = Instant::now();
        let entities = self.entities.detect(text)?;
        timings.entities_us = stage.elapsed().as_micros() as u64;

        let stage = Instant::now();
        let violations = self.semantic.lookup(text)?;
        timings.semantic_us = stage.elapsed().as_micros() as u64;

        let bundle = DetectionBundle {
            patterns,
            entities,
            violations,
        };
        let blocked = !bundle.is_empty();

        let stage = Instant::now();
        let masked_text = self.masking.mask(text, &bundle);
        timings.masking_us = stage.elapsed().as_micros() as u64;
        timings.total_us = started.elapsed().as_micros() as u64;

        debug!(
            blocked,
            pattern_kinds = bundle.patterns.len(),
            entity_kinds = bundle.entities.len(),
            violations = bundle.violations.len(),
            total_us = timings.total_us,
            "pipeline stages complete"
        );

        let record = AuditRecord::new(blocked, text, masked_text.as_str(), bundle.clone(), timings);
        self.audit.append(&record)?;

        // The write is on the request's critical path; the caller's total
        // includes it. The record's own total necessarily stops at masking.
        timings.total_us = started.elapsed().as_micros() as u64;

        Ok(ProcessingResult {
            blocked,
            masked_text,
            detections: bundle,
            timings,
        })
    }
}
