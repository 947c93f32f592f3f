//! The entity detector: recognizer wrapper, post-filters, reassembly.

use std::sync::Arc;

use gdpr_core::errors::GatewayResult;
use gdpr_core::models::{DetectionKind, DetectionMap};
use gdpr_core::traits::IEntityRecognizer;
use tracing::{debug, warn};

use crate::filters;
use crate::reassembly;

/// Wraps an entity-recognition backend and cleans up its output.
///
/// Built with `None` (or an unavailable recognizer), the detector runs in
/// degraded mode: every `detect` call returns an empty map after logging a
/// warning. Degradation is queryable via [`is_degraded`](Self::is_degraded);
/// it is never silent.
pub struct EntityDetector {
    recognizer: Option<Arc<dyn IEntityRecognizer>>,
}

impl EntityDetector {
    pub fn new(recognizer: Arc<dyn IEntityRecognizer>) -> Self {
        Self {
            recognizer: Some(recognizer),
        }
    }

    /// A detector with no recognizer at all — permanent degraded mode.
    pub fn disabled() -> Self {
        warn!(component = "entities", "no entity recognizer configured, stage degraded to empty results");
        Self { recognizer: None }
    }

    /// True when entity detection will produce empty results because the
    /// backend is missing or reports itself unavailable.
    pub fn is_degraded(&self) -> bool {
        !self
            .recognizer
            .as_ref()
            .is_some_and(|r| r.is_available())
    }

    /// Recognize, filter, and reassemble entities in `text`.
    ///
    /// Recognizer *errors* propagate and abort the request; an
    /// *unavailable* recognizer degrades to an empty result instead.
    pub fn detect(&self, text: &str) -> GatewayResult<DetectionMap> {
        let Some(recognizer) = &self.recognizer else {
            warn!(component = "entities", "entity stage degraded: no recognizer");
            return Ok(DetectionMap::new());
        };
        if !recognizer.is_available() {
            warn!(
                component = "entities",
                recognizer = recognizer.name(),
                "entity stage degraded: recognizer unavailable"
            );
            return Ok(DetectionMap::new());
        }

        let spans = recognizer.recognize(text)?;
        let mut map = DetectionMap::new();

        for span in spans {
            let value = span.text.trim();
            if value.is_empty() || filters::in_stoplist(value) {
                continue;
            }
            let Some(kind) = DetectionKind::from_entity_label(&span.label) else {
                continue;
            };
            if kind == DetectionKind::Date && filters::is_date_noise(value) {
                continue;
            }
            map.entry(kind).or_default().push(value.to_string());
        }

        // Reassemble person names split across adjacent spans.
        if let Some(persons) = map.remove(&DetectionKind::Person) {
            let merged = reassembly::merge_person_names(persons);
            if !merged.is_empty() {
                map.insert(DetectionKind::Person, merged);
            }
        }

        debug!(
            recognizer = recognizer.name(),
            kinds = map.len(),
            "entity detection complete"
        );

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdpr_core::errors::{DetectorError, GatewayError};
    use gdpr_core::traits::EntitySpan;

    /// Test recognizer that replays a fixed list of spans.
    struct StaticRecognizer {
        spans: Vec<EntitySpan>,
        available: bool,
    }

    impl StaticRecognizer {
        fn with_spans(spans: Vec<EntitySpan>) -> Arc<Self> {
            Arc::new(Self {
                spans,
                available: true,
            })
        }
    }

    impl IEntityRecognizer for StaticRecognizer {
        fn recognize(&self, _text: &str) -> GatewayResult<Vec<EntitySpan>> {
            Ok(self.spans.clone())
        }

        fn name(&self) -> &str {
            "static"
        }

        fn is_available(&self) -> bool {
            self.available
        }
    }

    /// Test recognizer whose inference always fails.
    struct FailingRecognizer;

    impl IEntityRecognizer for FailingRecognizer {
        fn recognize(&self, _text: &str) -> GatewayResult<Vec<EntitySpan>> {
            Err(DetectorError::RecognizerFailed {
                recognizer: "failing".to_string(),
                reason: "model crashed".to_string(),
            }
            .into())
        }

        fn name(&self) -> &str {
            "failing"
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn disabled_detector_degrades_to_empty() {
        let detector = EntityDetector::disabled();
        assert!(detector.is_degraded());
        assert!(detector.detect("John Smith lives here").unwrap().is_empty());
    }

    #[test]
    fn unavailable_recognizer_degrades_to_empty() {
        let detector = EntityDetector::new(Arc::new(StaticRecognizer {
            spans: vec![EntitySpan::new("PERSON", "John Smith")],
            available: false,
        }));
        assert!(detector.is_degraded());
        assert!(detector.detect("John Smith").unwrap().is_empty());
    }

    #[test]
    fn recognizer_failure_propagates() {
        let detector = EntityDetector::new(Arc::new(FailingRecognizer));
        let err = detector.detect("anything").unwrap_err();
        assert!(matches!(err, GatewayError::Detector(_)));
    }

    #[test]
    fn stoplist_and_unknown_labels_dropped() {
        let detector = EntityDetector::new(StaticRecognizer::with_spans(vec![
            EntitySpan::new("ORG", "IBAN"),
            EntitySpan::new("ORG", "Acme Corp"),
            EntitySpan::new("MONEY", "$40"),
        ]));
        let map = detector.detect("x").unwrap();
        assert_eq!(map[&DetectionKind::Org], vec!["Acme Corp"]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn date_noise_dropped_real_dates_kept() {
        let detector = EntityDetector::new(StaticRecognizer::with_spans(vec![
            EntitySpan::new("DATE", "04 1234 5678"),
            EntitySpan::new("DATE", "2023"),
            EntitySpan::new("DATE", "March 3, 2021"),
        ]));
        let map = detector.detect("x").unwrap();
        assert_eq!(map[&DetectionKind::Date], vec!["March 3, 2021"]);
    }

    #[test]
    fn split_person_names_are_reassembled() {
        let detector = EntityDetector::new(StaticRecognizer::with_spans(vec![
            EntitySpan::new("PERSON", "Mary-Anne van"),
            EntitySpan::new("PERSON", "Merwe"),
            EntitySpan::new("GPE", "Cape Town"),
        ]));
        let map = detector.detect("x").unwrap();
        assert_eq!(map[&DetectionKind::Person], vec!["Mary-Anne van Merwe"]);
        assert_eq!(map[&DetectionKind::Gpe], vec!["Cape Town"]);
    }

    #[test]
    fn empty_kinds_are_omitted() {
        let detector = EntityDetector::new(StaticRecognizer::with_spans(vec![EntitySpan::new(
            "DATE", "1111",
        )]));
        // The only date was noise, so no date key appears at all.
        assert!(detector.detect("x").unwrap().is_empty());
    }
}
