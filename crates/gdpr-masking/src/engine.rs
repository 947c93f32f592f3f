//! The masking engine.
//!
//! Substitution is span-based, longest-match-first. Naive whole-text
//! replacement (value by value) is order-dependent when one detected value
//! is a substring of another: whichever substitution runs first chews up
//! part of the other's match and leaves a corrupted half-placeholder. This
//! engine instead locates every occurrence of every value up front, lets
//! longer spans claim their character ranges before shorter ones, and
//! replaces from the end of the text backwards so offsets stay valid.

use std::collections::{BTreeSet, HashSet};

use gdpr_core::models::{DetectionBundle, DetectionMap, ViolationRecord};

/// A candidate replacement span in the original text.
#[derive(Debug, Clone)]
struct MaskSpan {
    start: usize,
    end: usize,
    placeholder: &'static str,
    /// 0 = pattern detection, 1 = entity detection. Tie-break only.
    source: u8,
}

impl MaskSpan {
    fn width(&self) -> usize {
        self.end - self.start
    }

    fn overlaps(&self, other: &MaskSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Deterministic placeholder substitution over detected values.
///
/// Masking already-masked text (which carries no further raw values and no
/// violations) is a no-op, so the transform is idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskingEngine;

impl MaskingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Produce the masked rendering of `text` for the given detections.
    pub fn mask(&self, text: &str, bundle: &DetectionBundle) -> String {
        let mut candidates = Vec::new();
        collect_spans(text, &bundle.patterns, 0, &mut candidates);
        collect_spans(text, &bundle.entities, 1, &mut candidates);

        let kept = resolve_overlaps(candidates);

        // Replace from the end so earlier offsets stay valid.
        let mut masked = text.to_string();
        for span in kept.iter().rev() {
            masked.replace_range(span.start..span.end, span.placeholder);
        }

        match violation_tag(&bundle.violations) {
            Some(tag) => format!("{tag} {masked}"),
            None => masked,
        }
    }
}

/// Locate every literal occurrence of every detected value. Values are
/// deduplicated within a kind first: one value, all its occurrences.
fn collect_spans(text: &str, detections: &DetectionMap, source: u8, out: &mut Vec<MaskSpan>) {
    for (kind, values) in detections {
        let mut seen = HashSet::new();
        for value in values {
            if value.is_empty() || !seen.insert(value.as_str()) {
                continue;
            }
            for (start, _) in text.match_indices(value.as_str()) {
                out.push(MaskSpan {
                    start,
                    end: start + value.len(),
                    placeholder: kind.placeholder(),
                    source,
                });
            }
        }
    }
}

/// Longest-match-first claim over character ranges. Ties go to the earlier
/// start, then to pattern detections over entity detections — a fixed order
/// so the outcome never depends on detector iteration order.
fn resolve_overlaps(mut candidates: Vec<MaskSpan>) -> Vec<MaskSpan> {
    candidates.sort_by(|a, b| {
        b.width()
            .cmp(&a.width())
            .then(a.start.cmp(&b.start))
            .then(a.source.cmp(&b.source))
    });

    let mut kept: Vec<MaskSpan> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if kept.iter().all(|k| !k.overlaps(&candidate)) {
            kept.push(candidate);
        }
    }

    kept.sort_by_key(|s| s.start);
    kept
}

/// Build the single `[GDPR_VIOLATION | ...]` prefix tag: sorted distinct
/// article labels, sorted distinct recital labels, each segment omitted
/// when its set is empty.
fn violation_tag(violations: &[ViolationRecord]) -> Option<String> {
    if violations.is_empty() {
        return None;
    }

    let articles: BTreeSet<&str> = violations
        .iter()
        .filter_map(|v| v.article.as_deref())
        .collect();
    let recitals: BTreeSet<&str> = violations
        .iter()
        .filter_map(|v| v.recital.as_deref())
        .collect();

    let mut segments = Vec::new();
    if !articles.is_empty() {
        segments.push(format!(
            "Articles: {}",
            articles.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }
    if !recitals.is_empty() {
        segments.push(format!(
            "Recitals: {}",
            recitals.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }

    if segments.is_empty() {
        Some("[GDPR_VIOLATION]".to_string())
    } else {
        Some(format!("[GDPR_VIOLATION | {}]", segments.join(" | ")))
    }
}
