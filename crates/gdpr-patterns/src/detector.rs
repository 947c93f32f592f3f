//! The pattern detector: scans text with every compiled pattern and
//! collects matches per kind, in order of first occurrence.

use gdpr_core::models::{DetectionKind, DetectionMap};

use crate::patterns;

/// Stateless regex scanner over the nine fixed pattern kinds.
///
/// Matching is greedy left-to-right within a kind; kinds are independent
/// and may produce overlapping character ranges. Kinds with zero matches
/// are omitted from the result, so empty lists never appear.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternDetector;

impl PatternDetector {
    pub fn new() -> Self {
        Self
    }

    /// Scan `text` and return matched values grouped by kind.
    pub fn detect(&self, text: &str) -> DetectionMap {
        let mut out = DetectionMap::new();

        for spec in patterns::all_patterns() {
            // A pattern that failed to compile contributes no matches.
            let Some(re) = spec.regex.as_ref() else {
                continue;
            };

            let mut values = Vec::new();
            for m in re.find_iter(text) {
                if spec.kind == DetectionKind::Phone
                    && !is_plausible_phone(text, m.start(), m.end())
                {
                    continue;
                }
                values.push(m.as_str().to_string());
            }

            if !values.is_empty() {
                out.insert(spec.kind, values);
            }
        }

        out
    }
}

/// Phone candidates must carry 7-15 digits (E.164 compatible) and must not
/// sit flush against further digits — that is how long IDs, timestamps, and
/// card numbers are kept out of the phone kind.
fn is_plausible_phone(text: &str, start: usize, end: usize) -> bool {
    let digits = text[start..end].chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) {
        return false;
    }
    if text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }
    if text[end..].chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }
    true
}
