//! Compiled detection regexes, one per pattern kind.
//!
//! Patterns are heuristic by design: credit cards skip Luhn, IBANs skip
//! checksums, dates over-match. High recall is the point; the entity stage
//! and masking engine deal with the fallout.

use std::sync::LazyLock;

use gdpr_core::models::DetectionKind;
use regex::Regex;

/// A compiled detection pattern for one kind.
pub struct PatternSpec {
    pub kind: DetectionKind,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! detection_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Email (RFC-ish local@domain) ───────────────────────────────────────────
detection_pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b"
);

// ── Phone (international + domestic, separators allowed) ─────────────────
// Candidate only: optional country code, optional area code, 2-4 digit
// groups. The detector post-filters by total digit count (7-15) and
// rejects candidates glued to adjacent digits, which stands in for the
// lookaround guards the `regex` crate doesn't support.
// Extensions and shortcodes stay out of scope.
detection_pattern!(
    RE_PHONE,
    r"\+?\d{1,3}[\s.\-]?(?:\(\d{1,4}\)|\d{1,4})?(?:[\s.\-]?\d{2,4}){2,4}"
);

// ── Credit card (13-19 digit runs, optional separators, no Luhn) ──────────
detection_pattern!(RE_CREDIT_CARD, r"\b(?:\d[ \-]*?){13,19}\b");

// ── IBAN (country + check digits + 10-30 alnum, no checksum) ──────────────
detection_pattern!(RE_IBAN, r"\b[A-Z]{2}\d{2}[A-Z0-9]{10,30}\b");

// ── IPv4 ───────────────────────────────────────────────────────────────────
detection_pattern!(
    RE_IPV4,
    r"\b(?:(?:25[0-5]|2[0-4]\d|1?\d{1,2})\.){3}(?:25[0-5]|2[0-4]\d|1?\d{1,2})\b"
);

// ── IPv6 (full 8-group form only, no :: compression) ──────────────────────
detection_pattern!(RE_IPV6, r"(?i)\b(?:[A-F0-9]{1,4}:){7}[A-F0-9]{1,4}\b");

// ── URL (http/https only) ─────────────────────────────────────────────────
detection_pattern!(RE_URL, r"(?i)\bhttps?://[^\s/$.?#].[^\s]*\b");

// ── Dates (numeric and month-name forms, deliberately broad) ──────────────
detection_pattern!(
    RE_DATE,
    r"(?i)\b(?:\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{4})\b"
);

// ── Generic customer IDs (CUST-1234, USER_82910, ID-998877) ───────────────
detection_pattern!(RE_CUSTOMER_ID, r"(?i)\b(?:ID|CUST|USER|ACC)[-_]?\d{3,10}\b");

/// All pattern specs, in enum order. Used by the detector and by the
/// pattern-health test that asserts every regex compiles.
pub fn all_patterns() -> Vec<PatternSpec> {
    vec![
        PatternSpec {
            kind: DetectionKind::Email,
            regex: &RE_EMAIL,
        },
        PatternSpec {
            kind: DetectionKind::Phone,
            regex: &RE_PHONE,
        },
        PatternSpec {
            kind: DetectionKind::CreditCard,
            regex: &RE_CREDIT_CARD,
        },
        PatternSpec {
            kind: DetectionKind::Iban,
            regex: &RE_IBAN,
        },
        PatternSpec {
            kind: DetectionKind::Ipv4,
            regex: &RE_IPV4,
        },
        PatternSpec {
            kind: DetectionKind::Ipv6,
            regex: &RE_IPV6,
        },
        PatternSpec {
            kind: DetectionKind::Url,
            regex: &RE_URL,
        },
        PatternSpec {
            kind: DetectionKind::Date,
            regex: &RE_DATE,
        },
        PatternSpec {
            kind: DetectionKind::CustomerId,
            regex: &RE_CUSTOMER_ID,
        },
    ]
}
