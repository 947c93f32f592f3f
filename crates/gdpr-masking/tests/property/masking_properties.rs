use gdpr_core::models::{DetectionBundle, DetectionKind};
use gdpr_masking::MaskingEngine;
use proptest::prelude::*;

// ── Masked output never contains a detected value ─────────────────────────

proptest! {
    #[test]
    fn masked_output_never_contains_raw_email(
        user in "[a-z]{3,8}",
        domain in "[a-z]{3,8}",
        prefix in "[a-zA-Z ]{0,12}",
        suffix in "[a-zA-Z ]{0,12}"
    ) {
        let email = format!("{user}@{domain}.com");
        let text = format!("{prefix}{email}{suffix}");

        let mut bundle = DetectionBundle::default();
        bundle.patterns.insert(DetectionKind::Email, vec![email.clone()]);

        let masked = MaskingEngine::new().mask(&text, &bundle);
        prop_assert!(
            !masked.contains(&email),
            "raw email survived masking: {masked}"
        );
        prop_assert!(masked.contains("[EMAIL]"));
    }

    // ── Masking is idempotent ─────────────────────────────────────────────

    #[test]
    fn masking_is_idempotent(
        user in "[a-z]{3,8}",
        digits in "[0-9]{7}"
    ) {
        let email = format!("{user}@example.org");
        let text = format!("contact {email} or {digits}");

        let mut bundle = DetectionBundle::default();
        bundle.patterns.insert(DetectionKind::Email, vec![email]);
        bundle.patterns.insert(DetectionKind::Phone, vec![digits]);

        let engine = MaskingEngine::new();
        let once = engine.mask(&text, &bundle);
        // Placeholders contain no raw values, so a second pass with an
        // empty bundle must change nothing.
        let twice = engine.mask(&once, &DetectionBundle::default());
        prop_assert_eq!(once, twice);
    }

    // ── Determinism regardless of value ordering ──────────────────────────

    #[test]
    fn mask_is_order_independent(
        a in "[a-z]{4,6}",
        b in "[a-z]{4,6}"
    ) {
        prop_assume!(a != b);
        let text = format!("{a}@x.com and {b}@x.com");
        let (va, vb) = (format!("{a}@x.com"), format!("{b}@x.com"));

        let mut fwd = DetectionBundle::default();
        fwd.patterns.insert(DetectionKind::Email, vec![va.clone(), vb.clone()]);
        let mut rev = DetectionBundle::default();
        rev.patterns.insert(DetectionKind::Email, vec![vb, va]);

        let engine = MaskingEngine::new();
        prop_assert_eq!(engine.mask(&text, &fwd), engine.mask(&text, &rev));
    }
}
