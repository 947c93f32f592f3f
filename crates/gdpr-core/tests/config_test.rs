use gdpr_core::config::{defaults, GatewayConfig};

// All env manipulation lives in one test: cargo runs tests in parallel
// threads and these variables are process-global.
#[test]
fn env_overrides_apply_and_bad_values_are_ignored() {
    std::env::set_var(defaults::ENV_DISTANCE_THRESHOLD, "0.42");
    std::env::set_var(defaults::ENV_TOP_K, "9");
    std::env::set_var(defaults::ENV_AUDIT_DIR, "/tmp/gdpr-audit");

    let cfg = GatewayConfig::from_env();
    assert_eq!(cfg.semantic.distance_threshold, 0.42);
    assert_eq!(cfg.semantic.top_k, 9);
    assert_eq!(cfg.audit.log_dir, std::path::PathBuf::from("/tmp/gdpr-audit"));

    // Unparseable values leave the current setting untouched.
    std::env::set_var(defaults::ENV_DISTANCE_THRESHOLD, "not-a-number");
    std::env::set_var(defaults::ENV_TOP_K, "-3");
    let cfg = GatewayConfig::from_env();
    assert_eq!(
        cfg.semantic.distance_threshold,
        defaults::DEFAULT_DISTANCE_THRESHOLD
    );
    assert_eq!(cfg.semantic.top_k, defaults::DEFAULT_TOP_K);

    std::env::remove_var(defaults::ENV_DISTANCE_THRESHOLD);
    std::env::remove_var(defaults::ENV_TOP_K);
    std::env::remove_var(defaults::ENV_AUDIT_DIR);
}
