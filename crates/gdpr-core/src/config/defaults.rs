//! Default values and environment variable names for gateway config.

/// Cosine-distance cutoff for semantic violations. Empirically tuned
/// against the ingested corpus; re-tune via config, never by editing code.
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 0.30;

/// Nearest-neighbor count for the violation lookup.
pub const DEFAULT_TOP_K: usize = 5;

/// Directory the audit log lands in.
pub const DEFAULT_AUDIT_DIR: &str = "./logs";

/// File name of the newline-delimited JSON audit log.
pub const AUDIT_LOG_FILE: &str = "audit_log.jsonl";

/// Environment overrides.
pub const ENV_DISTANCE_THRESHOLD: &str = "GDPR_DISTANCE_THRESHOLD";
pub const ENV_TOP_K: &str = "GDPR_TOP_K";
pub const ENV_AUDIT_DIR: &str = "GDPR_AUDIT_DIR";
