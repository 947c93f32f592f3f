/// Configuration loading errors.
///
/// A config that cannot be read or parsed fails startup; the gateway never
/// silently falls back to defaults when an explicit config file was given.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config read from '{path}' failed: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("config parse of '{path}' failed: {reason}")]
    ParseFailed { path: String, reason: String },
}
