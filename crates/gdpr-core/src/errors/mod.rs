pub mod audit_error;
pub mod config_error;
pub mod detector_error;
pub mod semantic_error;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use detector_error::DetectorError;
pub use semantic_error::SemanticError;

/// Top-level error for the gateway pipeline.
///
/// Error messages describe what failed, never what was detected — detection
/// details must not leak through error responses.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Detector(#[from] DetectorError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),

    #[error(transparent)]
    Audit(#[from] AuditError),
}

/// Convenience result alias used across all gateway crates.
pub type GatewayResult<T> = Result<T, GatewayError>;
