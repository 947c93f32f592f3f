pub mod audit_config;
pub mod defaults;
pub mod semantic_config;

pub use audit_config::AuditConfig;
pub use semantic_config::SemanticConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, GatewayResult};

/// Top-level gateway configuration.
///
/// Defaults come from [`defaults`]; a TOML file can override them, and
/// environment variables override both. The semantic threshold and top_k
/// are deliberately config-only values — they must stay re-tunable without
/// a code change to keep the blocking decision auditable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub semantic: SemanticConfig,
    pub audit: AuditConfig,
}

impl GatewayConfig {
    /// Parse a TOML config string. Unknown keys are ignored; missing
    /// sections fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read and parse a TOML config file.
    ///
    /// An unreadable or malformed file is an error, never a silent fall
    /// back to defaults.
    pub fn load(path: impl AsRef<Path>) -> GatewayResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let cfg = Self::from_toml_str(&raw).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(cfg)
    }

    /// Apply environment-variable overrides on top of this config.
    ///
    /// Unset or unparseable variables leave the current value untouched.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(t) = env_parse::<f64>(defaults::ENV_DISTANCE_THRESHOLD) {
            self.semantic.distance_threshold = t;
        }
        if let Some(k) = env_parse::<usize>(defaults::ENV_TOP_K) {
            self.semantic.top_k = k;
        }
        if let Ok(dir) = std::env::var(defaults::ENV_AUDIT_DIR) {
            if !dir.is_empty() {
                self.audit.log_dir = dir.into();
            }
        }
        self
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }
}

fn env_parse<T: std::str::FromStr>(var: &str) -> Option<T> {
    std::env::var(var).ok()?.parse().ok()
}
