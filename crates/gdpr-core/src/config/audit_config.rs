use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;

/// Audit log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Directory the audit log is written to. Created on first append if
    /// missing.
    pub log_dir: PathBuf,
}

impl AuditConfig {
    /// Full path of the audit log file inside `log_dir`.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(defaults::AUDIT_LOG_FILE)
    }

    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            log_dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(defaults::DEFAULT_AUDIT_DIR),
        }
    }
}
