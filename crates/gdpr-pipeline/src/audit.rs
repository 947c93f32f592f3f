//! Append-only JSONL audit sink.
//!
//! One JSON object per line, UTF-8, flushed inside a single critical
//! section so concurrent requests can never interleave partial records.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gdpr_core::config::AuditConfig;
use gdpr_core::errors::{AuditError, GatewayResult};
use gdpr_core::models::AuditRecord;
use gdpr_core::traits::IAuditSink;
use tracing::info;

/// File-backed audit log, newline-delimited JSON, append-only.
pub struct JsonlAuditLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlAuditLog {
    /// Open (creating directory and file as needed) the audit log under
    /// the configured directory.
    pub fn open(config: &AuditConfig) -> GatewayResult<Self> {
        std::fs::create_dir_all(&config.log_dir).map_err(|e| AuditError::WriteFailed {
            path: config.log_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let path = config.log_path();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|e| AuditError::WriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        info!(path = %path.display(), "audit log opened");

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IAuditSink for JsonlAuditLog {
    fn append(&self, record: &AuditRecord) -> GatewayResult<()> {
        let mut line =
            serde_json::to_string(record).map_err(|e| AuditError::SerializeFailed {
                reason: e.to_string(),
            })?;
        line.push('\n');

        let mut file = self.file.lock().map_err(|_| AuditError::WriteFailed {
            path: self.path.display().to_string(),
            reason: "audit writer mutex poisoned".to_string(),
        })?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| AuditError::WriteFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
