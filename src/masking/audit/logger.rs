//! Audit logger for masking operations

use crate::masking::models::{FieldMasking, MaskingOutcome};
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    record_seq: u64,
    maskings_count: usize,
    processing_time_ms: u64,
    maskings: Vec<AuditMasking>,
}

/// Audit masking entry (with hashed original)
#[derive(Debug, Serialize)]
struct AuditMasking {
    field: String,
    mode: String,
    /// SHA-256 hash of the original value (never log plaintext)
    value_hash: String,
    fallback: bool,
}

/// Audit logger for masking operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create audit log directory: {}", parent.display())
                    })?;
                }
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log a masked record
    pub fn log_masking(&self, outcome: &MaskingOutcome) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: outcome.timestamp.to_rfc3339(),
            record_seq: outcome.record_seq,
            maskings_count: outcome.maskings.len(),
            processing_time_ms: outcome.processing_time_ms,
            maskings: outcome
                .maskings
                .iter()
                .map(|m| self.create_audit_masking(m))
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Create an audit masking entry with a hashed original value
    fn create_audit_masking(&self, masking: &FieldMasking) -> AuditMasking {
        AuditMasking {
            field: masking.field.clone(),
            mode: masking.mode.label().to_string(),
            value_hash: hash_value(&masking.original),
            fallback: masking.fallback,
        }
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Record #{} | Maskings: {} | Time: {}ms",
                entry.timestamp, entry.record_seq, entry.maskings_count, entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash a value using SHA-256
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
