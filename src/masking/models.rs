//! Masking outcome data models

use crate::domain::Record;
use crate::masking::policy::FieldPolicy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One field replacement performed while processing a record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMasking {
    /// Field name
    pub field: String,
    /// Masking mode applied
    pub mode: FieldPolicy,
    /// Original value (hashed before it reaches any log)
    pub original: String,
    /// Replacement value
    pub masked: String,
    /// True when format-preserving masking fell back to the fixed
    /// placeholder for this value
    pub fallback: bool,
}

/// Result of masking a single record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingOutcome {
    /// Sequence number of the record within the engine's run
    pub record_seq: u64,
    /// Masked record (original data in dry-run mode)
    pub masked_record: Record,
    /// Replacements performed (or that would be performed, in dry-run)
    pub maskings: Vec<FieldMasking>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of processing
    pub timestamp: DateTime<Utc>,
    /// Replacement counts by mode
    pub stats_by_mode: HashMap<FieldPolicy, usize>,
}

impl MaskingOutcome {
    /// Create a new outcome, deriving the per-mode statistics
    pub fn new(
        record_seq: u64,
        masked_record: Record,
        maskings: Vec<FieldMasking>,
        processing_time_ms: u64,
    ) -> Self {
        let mut stats_by_mode = HashMap::new();
        for masking in &maskings {
            *stats_by_mode.entry(masking.mode).or_insert(0) += 1;
        }

        Self {
            record_seq,
            masked_record,
            maskings,
            processing_time_ms,
            timestamp: Utc::now(),
            stats_by_mode,
        }
    }

    /// Number of values replaced
    pub fn total_maskings(&self) -> usize {
        self.maskings.len()
    }

    /// True if any value was replaced
    pub fn has_maskings(&self) -> bool {
        !self.maskings.is_empty()
    }
}
