//! Run reporting for masking
//!
//! Aggregates per-record outcomes into a run-level report: replacement
//! statistics, sample replacements, and warnings (format fallbacks, policy
//! fields never seen in any record).

use crate::masking::models::MaskingOutcome;
use crate::masking::policy::FieldPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cap on sample replacements carried by a report
const MAX_SAMPLES: usize = 10;

/// Run-level masking report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingReport {
    /// Total records processed
    pub total_records: usize,

    /// Total values replaced
    pub total_masked_values: usize,

    /// Replacements by masking mode
    pub masked_by_mode: HashMap<FieldPolicy, usize>,

    /// Sample replacements (masked side only, originals never appear here)
    pub samples: Vec<MaskingSample>,

    /// Warnings collected during the run
    pub warnings: Vec<String>,

    /// Processing statistics
    pub stats: ProcessingStats,
}

/// Sample replacement showing the masked side of one field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingSample {
    /// Field name
    pub field: String,

    /// Masking mode applied
    pub mode: FieldPolicy,

    /// Replacement value
    pub masked: String,
}

/// Processing statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Average processing time per record (ms)
    pub avg_processing_time_ms: u64,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,

    /// Records where at least one value was replaced
    pub records_with_maskings: usize,

    /// Records left entirely unchanged
    pub records_without_maskings: usize,
}

impl MaskingReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            total_records: 0,
            total_masked_values: 0,
            masked_by_mode: HashMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            stats: ProcessingStats {
                avg_processing_time_ms: 0,
                total_processing_time_ms: 0,
                records_with_maskings: 0,
                records_without_maskings: 0,
            },
        }
    }

    /// Fold one record outcome into the report
    pub fn add_outcome(&mut self, outcome: &MaskingOutcome) {
        self.total_records += 1;
        self.total_masked_values += outcome.total_maskings();

        for (mode, count) in &outcome.stats_by_mode {
            *self.masked_by_mode.entry(*mode).or_insert(0) += count;
        }

        for masking in &outcome.maskings {
            if self.samples.len() >= MAX_SAMPLES {
                break;
            }
            self.samples.push(MaskingSample {
                field: masking.field.clone(),
                mode: masking.mode,
                masked: masking.masked.clone(),
            });
        }

        if outcome.has_maskings() {
            self.stats.records_with_maskings += 1;
        } else {
            self.stats.records_without_maskings += 1;
        }

        self.stats.total_processing_time_ms += outcome.processing_time_ms;
        self.stats.avg_processing_time_ms =
            self.stats.total_processing_time_ms / self.total_records as u64;
    }

    /// Record a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// True if the run produced warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Human-readable summary of the run
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Records processed: {}", self.total_records),
            format!("Values masked:     {}", self.total_masked_values),
        ];

        let mut by_mode: Vec<(&FieldPolicy, &usize)> = self.masked_by_mode.iter().collect();
        by_mode.sort_by_key(|(mode, _)| mode.label());
        for (mode, count) in by_mode {
            lines.push(format!("  {:<24} {}", mode.label(), count));
        }

        if !self.warnings.is_empty() {
            lines.push(format!("Warnings: {}", self.warnings.len()));
            for warning in &self.warnings {
                lines.push(format!("  - {warning}"));
            }
        }

        lines.join("\n")
    }
}

impl Default for MaskingReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use crate::masking::models::FieldMasking;

    fn outcome_with(seq: u64, maskings: Vec<FieldMasking>) -> MaskingOutcome {
        MaskingOutcome::new(seq, Record::new(), maskings, 2)
    }

    fn masking(field: &str, mode: FieldPolicy) -> FieldMasking {
        FieldMasking {
            field: field.to_string(),
            mode,
            original: "original".to_string(),
            masked: "masked".to_string(),
            fallback: false,
        }
    }

    #[test]
    fn test_report_aggregation() {
        let mut report = MaskingReport::new();
        report.add_outcome(&outcome_with(
            1,
            vec![
                masking("ssn", FieldPolicy::MaskConsistent),
                masking("phone", FieldPolicy::MaskFormatPreserving),
            ],
        ));
        report.add_outcome(&outcome_with(
            2,
            vec![masking("ssn", FieldPolicy::MaskConsistent)],
        ));
        report.add_outcome(&outcome_with(3, vec![]));

        assert_eq!(report.total_records, 3);
        assert_eq!(report.total_masked_values, 3);
        assert_eq!(report.masked_by_mode[&FieldPolicy::MaskConsistent], 2);
        assert_eq!(report.stats.records_with_maskings, 2);
        assert_eq!(report.stats.records_without_maskings, 1);
        assert_eq!(report.stats.total_processing_time_ms, 6);
        assert_eq!(report.stats.avg_processing_time_ms, 2);
    }

    #[test]
    fn test_samples_are_capped() {
        let mut report = MaskingReport::new();
        for seq in 0..5 {
            let maskings = (0..4)
                .map(|i| masking(&format!("f{i}"), FieldPolicy::MaskFixed))
                .collect();
            report.add_outcome(&outcome_with(seq, maskings));
        }

        assert_eq!(report.total_masked_values, 20);
        assert_eq!(report.samples.len(), MAX_SAMPLES);
    }

    #[test]
    fn test_samples_never_carry_originals() {
        let mut report = MaskingReport::new();
        report.add_outcome(&outcome_with(
            1,
            vec![masking("ssn", FieldPolicy::MaskConsistent)],
        ));

        let json = serde_json::to_string(&report.samples).unwrap();
        assert!(!json.contains("original"));
    }

    #[test]
    fn test_summary_mentions_warnings() {
        let mut report = MaskingReport::new();
        report.add_warning("policy field 'ssm' never seen in any record".to_string());

        assert!(report.has_warnings());
        let summary = report.summary();
        assert!(summary.contains("Warnings: 1"));
        assert!(summary.contains("ssm"));
    }
}
