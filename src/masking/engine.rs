//! Main masking engine
//!
//! This module provides the core [`MaskingEngine`] that applies a per-field
//! masking policy to records and maintains the consistent-token vault.
//!
//! # Architecture
//!
//! The engine coordinates three components:
//! - **Policy**: per-field masking modes, validated at engine creation
//! - **Strategies**: one replaceable [`MaskStrategy`] per mode
//! - **Audit Logger**: records masking operations with hashed values
//!
//! # Examples
//!
//! ```
//! use synstyl::masking::{MaskingConfig, MaskingEngine};
//! use synstyl::masking::policy::FieldPolicy;
//! use synstyl::domain::Record;
//!
//! # fn example() -> synstyl::domain::Result<()> {
//! let mut config = MaskingConfig::default();
//! config.policy.set("ssn", FieldPolicy::MaskConsistent);
//! config.policy.set("name", FieldPolicy::Passthrough);
//!
//! let engine = MaskingEngine::new(config)?;
//!
//! let mut record = Record::new();
//! record.insert("ssn", "123-45-6789");
//! record.insert("name", "Alice");
//!
//! let masked = engine.process(&record)?;
//! assert_eq!(masked.get("name"), record.get("name"));
//! assert_ne!(masked.get("ssn"), record.get("ssn"));
//! # Ok(())
//! # }
//! ```

use crate::domain::{FieldValue, Record, Result, SynstylError};
use crate::masking::{
    audit::AuditLogger,
    config::MaskingConfig,
    models::{FieldMasking, MaskingOutcome},
    policy::FieldPolicy,
    report::MaskingReport,
    strategy::{
        consistent::ConsistentStrategy, dictionary::DictionaryStrategy, fixed::FixedStrategy,
        format::FormatStrategy, hashed::{generate_salt, HashedStrategy},
        partial::KeepLastStrategy, MaskStrategy,
    },
};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

/// Mutable run state, guarded by one lock so concurrent first-sight
/// insertions cannot mint two tokens for the same original
struct EngineState {
    consistent: ConsistentStrategy,
    format: FormatStrategy,
    fixed: FixedStrategy,
    hashed: HashedStrategy,
    keep_last: KeepLastStrategy,
    dictionary: DictionaryStrategy,
    /// Policy fields observed in at least one processed record
    seen_policy_fields: BTreeSet<String>,
    records_processed: u64,
}

/// Main masking engine
///
/// Applies the configured per-field policy to records. The engine is
/// thread-safe: all mutable run state sits behind a single mutex, so it can
/// be shared across worker threads with `Arc` while keeping the per-field
/// token mapping injective.
///
/// The engine performs no I/O while processing, except appending to the
/// audit log when that is explicitly enabled.
pub struct MaskingEngine {
    config: MaskingConfig,
    salt: String,
    state: Mutex<EngineState>,
    audit_logger: Option<AuditLogger>,
}

// Hand-written so the salt and vault contents stay out of log output
impl fmt::Debug for MaskingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskingEngine")
            .field("policy_fields", &self.config.policy.len())
            .field("dry_run", &self.config.dry_run)
            .field("audit_enabled", &self.audit_logger.is_some())
            .finish_non_exhaustive()
    }
}

impl MaskingEngine {
    /// Create a new masking engine
    ///
    /// Validates the configuration and initializes the strategies and, when
    /// enabled, the audit logger. A salt is generated when none is
    /// configured; [`salt`](Self::salt) exposes the effective value so a
    /// caller can persist it for cross-run hashed-token stability.
    ///
    /// # Errors
    ///
    /// Returns [`SynstylError::Configuration`] if the policy or any mode
    /// parameter is invalid, before any processing begins.
    pub fn new(config: MaskingConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SynstylError::Configuration(format!("{e:#}")))?;

        let salt = config.salt.clone().unwrap_or_else(generate_salt);

        let audit_logger = if config.audit.enabled {
            Some(
                AuditLogger::new(
                    config.audit.log_path.clone(),
                    config.audit.json_format,
                    true,
                )
                .map_err(|e| SynstylError::Configuration(format!("{e:#}")))?,
            )
        } else {
            None
        };

        let state = EngineState {
            consistent: ConsistentStrategy::new(),
            format: FormatStrategy::new(),
            fixed: FixedStrategy::new(config.placeholder.clone()),
            hashed: HashedStrategy::new(salt.clone(), config.token_prefixes.clone()),
            keep_last: KeepLastStrategy::new(config.keep_last_digits),
            dictionary: DictionaryStrategy::new(salt.clone(), config.dictionaries.clone()),
            seen_policy_fields: BTreeSet::new(),
            records_processed: 0,
        };

        Ok(Self {
            config,
            salt,
            state: Mutex::new(state),
            audit_logger,
        })
    }

    /// Replace the per-field policy
    ///
    /// Validates the new policy the same way engine creation does. Existing
    /// token mappings are kept, so reconfiguring between batches preserves
    /// consistency for fields that stay under consistent masking.
    ///
    /// # Errors
    ///
    /// Returns [`SynstylError::Configuration`] and leaves the current
    /// policy in place if the new one is invalid.
    pub fn configure(&mut self, policy: crate::masking::policy::MaskingPolicy) -> Result<()> {
        policy.validate()?;
        self.config.policy = policy;
        let mut state = self.lock_state();
        state.seen_policy_fields.clear();
        Ok(())
    }

    /// Mask a single record
    ///
    /// For each field, applies the mode the policy declares; fields absent
    /// from the policy pass through unchanged. Null values pass through
    /// under every mode except format preservation, which has no shape to
    /// reproduce and substitutes the fixed placeholder instead. A value
    /// that cannot be format-preserved falls back the same way and
    /// processing continues.
    pub fn process(&self, record: &Record) -> Result<Record> {
        Ok(self.process_detailed(record)?.masked_record)
    }

    /// Mask a single record, returning the full outcome
    ///
    /// The outcome carries the replacements performed, timing, and per-mode
    /// statistics. In dry-run mode the returned record is the original,
    /// while the replacement list still shows what would change.
    pub fn process_detailed(&self, record: &Record) -> Result<MaskingOutcome> {
        let start = Instant::now();
        let mut state = self.lock_state();

        state.records_processed += 1;
        let record_seq = state.records_processed;

        let mut masked = Record::new();
        let mut maskings = Vec::new();

        for (name, value) in record.iter() {
            let mode = match self.config.policy.mode_for(name) {
                Some(mode) => {
                    state.seen_policy_fields.insert(name.clone());
                    mode
                }
                // Absence from the policy is non-fatal: default passthrough
                None => FieldPolicy::Passthrough,
            };

            if !mode.is_masking() {
                masked.insert(name.clone(), value.clone());
                continue;
            }

            // Null carries nothing to mask; only format preservation has a
            // shape contract to uphold, so it substitutes the placeholder
            if value.is_null() {
                if mode == FieldPolicy::MaskFormatPreserving {
                    tracing::warn!(
                        field = %name,
                        reason = "null value",
                        "Value cannot be format-preserved, falling back to fixed mask"
                    );
                    let token = state.fixed.mask(name, "")?;
                    maskings.push(FieldMasking {
                        field: name.clone(),
                        mode,
                        original: String::new(),
                        masked: token.clone(),
                        fallback: true,
                    });
                    masked.insert(name.clone(), FieldValue::String(token));
                } else {
                    masked.insert(name.clone(), value.clone());
                }
                continue;
            }

            let text = match value.as_text() {
                Some(text) => text,
                None => {
                    masked.insert(name.clone(), value.clone());
                    continue;
                }
            };

            let (token, fallback) = Self::apply_mode(&mut state, mode, name, &text)?;

            maskings.push(FieldMasking {
                field: name.clone(),
                mode,
                original: text,
                masked: token.clone(),
                fallback,
            });
            masked.insert(name.clone(), FieldValue::String(token));
        }

        drop(state);

        let masked_record = if self.config.dry_run {
            record.clone()
        } else {
            masked
        };

        let processing_time = start.elapsed().as_millis() as u64;
        let outcome = MaskingOutcome::new(record_seq, masked_record, maskings, processing_time);

        if let Some(ref logger) = self.audit_logger {
            logger
                .log_masking(&outcome)
                .map_err(|e| SynstylError::Audit(format!("{e:#}")))?;
        }

        Ok(outcome)
    }

    /// Apply one masking mode to one value
    fn apply_mode(
        state: &mut EngineState,
        mode: FieldPolicy,
        field: &str,
        text: &str,
    ) -> Result<(String, bool)> {
        let token = match mode {
            FieldPolicy::Passthrough => unreachable!("passthrough handled by caller"),
            FieldPolicy::MaskFixed => state.fixed.mask(field, text)?,
            FieldPolicy::MaskConsistent => state.consistent.mask(field, text)?,
            FieldPolicy::MaskHashed => state.hashed.mask(field, text)?,
            FieldPolicy::MaskKeepLast => state.keep_last.mask(field, text)?,
            FieldPolicy::MaskDictionary => state.dictionary.mask(field, text)?,
            FieldPolicy::MaskFormatPreserving => match state.format.mask(field, text) {
                Ok(token) => token,
                Err(SynstylError::FormatMismatch { field, reason }) => {
                    tracing::warn!(
                        field = %field,
                        reason = %reason,
                        "Value cannot be format-preserved, falling back to fixed mask"
                    );
                    let token = state.fixed.mask(&field, text)?;
                    return Ok((token, true));
                }
                Err(e) => return Err(e),
            },
        };
        Ok((token, false))
    }

    /// Mask a batch of records
    ///
    /// Fail-safe: a record that cannot be processed is logged and skipped,
    /// never passed through unmasked.
    pub fn process_batch(&self, records: &[Record]) -> Result<Vec<Record>> {
        let mut results = Vec::with_capacity(records.len());

        for record in records {
            match self.process(record) {
                Ok(masked) => results.push(masked),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to mask record");
                    continue;
                }
            }
        }

        Ok(results)
    }

    /// Mask a batch of records and generate a run report
    pub fn process_batch_with_report(
        &self,
        records: &[Record],
    ) -> Result<(Vec<Record>, MaskingReport)> {
        let mut results = Vec::with_capacity(records.len());
        let mut report = MaskingReport::new();

        for record in records {
            match self.process_detailed(record) {
                Ok(outcome) => {
                    report.add_outcome(&outcome);
                    for masking in outcome.maskings.iter().filter(|m| m.fallback) {
                        report.add_warning(format!(
                            "field '{}' fell back to fixed masking (unclassifiable shape)",
                            masking.field
                        ));
                    }
                    results.push(outcome.masked_record);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to mask record");
                    report.add_warning(format!("Failed to mask record: {e}"));
                    continue;
                }
            }
        }

        for field in self.unseen_policy_fields() {
            report.add_warning(format!(
                "policy field '{field}' was never seen in any processed record"
            ));
        }

        Ok((results, report))
    }

    /// Export the consistent-token mapping for one field
    ///
    /// Intended for audit or reversal by an authorized caller; the snapshot
    /// is original → token.
    ///
    /// # Errors
    ///
    /// Returns [`SynstylError::UnknownField`] if the field was never
    /// processed under consistent masking.
    pub fn export_mapping(&self, field: &str) -> Result<BTreeMap<String, String>> {
        let state = self.lock_state();
        state
            .consistent
            .vault()
            .export(field)
            .ok_or_else(|| SynstylError::UnknownField(field.to_string()))
    }

    /// Reverse a consistent token back to its original value
    ///
    /// Returns `Ok(None)` when the field has mappings but this token was
    /// never issued for it.
    ///
    /// # Errors
    ///
    /// Returns [`SynstylError::UnknownField`] if the field was never
    /// processed under consistent masking.
    pub fn original_for(&self, field: &str, token: &str) -> Result<Option<String>> {
        let state = self.lock_state();
        let vault = state.consistent.vault();
        if !vault.has_field(field) {
            return Err(SynstylError::UnknownField(field.to_string()));
        }
        Ok(vault.original_for(field, token).map(str::to_string))
    }

    /// Policy fields never observed in any processed record
    ///
    /// A non-empty result usually means a typo'd policy key; it is also
    /// surfaced as report warnings.
    pub fn unseen_policy_fields(&self) -> Vec<String> {
        let state = self.lock_state();
        self.config
            .policy
            .field_names()
            .filter(|f| !state.seen_policy_fields.contains(*f))
            .cloned()
            .collect()
    }

    /// Clear all token mappings and run counters for a fresh run
    pub fn reset(&self) {
        let mut state = self.lock_state();
        state.consistent.reset();
        state.seen_policy_fields.clear();
        state.records_processed = 0;
    }

    /// The effective salt for hashed tokens
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }

    /// Records processed since creation or the last reset
    pub fn records_processed(&self) -> u64 {
        self.lock_state().records_processed
    }

    fn lock_state(&self) -> MutexGuard<'_, EngineState> {
        // A panic while holding the lock cannot leave the vault in a
        // half-updated state, so a poisoned lock is safe to reclaim
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
