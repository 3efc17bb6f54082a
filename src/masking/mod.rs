//! Field masking for SynStyl
//!
//! This module provides the deterministic field-masking engine that turns
//! raw records into privacy-preserving ones while keeping them statistically
//! usable (format, cardinality, referential consistency across rows).
//!
//! # Architecture
//!
//! The masking pipeline consists of:
//! - **Policy**: per-field masking modes (passthrough, fixed, consistent,
//!   format-preserving, hashed, keep-last)
//! - **Strategies**: one replaceable strategy per mode
//! - **Vault**: per-field bidirectional original → token store backing
//!   consistent masking
//! - **Audit**: structured logging with hashed values
//!
//! # Usage
//!
//! ```
//! use synstyl::masking::{MaskingConfig, MaskingEngine};
//! use synstyl::masking::policy::FieldPolicy;
//! use synstyl::domain::Record;
//!
//! # fn example() -> synstyl::domain::Result<()> {
//! let mut config = MaskingConfig::default();
//! config.policy.set("email", FieldPolicy::MaskHashed);
//!
//! let engine = MaskingEngine::new(config)?;
//! let mut record = Record::new();
//! record.insert("email", "alice@example.com");
//! let masked = engine.process(&record)?;
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod models;
pub mod policy;
pub mod report;
pub mod shape;
pub mod strategy;
pub mod vault;

// Re-export main types
pub use config::{AuditConfig, MaskingConfig};
pub use engine::MaskingEngine;
pub use models::{FieldMasking, MaskingOutcome};
pub use policy::{FieldPolicy, MaskingPolicy};
pub use report::MaskingReport;
