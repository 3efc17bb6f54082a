// SynStyl - Deterministic field-masking engine
// Copyright (c) 2026 SynStyl Contributors
// Licensed under the MIT License

//! # SynStyl - field masking for synthetic, privacy-preserving datasets
//!
//! SynStyl is a library for masking sensitive fields in tabular data. Given
//! a record (field name → scalar value) and a policy declaring which fields
//! are sensitive and how, it produces a masked record plus an optional
//! reversible mapping store.
//!
//! ## Overview
//!
//! The library provides:
//! - **Masking modes**: passthrough, fixed placeholder, consistent
//!   per-field tokens, format-preserving replacement, salted-hash tokens,
//!   keep-last-digits
//! - **Referential consistency**: identical originals map to identical
//!   tokens within a run, distinct originals never collide
//! - **Format preservation**: masked output matches the structural shape of
//!   the input, so downstream format validation keeps passing
//! - **Audit**: optional structured log of masking operations carrying only
//!   hashed originals
//!
//! ## Architecture
//!
//! - [`domain`] - Core domain types ([`domain::Record`],
//!   [`domain::FieldValue`], [`domain::SynstylError`])
//! - [`masking`] - Policy, strategies, vault, engine, report, audit
//!
//! ## Quick Start
//!
//! ```
//! use synstyl::domain::Record;
//! use synstyl::masking::{policy::FieldPolicy, MaskingConfig, MaskingEngine};
//!
//! fn main() -> synstyl::domain::Result<()> {
//!     let mut config = MaskingConfig::default();
//!     config.policy.set("ssn", FieldPolicy::MaskConsistent);
//!     config.policy.set("name", FieldPolicy::Passthrough);
//!     config.policy.set("phone", FieldPolicy::MaskFormatPreserving);
//!
//!     let engine = MaskingEngine::new(config)?;
//!
//!     let mut record = Record::new();
//!     record.insert("ssn", "123-45-6789");
//!     record.insert("name", "Alice");
//!     record.insert("phone", "555-0100");
//!
//!     let masked = engine.process(&record)?;
//!     assert_eq!(masked.get("name"), record.get("name"));
//!
//!     // The same SSN gets the same token for the rest of the run
//!     let mapping = engine.export_mapping("ssn")?;
//!     assert!(mapping.contains_key("123-45-6789"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`]. Configuration problems
//! are fatal before any processing begins; everything during processing is
//! recoverable at per-field granularity:
//!
//! ```
//! use synstyl::masking::{MaskingConfig, MaskingEngine};
//!
//! let config = MaskingConfig {
//!     keep_last_digits: 0,
//!     ..Default::default()
//! };
//! assert!(MaskingEngine::new(config).is_err());
//! ```
//!
//! ## Logging
//!
//! SynStyl emits structured events with the `tracing` crate; install a
//! subscriber in the consuming application to see them.

pub mod domain;
pub mod masking;
