//! Audit logging for masking operations
//!
//! Records what was masked without ever writing plaintext originals:
//! values appear in audit entries only as SHA-256 hashes.

pub mod logger;

pub use logger::AuditLogger;
