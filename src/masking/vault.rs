//! Per-field token vault
//!
//! Backing store for consistent masking: a bidirectional original → token
//! mapping scoped per field name. The vault is created empty, grows
//! monotonically while the engine runs, never shrinks, and is discarded with
//! the engine unless exported first.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Mapping state for one field
#[derive(Debug, Default)]
struct FieldVault {
    /// original value → token
    forward: BTreeMap<String, String>,
    /// token → original value
    reverse: HashMap<String, String>,
    /// Tokens handed out for this field, for collision checks
    issued: HashSet<String>,
    /// Monotonic counter feeding token generation
    counter: u64,
}

/// Bidirectional original → token store, scoped per field name
#[derive(Debug, Default)]
pub struct TokenVault {
    fields: HashMap<String, FieldVault>,
}

impl TokenVault {
    /// Create an empty vault
    pub fn new() -> Self {
        Self::default()
    }

    /// Token previously issued for an original value, if any
    pub fn token_for(&self, field: &str, original: &str) -> Option<&str> {
        self.fields
            .get(field)?
            .forward
            .get(original)
            .map(String::as_str)
    }

    /// Original value behind a token, if the token was issued for this field
    pub fn original_for(&self, field: &str, token: &str) -> Option<&str> {
        self.fields
            .get(field)?
            .reverse
            .get(token)
            .map(String::as_str)
    }

    /// True if a token was already issued for this field
    pub fn is_issued(&self, field: &str, token: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|f| f.issued.contains(token))
    }

    /// Record a freshly issued token for an original value
    pub fn insert(&mut self, field: &str, original: &str, token: &str) {
        let entry = self.fields.entry(field.to_string()).or_default();
        entry
            .forward
            .insert(original.to_string(), token.to_string());
        entry
            .reverse
            .insert(token.to_string(), original.to_string());
        entry.issued.insert(token.to_string());
    }

    /// Advance and return the per-field counter (first call yields 1)
    pub fn next_counter(&mut self, field: &str) -> u64 {
        let entry = self.fields.entry(field.to_string()).or_default();
        entry.counter += 1;
        entry.counter
    }

    /// True if the field has at least one mapping
    pub fn has_field(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|f| !f.forward.is_empty())
    }

    /// Snapshot of the original → token mapping for one field
    pub fn export(&self, field: &str) -> Option<BTreeMap<String, String>> {
        self.fields
            .get(field)
            .filter(|f| !f.forward.is_empty())
            .map(|f| f.forward.clone())
    }

    /// Drop every mapping and counter
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
