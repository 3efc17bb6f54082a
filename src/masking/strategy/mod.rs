//! Masking strategy module
//!
//! Provides one replaceable strategy per masking mode. Which strategy applies
//! to which field is decided by the policy, not hard-coded.

pub mod consistent;
pub mod dictionary;
pub mod fixed;
pub mod format;
pub mod hashed;
pub mod partial;

use crate::domain::Result;

/// Trait for masking strategy implementations
pub trait MaskStrategy: Send + Sync {
    /// Produce the masked replacement for one field value
    fn mask(&mut self, field: &str, value: &str) -> Result<String>;
}

/// Token label derived from a field name: uppercased, with runs of
/// non-alphanumeric characters collapsed to underscores
pub(crate) fn field_label(field: &str) -> String {
    let mut label = String::with_capacity(field.len());
    let mut last_was_sep = false;
    for c in field.chars() {
        if c.is_ascii_alphanumeric() {
            label.push(c.to_ascii_uppercase());
            last_was_sep = false;
        } else if !last_was_sep && !label.is_empty() {
            label.push('_');
            last_was_sep = true;
        }
    }
    while label.ends_with('_') {
        label.pop();
    }
    if label.is_empty() {
        label.push_str("FIELD");
    }
    label
}
