//! Field masking policy
//!
//! A policy declares, per field name, which masking mode applies. Fields
//! present in a record but absent from the policy pass through unchanged,
//! so an explicit policy entry is optional.

use crate::domain::{Result, SynstylError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Masking mode applied to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Copy the value unchanged
    Passthrough,
    /// Replace with a constant placeholder, no state
    MaskFixed,
    /// Replace with a per-field token, identical originals reuse the same
    /// token within a run
    MaskConsistent,
    /// Replace with a random value matching the original's character-class
    /// shape
    MaskFormatPreserving,
    /// Replace with a salted SHA-256 prefix token, stable across runs that
    /// share a salt
    MaskHashed,
    /// Keep the last N digits, asterisk the rest
    MaskKeepLast,
    /// Replace with a word from a configured list, selected by salted hash
    /// so the substitution is stable across runs that share a salt
    MaskDictionary,
}

impl FieldPolicy {
    /// True if the mode replaces the original value
    pub fn is_masking(&self) -> bool {
        !matches!(self, Self::Passthrough)
    }

    /// Human-readable mode name as it appears in config files
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::MaskFixed => "mask_fixed",
            Self::MaskConsistent => "mask_consistent",
            Self::MaskFormatPreserving => "mask_format_preserving",
            Self::MaskHashed => "mask_hashed",
            Self::MaskKeepLast => "mask_keep_last",
            Self::MaskDictionary => "mask_dictionary",
        }
    }
}

impl FromStr for FieldPolicy {
    type Err = SynstylError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "passthrough" => Ok(Self::Passthrough),
            "mask_fixed" => Ok(Self::MaskFixed),
            "mask_consistent" => Ok(Self::MaskConsistent),
            "mask_format_preserving" => Ok(Self::MaskFormatPreserving),
            "mask_hashed" => Ok(Self::MaskHashed),
            "mask_keep_last" => Ok(Self::MaskKeepLast),
            "mask_dictionary" => Ok(Self::MaskDictionary),
            other => Err(SynstylError::Configuration(format!(
                "Unrecognized masking mode: '{other}'"
            ))),
        }
    }
}

/// Per-field policy map
///
/// # Examples
///
/// ```
/// use synstyl::masking::policy::{FieldPolicy, MaskingPolicy};
///
/// let mut policy = MaskingPolicy::new();
/// policy.set("ssn", FieldPolicy::MaskConsistent);
/// policy.set("name", FieldPolicy::Passthrough);
///
/// assert!(policy.validate().is_ok());
/// assert_eq!(policy.mode_for("ssn"), Some(FieldPolicy::MaskConsistent));
/// assert_eq!(policy.mode_for("unlisted"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaskingPolicy {
    fields: BTreeMap<String, FieldPolicy>,
}

impl MaskingPolicy {
    /// Create an empty policy (everything passes through)
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Declare the masking mode for a field
    pub fn set(&mut self, field: impl Into<String>, mode: FieldPolicy) {
        self.fields.insert(field.into(), mode);
    }

    /// Look up the declared mode for a field, `None` if unlisted
    pub fn mode_for(&self, field: &str) -> Option<FieldPolicy> {
        self.fields.get(field).copied()
    }

    /// Iterate over (field, mode) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldPolicy)> {
        self.fields.iter()
    }

    /// Field names the policy declares
    pub fn field_names(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if no fields are declared
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate that every policy key is a well-formed field name
    ///
    /// A well-formed name is non-empty, not all whitespace, and free of
    /// control characters.
    pub fn validate(&self) -> Result<()> {
        // Printable, no control characters
        let printable = Regex::new(r"^\P{Cc}+$")
            .map_err(|e| SynstylError::Configuration(format!("field name pattern: {e}")))?;

        for name in self.fields.keys() {
            if name.trim().is_empty() || !printable.is_match(name) {
                return Err(SynstylError::Configuration(format!(
                    "Malformed field name in policy: {name:?}"
                )));
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, FieldPolicy)> for MaskingPolicy {
    fn from_iter<I: IntoIterator<Item = (String, FieldPolicy)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
