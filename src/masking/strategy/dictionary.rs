//! Dictionary substitution strategy
//!
//! Replaces a value with a word drawn from a per-field word list. The word
//! is selected by the salted SHA-256 of `salt|value` taken modulo the list
//! length, so identical originals map to the same word across runs that
//! share a salt. The list is smaller than the value space, so distinct
//! originals can share a word; use consistent masking when the replacement
//! must be unique per original.

use super::MaskStrategy;
use crate::domain::Result;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Fallback word list for fields without a configured dictionary
const DEFAULT_WORDS: &[&str] = &[
    "Aarav", "Vivaan", "Kabir", "Rohan", "Arjun", "Aditya", "Vihaan", "Ishaan",
    "Ananya", "Ishita", "Kavya", "Riya", "Sanya", "Meera", "Diya", "Myra",
    "Joe", "Alex", "Zara", "Noah", "Oliver", "Emma", "Olivia", "Sophia",
];

/// Hash-indexed word substitution
pub struct DictionaryStrategy {
    salt: String,
    dictionaries: BTreeMap<String, Vec<String>>,
    default_words: Vec<String>,
}

impl DictionaryStrategy {
    /// Create a dictionary strategy with per-field word lists
    ///
    /// Fields without an entry in `dictionaries` draw from a built-in name
    /// list.
    pub fn new(salt: impl Into<String>, dictionaries: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            salt: salt.into(),
            dictionaries,
            default_words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    fn words_for(&self, field: &str) -> &[String] {
        self.dictionaries
            .get(field)
            .filter(|words| !words.is_empty())
            .map(Vec::as_slice)
            .unwrap_or(&self.default_words)
    }

    /// Full 256-bit digest of `salt|value` reduced modulo the list length
    fn index_for(&self, value: &str, len: usize) -> usize {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(b"|");
        hasher.update(value.as_bytes());

        let len = len as u128;
        let mut acc: u128 = 0;
        for byte in hasher.finalize() {
            acc = (acc << 8 | u128::from(byte)) % len;
        }
        acc as usize
    }
}

impl MaskStrategy for DictionaryStrategy {
    fn mask(&mut self, field: &str, value: &str) -> Result<String> {
        let words = self.words_for(field);
        let index = self.index_for(value, words.len());
        Ok(words[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_dictionaries() -> BTreeMap<String, Vec<String>> {
        let cities = ["Mumbai", "Delhi", "Pune", "Chennai", "Jaipur"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        BTreeMap::from([("city".to_string(), cities)])
    }

    #[test]
    fn test_substitution_is_deterministic_for_fixed_salt() {
        let mut a = DictionaryStrategy::new("pepper", city_dictionaries());
        let mut b = DictionaryStrategy::new("pepper", city_dictionaries());

        assert_eq!(
            a.mask("city", "Springfield").unwrap(),
            b.mask("city", "Springfield").unwrap()
        );
    }

    #[test]
    fn test_substitution_diverges_across_salts() {
        let mut a = DictionaryStrategy::new("pepper", city_dictionaries());
        let mut b = DictionaryStrategy::new("cumin", city_dictionaries());

        // Five words, so a handful of inputs must land differently somewhere
        let inputs = ["Springfield", "Shelbyville", "Gotham", "Metropolis", "Smallville"];
        assert!(inputs
            .iter()
            .any(|v| a.mask("city", v).unwrap() != b.mask("city", v).unwrap()));
    }

    #[test]
    fn test_word_comes_from_configured_list() {
        let mut strategy = DictionaryStrategy::new("pepper", city_dictionaries());
        let word = strategy.mask("city", "anything at all").unwrap();
        assert!(city_dictionaries()["city"].contains(&word));
    }

    #[test]
    fn test_unconfigured_field_uses_default_list() {
        let mut strategy = DictionaryStrategy::new("pepper", BTreeMap::new());
        let word = strategy.mask("name", "Walter White").unwrap();
        assert!(DEFAULT_WORDS.contains(&word.as_str()));
    }

    #[test]
    fn test_index_covers_whole_list() {
        let mut strategy = DictionaryStrategy::new("pepper", city_dictionaries());
        let mut seen = std::collections::BTreeSet::new();
        for i in 0..200 {
            seen.insert(strategy.mask("city", &format!("value-{i}")).unwrap());
        }
        assert_eq!(seen.len(), city_dictionaries()["city"].len());
    }
}
