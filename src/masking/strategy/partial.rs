//! Partial masking strategy (keep last digits)
//!
//! Strips a value to its digits and asterisks all but the last N of them,
//! the usual presentation for phone and account numbers.

use super::MaskStrategy;
use crate::domain::Result;

/// Keep-last-digits masking
pub struct KeepLastStrategy {
    keep: usize,
}

impl KeepLastStrategy {
    /// Create a keep-last strategy retaining `keep` trailing digits
    pub fn new(keep: usize) -> Self {
        Self { keep }
    }
}

impl MaskStrategy for KeepLastStrategy {
    fn mask(&mut self, _field: &str, value: &str) -> Result<String> {
        let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() <= self.keep {
            return Ok(digits);
        }
        let kept = &digits[digits.len() - self.keep..];
        Ok(format!("{}{}", "*".repeat(digits.len() - self.keep), kept))
    }
}

impl Default for KeepLastStrategy {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("9876543210", 4, "******3210")]
    #[test_case("987-654-3210", 4, "******3210"; "separators are stripped")]
    #[test_case("3210", 4, "3210"; "short values pass through as digits")]
    #[test_case("12", 4, "12")]
    #[test_case("9876543210", 2, "********10")]
    fn test_keep_last(value: &str, keep: usize, expected: &str) {
        let mut strategy = KeepLastStrategy::new(keep);
        assert_eq!(strategy.mask("phone", value).unwrap(), expected);
    }

    #[test]
    fn test_no_digits_yields_empty_mask() {
        let mut strategy = KeepLastStrategy::new(4);
        assert_eq!(strategy.mask("phone", "n/a").unwrap(), "");
    }
}
