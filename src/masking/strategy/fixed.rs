//! Fixed placeholder masking strategy

use super::MaskStrategy;
use crate::domain::Result;

/// Fixed masking - replaces every value with one constant placeholder
///
/// Deterministic and stateless; also the local fallback when
/// format-preserving masking cannot classify a value.
pub struct FixedStrategy {
    placeholder: String,
}

impl FixedStrategy {
    /// Create a fixed strategy with the given placeholder
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

impl MaskStrategy for FixedStrategy {
    fn mask(&mut self, _field: &str, _value: &str) -> Result<String> {
        Ok(self.placeholder.clone())
    }
}

impl Default for FixedStrategy {
    fn default() -> Self {
        Self::new("********")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_masking() {
        let mut strategy = FixedStrategy::new("####");
        assert_eq!(strategy.mask("ssn", "123-45-6789").unwrap(), "####");
        assert_eq!(strategy.mask("name", "Alice").unwrap(), "####");
    }

    #[test]
    fn test_default_placeholder() {
        let mut strategy = FixedStrategy::default();
        assert_eq!(strategy.mask("x", "y").unwrap(), "********");
    }
}
