//! Format-preserving masking strategy
//!
//! Replaces a value with a random one of the same structural shape, so the
//! output passes the same format validation as the input while carrying no
//! information from the original beyond that shape.

use super::MaskStrategy;
use crate::domain::{Result, SynstylError};
use crate::masking::shape::Shape;
use rand::SeedableRng;

const MAX_DRAWS: usize = 8;

/// Format-preserving masking
pub struct FormatStrategy {
    rng: rand::rngs::StdRng,
}

impl FormatStrategy {
    /// Create a format-preserving strategy
    pub fn new() -> Self {
        Self {
            rng: rand::rngs::StdRng::from_entropy(),
        }
    }
}

impl MaskStrategy for FormatStrategy {
    fn mask(&mut self, field: &str, value: &str) -> Result<String> {
        let shape = Shape::classify(value).ok_or_else(|| SynstylError::FormatMismatch {
            field: field.to_string(),
            reason: if value.is_empty() {
                "empty value".to_string()
            } else {
                "no digit or letter to replace".to_string()
            },
        })?;

        let mut candidate = shape.generate(&mut self.rng);
        let mut draws = 1;
        while candidate == value && draws < MAX_DRAWS {
            candidate = shape.generate(&mut self.rng);
            draws += 1;
        }

        // Tiny shape spaces (a single digit, say) can keep drawing the
        // original; rotate the first maskable character to force inequality
        if candidate == value {
            candidate = rotate_first_maskable(&candidate);
        }

        Ok(candidate)
    }
}

impl Default for FormatStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace the first digit or letter with the next one in its class,
/// wrapping at the class boundary
fn rotate_first_maskable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rotated = false;
    for c in text.chars() {
        if rotated {
            out.push(c);
            continue;
        }
        let next = match c {
            '0'..='8' | 'a'..='y' | 'A'..='Y' => Some((c as u8 + 1) as char),
            '9' => Some('0'),
            'z' => Some('a'),
            'Z' => Some('A'),
            _ => None,
        };
        match next {
            Some(n) => {
                out.push(n);
                rotated = true;
            }
            None => out.push(c),
        }
    }
    out
}
