//! Structural shape classification for format-preserving masking
//!
//! A shape is the per-character class pattern of a value: digits, uppercase
//! letters, and lowercase letters are maskable classes; every other
//! character (separators, punctuation, spaces) is structural and carried
//! over literally. A replacement generated from a shape passes the same
//! format validation as the input.

use rand::Rng;

/// Character class within a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII digit `0-9`
    Digit,
    /// ASCII uppercase letter
    Upper,
    /// ASCII lowercase letter
    Lower,
    /// Structural character copied verbatim
    Literal(char),
}

/// Classified shape of a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    classes: Vec<CharClass>,
}

impl Shape {
    /// Classify a value's shape
    ///
    /// Returns `None` when the value cannot be format-preserved: the empty
    /// string, or a value with no digit or letter to replace (masking it
    /// would reproduce the original verbatim).
    pub fn classify(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let classes: Vec<CharClass> = text
            .chars()
            .map(|c| match c {
                '0'..='9' => CharClass::Digit,
                'A'..='Z' => CharClass::Upper,
                'a'..='z' => CharClass::Lower,
                other => CharClass::Literal(other),
            })
            .collect();

        if !classes
            .iter()
            .any(|c| !matches!(c, CharClass::Literal(_)))
        {
            return None;
        }

        Some(Self { classes })
    }

    /// Number of character positions
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True if the shape has no positions
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// True if a value matches this shape position for position
    pub fn matches(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != self.classes.len() {
            return false;
        }
        self.classes.iter().zip(chars.iter()).all(|(class, c)| match class {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Literal(l) => c == l,
        })
    }

    /// Generate a random value with this shape
    pub fn generate<R: Rng>(&self, rng: &mut R) -> String {
        self.classes
            .iter()
            .map(|class| match class {
                CharClass::Digit => char::from(b'0' + rng.gen_range(0..10u8)),
                CharClass::Upper => char::from(b'A' + rng.gen_range(0..26u8)),
                CharClass::Lower => char::from(b'a' + rng.gen_range(0..26u8)),
                CharClass::Literal(c) => *c,
            })
            .collect()
    }
}
