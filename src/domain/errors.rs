//! Domain error types
//!
//! Defines the error hierarchy for SynStyl. All errors are domain-specific
//! and don't expose third-party types.

use thiserror::Error;

/// Main SynStyl error type
///
/// This is the primary error type used throughout the library.
/// Configuration errors are fatal before any processing begins; everything
/// else is recoverable at per-field or per-record granularity.
#[derive(Debug, Error)]
pub enum SynstylError {
    /// Configuration-related errors (bad policy, bad mode parameters)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A mapping was requested for a field never processed under
    /// consistent masking
    #[error("No token mapping for field '{0}'")]
    UnknownField(String),

    /// A value's shape could not be classified for format-preserving masking
    #[error("Format mismatch for field '{field}': {reason}")]
    FormatMismatch { field: String, reason: String },

    /// Audit logging errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl SynstylError {
    /// True if the error is fatal at configuration time rather than
    /// recoverable during processing
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for SynstylError {
    fn from(err: std::io::Error) -> Self {
        SynstylError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SynstylError {
    fn from(err: serde_json::Error) -> Self {
        SynstylError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SynstylError {
    fn from(err: toml::de::Error) -> Self {
        SynstylError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SynstylError::Configuration("bad mode".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad mode");

        let err = SynstylError::UnknownField("ssn".to_string());
        assert_eq!(err.to_string(), "No token mapping for field 'ssn'");
    }

    #[test]
    fn test_format_mismatch_display() {
        let err = SynstylError::FormatMismatch {
            field: "phone".to_string(),
            reason: "empty value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Format mismatch for field 'phone': empty value"
        );
    }

    #[test]
    fn test_fatality() {
        assert!(SynstylError::Configuration("x".into()).is_fatal());
        assert!(!SynstylError::UnknownField("x".into()).is_fatal());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SynstylError = io_err.into();
        assert!(matches!(err, SynstylError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: SynstylError = json_err.into();
        assert!(matches!(err, SynstylError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("a = b = c").unwrap_err();
        let err: SynstylError = toml_err.into();
        assert!(matches!(err, SynstylError::Configuration(_)));
    }

    #[test]
    fn test_implements_std_error() {
        let err = SynstylError::Other("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
