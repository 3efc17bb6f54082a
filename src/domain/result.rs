//! Result type alias for SynStyl
//!
//! Provides a convenient Result type alias that uses SynstylError as the
//! error type.

use super::errors::SynstylError;

/// Result type alias for SynStyl operations
///
/// # Examples
///
/// ```
/// use synstyl::domain::result::Result;
/// use synstyl::domain::errors::SynstylError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SynstylError::Configuration("bad policy".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SynstylError>;
