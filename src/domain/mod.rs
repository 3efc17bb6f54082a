//! Domain models and types for SynStyl.
//!
//! The domain layer provides:
//! - **Record model** ([`Record`], [`FieldValue`])
//! - **Error types** ([`SynstylError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SynstylError>`]:
//!
//! ```rust
//! use synstyl::domain::{Result, SynstylError};
//!
//! fn example() -> Result<()> {
//!     Err(SynstylError::Configuration("invalid policy".to_string()))
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::SynstylError;
pub use record::{FieldValue, Record};
pub use result::Result;
