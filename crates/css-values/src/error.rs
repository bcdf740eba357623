//! Error types for CSS value parsing.

use thiserror::Error;

/// Errors that can occur when parsing a number or length from text.
///
/// # Examples
///
/// ```rust
/// use css_values::{CssValueError, LengthValue};
///
/// let result: Result<LengthValue, _> = "100".parse();
/// assert!(matches!(result, Err(CssValueError::InvalidLength(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CssValueError {
    /// The text is not a valid CSS number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// The text is not a number followed by a recognized unit.
    #[error("invalid length: {0:?}")]
    InvalidLength(String),

    /// The unit suffix is not one this crate knows.
    #[error("unknown length unit: {0:?}")]
    UnknownUnit(String),
}
