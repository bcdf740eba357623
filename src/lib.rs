//! Typed CSS transform values.
//!
//! Re-exports the value layer ([`css_values`]) and the transform layer
//! ([`transform`]) under one crate. Neither installs a logger; applications
//! pick their own backend for the [`log`] facade.

pub mod error;

pub use css_values::{self, LengthUnit, LengthValue, NumberValue, StyleValue};
pub use error::Result;
pub use log;
pub use transform::{
    self, AnyStyleValue, Component, Matrix, Perspective, Rotation, Scale, Skew,
    TransformComponent, TransformMatrix, TransformValue, Translation,
};

/// Parses a transform list, returning the reason on failure.
///
/// ```rust
/// let value = typed_om::parse_transform("translate(3px, 4px) rotate(90deg)").unwrap();
/// assert_eq!(value.components().len(), 2);
/// assert!(typed_om::parse_transform("rotate(90)").is_err());
/// ```
pub fn parse_transform(input: &str) -> Result<TransformValue> {
    input.parse()
}
