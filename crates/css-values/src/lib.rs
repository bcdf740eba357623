//! # CSS Values - typed numbers and lengths
//!
//! The value layer underneath typed CSS transforms. This crate provides:
//!
//! - **Values**: [`NumberValue`] for plain numbers and [`LengthValue`] for
//!   unit-suffixed lengths
//! - **Text contract**: [`StyleValue`], the canonical CSS text every typed value carries
//! - **Parsing**: nom tokenizers for numbers, units and parenthesized argument lists
//!
//! ## Quick Start
//!
//! ```rust
//! use css_values::parser::arguments::{parse_arguments, Argument, ArgumentKind};
//! use css_values::{LengthUnit, LengthValue};
//!
//! let args = parse_arguments(2, ArgumentKind::Length, "( 1px , 2em )").unwrap();
//! assert_eq!(args[0], Argument::Length(LengthValue::new(1.0, LengthUnit::Px)));
//! assert_eq!(args[1], Argument::Length(LengthValue::new(2.0, LengthUnit::Em)));
//!
//! // A bare number is not a length
//! assert!(parse_arguments(1, ArgumentKind::Length, "(100)").is_none());
//! ```
//!
//! ## Units
//! - Absolute: `px`, `in`, `cm`, `mm`, `q`, `pt`, `pc`
//! - Relative: `em`, `rem`, `ex`, `ch`, `vw`, `vh`, `vmin`, `vmax`, `%`
//!
//! Relative units are parsed and kept as-is; they are never resolved.
//!
//! ## Modules
//!
//! - [`parser`]: number, unit and argument-list parsing
//! - [`error`]: Error types for value parsing failures

pub mod error;
pub mod length;
pub mod number;
pub mod parser;
pub mod style_value;

pub use error::CssValueError;
pub use length::{LengthUnit, LengthValue};
pub use number::NumberValue;
pub use style_value::StyleValue;

/// Formats a float the way canonical CSS text expects (`2`, `-1`, `0.5`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Drop the sign of negative zero.
        return "0".to_string();
    }
    format!("{}", value)
}
