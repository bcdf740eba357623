//! # Transform - typed CSS transform values
//!
//! Represents a CSS `transform` property as an ordered list of typed
//! components and computes their combined matrix. This crate provides:
//!
//! - **Components**: [`Matrix`], [`Perspective`], [`Rotation`], [`Scale`],
//!   [`Skew`] and [`Translation`], all implementing [`TransformComponent`]
//! - **Composition**: [`TransformValue`] caches the product of its components'
//!   matrices, whether the whole list is planar, and its canonical text
//! - **Parsing**: [`TransformValue::parse`] turns a transform list string into
//!   a value, or `None` if the text is not a valid transform list
//!
//! ## Quick Start
//!
//! ```rust
//! use transform::{Rotation, Scale, TransformComponent, TransformValue};
//!
//! let value = TransformValue::parse("scale(2, -1) rotate3d(0, 0, 1, 90deg)").unwrap();
//! assert!(!value.is_planar());
//!
//! let expected = Scale::new(2.0, -1.0)
//!     .matrix()
//!     .multiply(&Rotation::new_3d(90.0, 0.0, 0.0, 1.0).matrix());
//! assert_eq!(value.as_matrix(), &expected);
//! ```
//!
//! ## Supported Functions
//!
//! | Function | Arguments |
//! |---|---|
//! | `matrix` / `matrix3d` | 6 / 16 numbers |
//! | `perspective` | 1 length |
//! | `rotate` / `rotate3d` | angle in `deg` / 3 numbers and an angle in `deg` |
//! | `scale` / `scale3d` | 2 / 3 numbers |
//! | `skew` | 2 numbers (degrees) |
//! | `translate` / `translate3d` | 2 / 3 lengths |
//!
//! ## Modules
//!
//! - [`component`]: the component capability and its variants
//! - [`compositor`]: list-to-matrix folding
//! - [`grammar`]: the table of recognized functions
//! - [`parser`]: transform-list parsing
//! - [`matrix`]: the 4×4 matrix type
//! - [`error`]: Error types for construction and parsing

pub mod component;
pub mod compositor;
pub mod error;
pub mod grammar;
pub mod matrix;
pub mod parser;
pub mod value;

pub use component::{
    Component, ComponentKind, Matrix, Perspective, RawValue, Rotation, Scale, Skew,
    TransformComponent, Translation,
};
pub use error::{ArgumentError, SyntaxError, TypedOmError};
pub use matrix::TransformMatrix;
pub use value::{AnyStyleValue, TransformValue};
