//! Error types for building and parsing transform values.
//!
//! Building a value from components reports misuse through [`TypedOmError`].
//! Parsing text never surfaces these to the caller of
//! [`TransformValue::parse`](crate::TransformValue::parse); they are logged and
//! turned into `None`. [`str::parse`] exposes them for callers who want the reason.

use css_values::parser::arguments::ArgumentKind;
use thiserror::Error;

use crate::component::ComponentKind;

/// Errors that can occur when constructing or parsing a transform value.
///
/// # Examples
///
/// ```rust
/// use transform::{ArgumentError, TransformValue, TypedOmError};
///
/// let result = TransformValue::new(Vec::new());
/// assert_eq!(
///     result.unwrap_err(),
///     TypedOmError::InvalidArgument(ArgumentError::EmptySequence)
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypedOmError {
    /// A constructor was called with arguments it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// Text was not a valid transform list.
    #[error("invalid transform syntax: {0}")]
    Syntax(#[from] SyntaxError),
}

/// The kinds of constructor misuse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("a transform value needs at least one component")]
    EmptySequence,

    #[error("argument at index {index} is a {found}, not a transform component")]
    WrongElementType { index: usize, found: &'static str },

    #[error("{component} does not take {found} arguments")]
    ArgumentCount { component: ComponentKind, found: usize },

    #[error("{component} arguments must all be {expected:?} values")]
    ArgumentKind {
        component: ComponentKind,
        expected: ArgumentKind,
    },

    /// Relative units need layout context to resolve.
    #[error("{component} cannot use relative length {length}")]
    RelativeLength {
        component: ComponentKind,
        length: String,
    },

    #[error("{component} cannot use negative length {length}")]
    NegativeLength {
        component: ComponentKind,
        length: String,
    },
}

/// Reasons a transform list string was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("empty transform list")]
    Empty,

    #[error("unexpected text before the first transform function: {0:?}")]
    LeadingText(String),

    #[error("transform functions and argument lists are not paired ({0} segments)")]
    UnpairedSegments(usize),

    #[error("unrecognized transform function: {0:?}")]
    UnknownFunction(String),

    /// `rotate` and `rotate3d` need their angle suffixed with `deg`.
    #[error("{function}{arguments} is missing the angle unit")]
    MissingAngleUnit { function: String, arguments: String },

    #[error("{function} cannot take the arguments {arguments:?}")]
    BadArguments { function: String, arguments: String },

    #[error("{function}: {source}")]
    Component {
        function: String,
        source: ArgumentError,
    },
}
