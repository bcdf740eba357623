//! The typed value of a CSS `transform` property.

use std::fmt;
use std::str::FromStr;

use css_values::{LengthValue, NumberValue, StyleValue};

use crate::component::{
    Component, Matrix, Perspective, Rotation, Scale, Skew, TransformComponent, Translation,
};
use crate::compositor::{all_planar, compose_matrix, join_css};
use crate::error::{ArgumentError, TypedOmError};
use crate::matrix::TransformMatrix;
use crate::parser::parse_transform_list;

/// An ordered, non-empty list of transform components.
///
/// The composite matrix, its dimensionality and the canonical text are
/// computed once at construction. The value is never mutated afterwards.
///
/// # Examples
///
/// ```rust
/// use transform::TransformValue;
///
/// let value = TransformValue::parse("matrix(1,2,3,4,5,6) scale(2,-1)").unwrap();
/// assert_eq!(value.components().len(), 2);
/// assert!(value.is_planar());
/// assert_eq!(value.canonical_text(), "matrix(1, 2, 3, 4, 5, 6) scale(2, -1)");
///
/// assert!(TransformValue::parse("rotate3d(1,2,3,0)").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransformValue {
    components: Vec<Component>,
    matrix: TransformMatrix,
    planar: bool,
    css: String,
}

impl TransformValue {
    /// Builds a value from components. Fails on an empty list.
    pub fn new(components: Vec<Component>) -> Result<Self, TypedOmError> {
        let matrix = compose_matrix(&components).ok_or(ArgumentError::EmptySequence)?;
        let planar = all_planar(&components);
        let css = join_css(&components);
        log::trace!(
            "TransformValue: {} components, planar={}",
            components.len(),
            planar
        );
        Ok(Self {
            components,
            matrix,
            planar,
            css,
        })
    }

    /// Builds a value from arbitrary typed values, each of which must be a
    /// transform component.
    ///
    /// The error names the first offending index.
    pub fn from_style_values(values: Vec<AnyStyleValue>) -> Result<Self, TypedOmError> {
        if values.is_empty() {
            return Err(ArgumentError::EmptySequence.into());
        }
        let components = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                AnyStyleValue::Component(component) => Ok(component),
                other => Err(ArgumentError::WrongElementType {
                    index,
                    found: other.type_name(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(components)
    }

    /// Parses a CSS transform list.
    ///
    /// Returns `None` for anything that is not a valid transform list; the
    /// reason is logged at debug level.
    pub fn parse(input: &str) -> Option<Self> {
        match input.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("rejected transform list {:?}: {}", input, err);
                None
            }
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always false: construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// The product of every component's matrix, in list order.
    pub fn as_matrix(&self) -> &TransformMatrix {
        &self.matrix
    }

    /// True iff every component is planar.
    pub fn is_planar(&self) -> bool {
        self.planar
    }

    /// Each component's text, space-separated.
    pub fn canonical_text(&self) -> &str {
        &self.css
    }
}

impl StyleValue for TransformValue {
    fn css_string(&self) -> &str {
        &self.css
    }
}

impl TransformComponent for TransformValue {
    fn matrix(&self) -> TransformMatrix {
        self.matrix
    }

    fn is_planar(&self) -> bool {
        self.planar
    }
}

impl FromStr for TransformValue {
    type Err = TypedOmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_transform_list(s)?)
    }
}

impl fmt::Display for TransformValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

impl<'a> IntoIterator for &'a TransformValue {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl TryFrom<Vec<Component>> for TransformValue {
    type Error = TypedOmError;

    fn try_from(components: Vec<Component>) -> Result<Self, Self::Error> {
        Self::new(components)
    }
}

/// Any typed value, for callers that hold heterogeneous values.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyStyleValue {
    Number(NumberValue),
    Length(LengthValue),
    Component(Component),
    Transform(TransformValue),
}

impl AnyStyleValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            AnyStyleValue::Number(_) => "NumberValue",
            AnyStyleValue::Length(_) => "LengthValue",
            AnyStyleValue::Component(_) => "TransformComponent",
            AnyStyleValue::Transform(_) => "TransformValue",
        }
    }
}

impl StyleValue for AnyStyleValue {
    fn css_string(&self) -> &str {
        match self {
            AnyStyleValue::Number(v) => v.css_string(),
            AnyStyleValue::Length(v) => v.css_string(),
            AnyStyleValue::Component(v) => v.css_string(),
            AnyStyleValue::Transform(v) => v.css_string(),
        }
    }
}

impl From<NumberValue> for AnyStyleValue {
    fn from(value: NumberValue) -> Self {
        AnyStyleValue::Number(value)
    }
}

impl From<LengthValue> for AnyStyleValue {
    fn from(value: LengthValue) -> Self {
        AnyStyleValue::Length(value)
    }
}

macro_rules! impl_from_component {
    ($($variant:ty),*) => {
        $(
            impl From<$variant> for AnyStyleValue {
                fn from(value: $variant) -> Self {
                    AnyStyleValue::Component(value.into())
                }
            }
        )*
    };
}

impl_from_component!(Component, Matrix, Perspective, Rotation, Scale, Skew, Translation);

impl From<TransformValue> for AnyStyleValue {
    fn from(value: TransformValue) -> Self {
        AnyStyleValue::Transform(value)
    }
}
