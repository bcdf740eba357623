//! Transform components: the primitive functions of a transform list.
//!
//! Every component implements [`TransformComponent`], which requires its own
//! 4×4 matrix and derives planarity from that matrix unless the variant knows
//! better. [`Component`] is the closed set of variants the parser produces;
//! [`Component::from_values`] builds one from a [`ComponentKind`] descriptor
//! and an ordered list of raw values.
//!
//! ## Variants
//!
//! - [`Matrix`]: `matrix()` / `matrix3d()`
//! - [`Perspective`]: `perspective()`
//! - [`Rotation`]: `rotate()` / `rotate3d()`
//! - [`Scale`]: `scale()` / `scale3d()`
//! - [`Skew`]: `skew()`
//! - [`Translation`]: `translate()` / `translate3d()`

pub mod matrix;
pub mod perspective;
pub mod rotation;
pub mod scale;
pub mod skew;
pub mod translation;

pub use matrix::Matrix;
pub use perspective::Perspective;
pub use rotation::Rotation;
pub use scale::Scale;
pub use skew::Skew;
pub use translation::Translation;

use std::fmt;

use css_values::parser::arguments::ArgumentKind;
use css_values::{LengthValue, StyleValue};

use crate::error::{ArgumentError, TypedOmError};
use crate::matrix::TransformMatrix;

/// The capability shared by every transform primitive.
pub trait TransformComponent: StyleValue {
    /// This component's own transform matrix.
    fn matrix(&self) -> TransformMatrix;

    /// Whether this component stays in the plane: no out-of-plane rotation,
    /// z translation or perspective.
    fn is_planar(&self) -> bool {
        self.matrix().is_2d()
    }
}

/// Descriptor naming a component variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Matrix,
    Perspective,
    Rotation,
    Scale,
    Skew,
    Translation,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Matrix => "matrix",
            ComponentKind::Perspective => "perspective",
            ComponentKind::Rotation => "rotation",
            ComponentKind::Scale => "scale",
            ComponentKind::Skew => "skew",
            ComponentKind::Translation => "translation",
        };
        f.write_str(name)
    }
}

/// A raw constructor argument: a bare number or a length.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Length(LengthValue),
}

/// One transform function instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Matrix(Matrix),
    Perspective(Perspective),
    Rotation(Rotation),
    Scale(Scale),
    Skew(Skew),
    Translation(Translation),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Matrix(_) => ComponentKind::Matrix,
            Component::Perspective(_) => ComponentKind::Perspective,
            Component::Rotation(_) => ComponentKind::Rotation,
            Component::Scale(_) => ComponentKind::Scale,
            Component::Skew(_) => ComponentKind::Skew,
            Component::Translation(_) => ComponentKind::Translation,
        }
    }

    /// Builds a component of `kind` from an ordered value list.
    ///
    /// The number of values selects the 2D or 3D form. Rotation values are
    /// angle-first: `[angle]` or `[angle, x, y, z]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transform::component::{Component, ComponentKind, RawValue, Scale};
    ///
    /// let scale = Component::from_values(
    ///     ComponentKind::Scale,
    ///     vec![RawValue::Number(2.0), RawValue::Number(-1.0)],
    /// )
    /// .unwrap();
    /// assert_eq!(scale, Component::Scale(Scale::new(2.0, -1.0)));
    /// ```
    pub fn from_values(kind: ComponentKind, values: Vec<RawValue>) -> Result<Self, TypedOmError> {
        let component: Component = match kind {
            ComponentKind::Matrix => {
                let n = numbers(kind, &values)?;
                if let [a, b, c, d, e, f] = *n.as_slice() {
                    Matrix::new_2d(a, b, c, d, e, f).into()
                } else if let Ok(m) = <[f64; 16]>::try_from(n.as_slice()) {
                    Matrix::new_3d(m).into()
                } else {
                    return Err(count_error(kind, &values));
                }
            }
            ComponentKind::Perspective => match lengths(kind, &values)?.as_slice() {
                [d] => Perspective::new((*d).clone())?.into(),
                _ => return Err(count_error(kind, &values)),
            },
            ComponentKind::Rotation => match *numbers(kind, &values)?.as_slice() {
                [angle] => Rotation::new(angle).into(),
                [angle, x, y, z] => Rotation::new_3d(angle, x, y, z).into(),
                _ => return Err(count_error(kind, &values)),
            },
            ComponentKind::Scale => match *numbers(kind, &values)?.as_slice() {
                [x, y] => Scale::new(x, y).into(),
                [x, y, z] => Scale::new_3d(x, y, z).into(),
                _ => return Err(count_error(kind, &values)),
            },
            ComponentKind::Skew => match *numbers(kind, &values)?.as_slice() {
                [ax, ay] => Skew::new(ax, ay).into(),
                _ => return Err(count_error(kind, &values)),
            },
            ComponentKind::Translation => match lengths(kind, &values)?.as_slice() {
                [x, y] => Translation::new((*x).clone(), (*y).clone())?.into(),
                [x, y, z] => {
                    Translation::new_3d((*x).clone(), (*y).clone(), (*z).clone())?.into()
                }
                _ => return Err(count_error(kind, &values)),
            },
        };
        Ok(component)
    }
}

fn count_error(kind: ComponentKind, values: &[RawValue]) -> TypedOmError {
    ArgumentError::ArgumentCount {
        component: kind,
        found: values.len(),
    }
    .into()
}

fn numbers(kind: ComponentKind, values: &[RawValue]) -> Result<Vec<f64>, TypedOmError> {
    values
        .iter()
        .map(|value| match value {
            RawValue::Number(n) => Ok(*n),
            RawValue::Length(_) => Err(ArgumentError::ArgumentKind {
                component: kind,
                expected: ArgumentKind::Number,
            }
            .into()),
        })
        .collect()
}

fn lengths(kind: ComponentKind, values: &[RawValue]) -> Result<Vec<&LengthValue>, TypedOmError> {
    values
        .iter()
        .map(|value| match value {
            RawValue::Length(length) => Ok(length),
            RawValue::Number(_) => Err(ArgumentError::ArgumentKind {
                component: kind,
                expected: ArgumentKind::Length,
            }
            .into()),
        })
        .collect()
}

/// Renders `name(arg, arg, ...)`.
pub(crate) fn css_function<S: AsRef<str>>(name: &str, args: &[S]) -> String {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    format!("{}({})", name, args.join(", "))
}

/// Resolves a length to pixels for `component`, rejecting relative units.
pub(crate) fn absolute_px(
    component: ComponentKind,
    length: &LengthValue,
) -> Result<f64, ArgumentError> {
    length.to_px().ok_or_else(|| ArgumentError::RelativeLength {
        component,
        length: length.css_string().to_string(),
    })
}

impl StyleValue for Component {
    fn css_string(&self) -> &str {
        match self {
            Component::Matrix(c) => c.css_string(),
            Component::Perspective(c) => c.css_string(),
            Component::Rotation(c) => c.css_string(),
            Component::Scale(c) => c.css_string(),
            Component::Skew(c) => c.css_string(),
            Component::Translation(c) => c.css_string(),
        }
    }
}

impl TransformComponent for Component {
    fn matrix(&self) -> TransformMatrix {
        match self {
            Component::Matrix(c) => c.matrix(),
            Component::Perspective(c) => c.matrix(),
            Component::Rotation(c) => c.matrix(),
            Component::Scale(c) => c.matrix(),
            Component::Skew(c) => c.matrix(),
            Component::Translation(c) => c.matrix(),
        }
    }

    fn is_planar(&self) -> bool {
        match self {
            Component::Matrix(c) => c.is_planar(),
            Component::Perspective(c) => c.is_planar(),
            Component::Rotation(c) => c.is_planar(),
            Component::Scale(c) => c.is_planar(),
            Component::Skew(c) => c.is_planar(),
            Component::Translation(c) => c.is_planar(),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_string())
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Component {
                fn from(value: $variant) -> Self {
                    Component::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(Matrix, Perspective, Rotation, Scale, Skew, Translation);

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[f64]) -> Vec<RawValue> {
        values.iter().copied().map(RawValue::Number).collect()
    }

    #[test]
    fn factory_selects_form_by_count() {
        let flat = Component::from_values(ComponentKind::Scale, nums(&[2.0, 3.0])).unwrap();
        let deep = Component::from_values(ComponentKind::Scale, nums(&[2.0, 3.0, 4.0])).unwrap();
        assert!(flat.is_planar());
        assert!(!deep.is_planar());
    }

    #[test]
    fn factory_rotation_is_angle_first() {
        let rotation =
            Component::from_values(ComponentKind::Rotation, nums(&[30.0, 1.0, 2.0, 3.0])).unwrap();
        assert_eq!(rotation, Component::from(Rotation::new_3d(30.0, 1.0, 2.0, 3.0)));
        assert_eq!(rotation.css_string(), "rotate3d(1, 2, 3, 30deg)");
    }

    #[test]
    fn factory_matrix_accepts_six_or_sixteen() {
        assert!(Component::from_values(ComponentKind::Matrix, nums(&[0.0; 6])).is_ok());
        assert!(Component::from_values(ComponentKind::Matrix, nums(&[0.0; 16])).is_ok());
        assert_eq!(
            Component::from_values(ComponentKind::Matrix, nums(&[0.0; 7])),
            Err(TypedOmError::InvalidArgument(ArgumentError::ArgumentCount {
                component: ComponentKind::Matrix,
                found: 7,
            }))
        );
    }

    #[test]
    fn factory_rejects_wrong_value_kind() {
        let result = Component::from_values(
            ComponentKind::Translation,
            vec![RawValue::Number(1.0), RawValue::Number(1.0)],
        );
        assert_eq!(
            result,
            Err(TypedOmError::InvalidArgument(ArgumentError::ArgumentKind {
                component: ComponentKind::Translation,
                expected: ArgumentKind::Length,
            }))
        );
    }

    #[test]
    fn factory_translation_from_lengths() {
        let px = RawValue::Length(LengthValue::px(1.0));
        let component =
            Component::from_values(ComponentKind::Translation, vec![px.clone(), px]).unwrap();
        assert_eq!(component.kind(), ComponentKind::Translation);
        assert_eq!(component.to_string(), "translate(1px, 1px)");
    }
}
