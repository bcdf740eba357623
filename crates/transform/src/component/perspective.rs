use css_values::{LengthValue, StyleValue};

use super::{ComponentKind, TransformComponent, absolute_px, css_function};
use crate::error::ArgumentError;
use crate::matrix::TransformMatrix;

/// `perspective(<length>)`. Always three-dimensional.
#[derive(Debug, Clone, PartialEq)]
pub struct Perspective {
    length: LengthValue,
    distance_px: f64,
    css: String,
}

impl Perspective {
    /// Fails for negative or relative lengths. Distances under one pixel are
    /// treated as one pixel when building the matrix.
    pub fn new(length: LengthValue) -> Result<Self, ArgumentError> {
        let distance_px = absolute_px(ComponentKind::Perspective, &length)?;
        if distance_px < 0.0 {
            return Err(ArgumentError::NegativeLength {
                component: ComponentKind::Perspective,
                length: length.css_string().to_string(),
            });
        }
        let css = css_function("perspective", &[length.css_string()]);
        Ok(Self {
            length,
            distance_px,
            css,
        })
    }

    pub fn length(&self) -> &LengthValue {
        &self.length
    }
}

impl StyleValue for Perspective {
    fn css_string(&self) -> &str {
        &self.css
    }
}

impl TransformComponent for Perspective {
    fn matrix(&self) -> TransformMatrix {
        let d = self.distance_px.max(1.0);
        let mut m = TransformMatrix::IDENTITY.to_3d_values();
        m[11] = -1.0 / d;
        TransformMatrix::from_3d(m)
    }

    fn is_planar(&self) -> bool {
        false
    }
}
