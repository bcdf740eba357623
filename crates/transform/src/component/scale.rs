use css_values::{StyleValue, format_number};

use super::{TransformComponent, css_function};
use crate::matrix::TransformMatrix;

/// `scale(x, y)` or `scale3d(x, y, z)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    x: f64,
    y: f64,
    z: Option<f64>,
    css: String,
}

impl Scale {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            css: css_function("scale", &[format_number(x), format_number(y)]),
        }
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            css: css_function(
                "scale3d",
                &[format_number(x), format_number(y), format_number(z)],
            ),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// The z factor, for `scale3d` only.
    pub fn z(&self) -> Option<f64> {
        self.z
    }
}

impl StyleValue for Scale {
    fn css_string(&self) -> &str {
        &self.css
    }
}

impl TransformComponent for Scale {
    fn matrix(&self) -> TransformMatrix {
        match self.z {
            None => TransformMatrix::from_2d(self.x, 0.0, 0.0, self.y, 0.0, 0.0),
            Some(z) => TransformMatrix::from_3d([
                self.x, 0.0, 0.0, 0.0, //
                0.0, self.y, 0.0, 0.0, //
                0.0, 0.0, z, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ]),
        }
    }
}
