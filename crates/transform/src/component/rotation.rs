use css_values::{StyleValue, format_number};

use super::{TransformComponent, css_function};
use crate::matrix::TransformMatrix;

/// `rotate(<angle>)` or `rotate3d(x, y, z, <angle>)`, angles in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    angle: f64,
    axis: Option<[f64; 3]>,
    css: String,
}

impl Rotation {
    /// A planar rotation about the z axis.
    pub fn new(angle: f64) -> Self {
        let css = css_function("rotate", &[format!("{}deg", format_number(angle))]);
        Self {
            angle,
            axis: None,
            css,
        }
    }

    /// A rotation about the vector `(x, y, z)`. Always three-dimensional,
    /// even when the axis is the z axis.
    pub fn new_3d(angle: f64, x: f64, y: f64, z: f64) -> Self {
        let css = css_function(
            "rotate3d",
            &[
                format_number(x),
                format_number(y),
                format_number(z),
                format!("{}deg", format_number(angle)),
            ],
        );
        Self {
            angle,
            axis: Some([x, y, z]),
            css,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn axis(&self) -> Option<[f64; 3]> {
        self.axis
    }
}

impl StyleValue for Rotation {
    fn css_string(&self) -> &str {
        &self.css
    }
}

impl TransformComponent for Rotation {
    fn matrix(&self) -> TransformMatrix {
        let radians = self.angle.to_radians();
        let Some([x, y, z]) = self.axis else {
            let (s, c) = radians.sin_cos();
            return TransformMatrix::from_2d(c, s, -s, c, 0.0, 0.0);
        };

        let length = (x * x + y * y + z * z).sqrt();
        if length == 0.0 {
            // An axis that cannot be normalized leaves the rotation unapplied.
            return TransformMatrix::from_3d(TransformMatrix::IDENTITY.to_3d_values());
        }
        let (x, y, z) = (x / length, y / length, z / length);

        let half = radians / 2.0;
        let sin = half.sin();
        let sc = sin * half.cos();
        let sq = sin * sin;
        TransformMatrix::from_3d([
            1.0 - 2.0 * (y * y + z * z) * sq,
            2.0 * (x * y * sq + z * sc),
            2.0 * (x * z * sq - y * sc),
            0.0,
            2.0 * (x * y * sq - z * sc),
            1.0 - 2.0 * (x * x + z * z) * sq,
            2.0 * (y * z * sq + x * sc),
            0.0,
            2.0 * (x * z * sq + y * sc),
            2.0 * (y * z * sq - x * sc),
            1.0 - 2.0 * (x * x + y * y) * sq,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}
