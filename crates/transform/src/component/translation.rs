use css_values::{LengthValue, StyleValue};

use super::{ComponentKind, TransformComponent, absolute_px, css_function};
use crate::error::ArgumentError;
use crate::matrix::TransformMatrix;

/// `translate(x, y)` or `translate3d(x, y, z)`.
///
/// Only absolute lengths are accepted; the offsets are stored in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    x: LengthValue,
    y: LengthValue,
    z: Option<LengthValue>,
    offset_px: [f64; 3],
    css: String,
}

impl Translation {
    pub fn new(x: LengthValue, y: LengthValue) -> Result<Self, ArgumentError> {
        let offset_px = [px(&x)?, px(&y)?, 0.0];
        let css = css_function("translate", &[x.css_string(), y.css_string()]);
        Ok(Self {
            x,
            y,
            z: None,
            offset_px,
            css,
        })
    }

    pub fn new_3d(x: LengthValue, y: LengthValue, z: LengthValue) -> Result<Self, ArgumentError> {
        let offset_px = [px(&x)?, px(&y)?, px(&z)?];
        let css = css_function(
            "translate3d",
            &[x.css_string(), y.css_string(), z.css_string()],
        );
        Ok(Self {
            x,
            y,
            z: Some(z),
            offset_px,
            css,
        })
    }

    pub fn x(&self) -> &LengthValue {
        &self.x
    }

    pub fn y(&self) -> &LengthValue {
        &self.y
    }

    /// The z offset, for `translate3d` only.
    pub fn z(&self) -> Option<&LengthValue> {
        self.z.as_ref()
    }
}

fn px(length: &LengthValue) -> Result<f64, ArgumentError> {
    absolute_px(ComponentKind::Translation, length)
}

impl StyleValue for Translation {
    fn css_string(&self) -> &str {
        &self.css
    }
}

impl TransformComponent for Translation {
    fn matrix(&self) -> TransformMatrix {
        let [x, y, z] = self.offset_px;
        if self.z.is_none() {
            return TransformMatrix::from_2d(1.0, 0.0, 0.0, 1.0, x, y);
        }
        TransformMatrix::from_3d([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            x, y, z, 1.0,
        ])
    }
}
