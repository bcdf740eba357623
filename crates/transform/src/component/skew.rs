use css_values::{StyleValue, format_number};

use super::{TransformComponent, css_function};
use crate::matrix::TransformMatrix;

/// `skew(ax, ay)` with both angles in degrees.
///
/// The text form keeps the unitless numbers the `skew` grammar accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Skew {
    ax: f64,
    ay: f64,
    css: String,
}

impl Skew {
    pub fn new(ax: f64, ay: f64) -> Self {
        Self {
            ax,
            ay,
            css: css_function("skew", &[format_number(ax), format_number(ay)]),
        }
    }

    pub fn ax(&self) -> f64 {
        self.ax
    }

    pub fn ay(&self) -> f64 {
        self.ay
    }
}

impl StyleValue for Skew {
    fn css_string(&self) -> &str {
        &self.css
    }
}

impl TransformComponent for Skew {
    fn matrix(&self) -> TransformMatrix {
        TransformMatrix::from_2d(
            1.0,
            self.ay.to_radians().tan(),
            self.ax.to_radians().tan(),
            1.0,
            0.0,
            0.0,
        )
    }
}
