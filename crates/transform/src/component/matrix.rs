use css_values::{StyleValue, format_number};

use super::{TransformComponent, css_function};
use crate::matrix::TransformMatrix;

/// A raw `matrix()` or `matrix3d()` component.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    matrix: TransformMatrix,
    css: String,
}

impl Matrix {
    /// `matrix(a, b, c, d, e, f)`
    pub fn new_2d(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self::from_matrix(TransformMatrix::from_2d(a, b, c, d, e, f))
    }

    /// `matrix3d(...)` with sixteen column-major values.
    pub fn new_3d(values: [f64; 16]) -> Self {
        Self::from_matrix(TransformMatrix::from_3d(values))
    }

    /// Wraps an existing matrix, keeping its dimensionality.
    pub fn from_matrix(matrix: TransformMatrix) -> Self {
        let (name, values) = if matrix.is_2d() {
            ("matrix", matrix.to_2d_values().to_vec())
        } else {
            ("matrix3d", matrix.to_3d_values().to_vec())
        };
        let args: Vec<String> = values.into_iter().map(format_number).collect();
        Self {
            matrix,
            css: css_function(name, &args),
        }
    }
}

impl StyleValue for Matrix {
    fn css_string(&self) -> &str {
        &self.css
    }
}

impl TransformComponent for Matrix {
    fn matrix(&self) -> TransformMatrix {
        self.matrix
    }
}
