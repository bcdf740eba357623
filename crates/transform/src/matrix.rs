//! Column-major 4×4 transform matrix with a declared dimensionality.
//!
//! CSS distinguishes `matrix()` from `matrix3d()` even when the values of a
//! 3D matrix happen to be planar, so the matrix carries an explicit 2D flag
//! alongside its sixteen entries. The flag survives multiplication only when
//! both operands are 2D.

use std::fmt;
use std::ops::Mul;

use css_values::format_number;

/// A column-major 4×4 affine transform.
///
/// Each inner array is one *column* `[x, y, z, w]`, the same order in which
/// CSS `matrix3d()` lists its arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformMatrix {
    /// Four columns, each a 4-element array.
    pub cols: [[f64; 4]; 4],
    is_2d: bool,
}

impl TransformMatrix {
    /// The 4×4 identity matrix, declared 2D.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
        is_2d: true,
    };

    /// Creates a 2D matrix from the six CSS `matrix(a, b, c, d, e, f)` values.
    #[must_use]
    pub const fn from_2d(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            cols: [
                [a, b, 0.0, 0.0],
                [c, d, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [e, f, 0.0, 1.0],
            ],
            is_2d: true,
        }
    }

    /// Creates a 3D matrix from the sixteen CSS `matrix3d()` values, column by column.
    #[must_use]
    pub const fn from_3d(m: [f64; 16]) -> Self {
        Self {
            cols: [
                [m[0], m[1], m[2], m[3]],
                [m[4], m[5], m[6], m[7]],
                [m[8], m[9], m[10], m[11]],
                [m[12], m[13], m[14], m[15]],
            ],
            is_2d: false,
        }
    }

    /// Whether this matrix was declared two-dimensional.
    #[inline]
    pub const fn is_2d(&self) -> bool {
        self.is_2d
    }

    /// Returns column `i` (0-based), or `None` if `i >= 4`.
    #[inline]
    #[must_use]
    pub fn col(&self, i: usize) -> Option<[f64; 4]> {
        self.cols.get(i).copied()
    }

    /// The six `matrix()` values `[a, b, c, d, e, f]`.
    pub fn to_2d_values(&self) -> [f64; 6] {
        let c = &self.cols;
        [c[0][0], c[0][1], c[1][0], c[1][1], c[3][0], c[3][1]]
    }

    /// The sixteen `matrix3d()` values, column by column.
    pub fn to_3d_values(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (j, col) in self.cols.iter().enumerate() {
            out[j * 4..j * 4 + 4].copy_from_slice(col);
        }
        out
    }

    /// Returns `self × other`.
    ///
    /// Applied to a point, the product transforms by `other` first and then by
    /// `self`, which is how a CSS transform list `self other` behaves.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let a = &self.cols;
        let b = &other.cols;
        let mut out = [[0.0_f64; 4]; 4];
        for (j, out_col) in out.iter_mut().enumerate() {
            for (i, cell) in out_col.iter_mut().enumerate() {
                *cell =
                    a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
            }
        }
        Self {
            cols: out,
            is_2d: self.is_2d && other.is_2d,
        }
    }

    /// Maps a point through this matrix, including the homogeneous divide.
    pub fn transform_point(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let c = &self.cols;
        let mut out = [0.0_f64; 4];
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = c[0][i] * x + c[1][i] * y + c[2][i] * z + c[3][i];
        }
        let w = out[3];
        (out[0] / w, out[1] / w, out[2] / w)
    }

    /// Compares entries within `epsilon`. Dimensionality must match exactly.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.is_2d == other.is_2d
            && self
                .to_3d_values()
                .iter()
                .zip(other.to_3d_values().iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }
}

impl Default for TransformMatrix {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for TransformMatrix {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl fmt::Display for TransformMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, values): (&str, Vec<f64>) = if self.is_2d {
            ("matrix", self.to_2d_values().to_vec())
        } else {
            ("matrix3d", self.to_3d_values().to_vec())
        };
        let values: Vec<String> = values.into_iter().map(format_number).collect();
        write!(f, "{}({})", name, values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn default_is_identity() {
        assert_eq!(TransformMatrix::default(), TransformMatrix::IDENTITY);
    }

    #[test]
    fn identity_multiply() {
        let t = TransformMatrix::from_2d(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(TransformMatrix::IDENTITY * t, t);
        assert_eq!(t * TransformMatrix::IDENTITY, t);
    }

    #[test]
    fn two_d_layout() {
        let m = TransformMatrix::from_2d(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(m.col(0), Some([1.0, 2.0, 0.0, 0.0]));
        assert_eq!(m.col(1), Some([3.0, 4.0, 0.0, 0.0]));
        assert_eq!(m.col(3), Some([5.0, 6.0, 0.0, 1.0]));
        assert_eq!(m.to_2d_values(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn three_d_round_trips_values() {
        let values = [
            0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
        ];
        let m = TransformMatrix::from_3d(values);
        assert_eq!(m.col(2), Some([8.0, 9.0, 10.0, 11.0]));
        assert_eq!(m.col(4), None);
        assert_eq!(m.to_3d_values(), values);
        assert!(!m.is_2d());
    }

    #[test]
    fn dimensionality_of_products() {
        let flat = TransformMatrix::from_2d(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
        let deep = TransformMatrix::from_3d(TransformMatrix::IDENTITY.to_3d_values());
        assert!(flat.multiply(&flat).is_2d());
        assert!(!flat.multiply(&deep).is_2d());
        assert!(!deep.multiply(&flat).is_2d());
    }

    #[test]
    fn product_applies_right_operand_first() {
        let translate = TransformMatrix::from_2d(1.0, 0.0, 0.0, 1.0, 10.0, 0.0);
        let scale = TransformMatrix::from_2d(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
        let (x, y, _) = translate.multiply(&scale).transform_point(1.0, 1.0, 0.0);
        assert!((x - 12.0).abs() < EPS);
        assert!((y - 2.0).abs() < EPS);
        let (x, y, _) = scale.multiply(&translate).transform_point(1.0, 1.0, 0.0);
        assert!((x - 22.0).abs() < EPS);
        assert!((y - 2.0).abs() < EPS);
    }

    #[test]
    fn display_uses_css_function_names() {
        let m = TransformMatrix::from_2d(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(m.to_string(), "matrix(1, 2, 3, 4, 5, 6)");
        let m3 = TransformMatrix::from_3d(TransformMatrix::IDENTITY.to_3d_values());
        assert_eq!(
            m3.to_string(),
            "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)"
        );
    }

    #[test]
    fn nan_is_not_finite() {
        let mut m = TransformMatrix::IDENTITY;
        assert!(m.is_finite());
        m.cols[2][1] = f64::NAN;
        assert!(!m.is_finite());
    }
}
