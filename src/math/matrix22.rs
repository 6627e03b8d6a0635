use super::{Radians, Vector2};
use bytemuck::{Pod, Zeroable};

/// Row-major 2x2 matrix. `m[row][column]` addresses a cell, `m[row]` a row.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix22 {
    pub rows: [Vector2; 2],
}

impl_matrix!(Matrix22, Vector2, 2, 4);

impl Matrix22 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self {
            rows: [Vector2::new(m00, m01), Vector2::new(m10, m11)],
        }
    }

    /// One-dimensional homogeneous translation: maps `(x, 1)` to `(x + offset, 1)`.
    pub const fn translation(offset: f32) -> Self {
        Self::new(1.0, offset, 0.0, 1.0)
    }

    pub const fn scale(scale: Vector2) -> Self {
        Self::new(scale.x, 0.0, 0.0, scale.y)
    }

    /// Counter-clockwise rotation: `rotation(PI / 2) * RIGHT == UP`.
    pub fn rotation(rotation: Radians) -> Self {
        let (sin, cos) = rotation.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    pub fn determinant(&self) -> f32 {
        let [a, b] = self.rows;
        a.x * b.y - a.y * b.x
    }

    /// The minor of a 2x2 matrix is the single cell diagonally opposite.
    pub fn cofactor_of_element(&self, column: usize, row: usize) -> f32 {
        Self::sign_of_element(column, row) * self.rows[1 - row][1 - column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::common::PI;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_is_diagonal() {
        assert_eq!(Matrix22::IDENTITY.values(), &[1.0, 0.0, 0.0, 1.0]);
        assert_eq!(Matrix22::IDENTITY * Vector2::new(3.0, 4.0), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let rotated = Matrix22::rotation(PI / 2.0) * Vector2::RIGHT;
        assert_eq!(rotated, Vector2::UP);
    }

    #[test]
    fn test_translation_in_homogeneous_form() {
        let moved = Matrix22::translation(3.0) * Vector2::new(2.0, 1.0);
        assert_eq!(moved, Vector2::new(5.0, 1.0));
    }

    #[test]
    fn test_determinant_and_inverse() {
        let m = Matrix22::new(4.0, 7.0, 2.0, 6.0);
        assert_eq!(m.determinant(), 10.0);
        assert_eq!(m.inverse(), Matrix22::new(0.6, -0.7, -0.2, 0.4));
        assert_eq!(m * m.inverse(), Matrix22::IDENTITY);
    }

    #[test]
    fn test_cofactor_signs() {
        let m = Matrix22::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.cofactor(), Matrix22::new(4.0, -3.0, -2.0, 1.0));
        assert_eq!(m.adjoint(), Matrix22::new(4.0, -2.0, -3.0, 1.0));
    }

    #[test]
    fn test_row_and_column_access() {
        let mut m = Matrix22::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.row(1), Vector2::new(3.0, 4.0));
        assert_eq!(m.column(1), Vector2::new(2.0, 4.0));
        m[0][1] = 9.0;
        assert_eq!(m.values()[1], 9.0);
    }

    #[test]
    fn test_scalar_arithmetic_is_elementwise() {
        let m = Matrix22::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m + 1.0, Matrix22::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(m - 1.0, Matrix22::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(m * 2.0, Matrix22::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(m / 2.0, Matrix22::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn test_singular_inverse_is_not_finite() {
        let m = Matrix22::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(m.determinant(), 0.0);
        assert!(m.inverse().values().iter().all(|v| !v.is_finite()));
    }
}
