//! 4x4 affine and projective transforms.
//!
//! Storage is row-major and points are column vectors on the right, so a
//! point is transformed by `matrix * vector` and translation lives in the
//! last column (`m03`, `m13`, `m23`). Composite factories multiply in TRS
//! order, `translation * rotation * scale`: scale is applied first in object
//! space and translation last.

use super::{Matrix33, Quaternion, Radians, Vector3, Vector4};
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix44 {
    pub rows: [Vector4; 4],
}

impl_matrix!(Matrix44, Vector4, 4, 16);

impl Matrix44 {
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    );
    pub const ZERO: Self = Self::new(
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0,
    );

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self {
            rows: [
                Vector4::new(m00, m01, m02, m03),
                Vector4::new(m10, m11, m12, m13),
                Vector4::new(m20, m21, m22, m23),
                Vector4::new(m30, m31, m32, m33),
            ],
        }
    }

    /// Embeds a linear 3x3 map; the last row and column come from the identity.
    pub const fn from_matrix33(linear: Matrix33) -> Self {
        let [r0, r1, r2] = linear.rows;
        Self::from_rows([r0.extend(0.0), r1.extend(0.0), r2.extend(0.0), Vector4::new(0.0, 0.0, 0.0, 1.0)])
    }

    /// The linear (rotation/scale/shear) part.
    pub const fn upper_left(&self) -> Matrix33 {
        let [r0, r1, r2, _] = self.rows;
        Matrix33::from_rows([r0.truncate(), r1.truncate(), r2.truncate()])
    }

    pub const fn translation(translation: Vector3) -> Self {
        Self::new(
            1.0, 0.0, 0.0, translation.x, //
            0.0, 1.0, 0.0, translation.y, //
            0.0, 0.0, 1.0, translation.z, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub const fn scale(scale: Vector3) -> Self {
        Self::new(
            scale.x, 0.0, 0.0, 0.0, //
            0.0, scale.y, 0.0, 0.0, //
            0.0, 0.0, scale.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub const fn uniform_scale(scale: f32) -> Self {
        Self::scale(Vector3::splat(scale))
    }

    pub fn rotation(rotation: Quaternion) -> Self {
        Self::from_matrix33(Matrix33::from_quaternion(rotation))
    }

    pub fn rotation_x(angle: Radians) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, cos, -sin, 0.0, //
            0.0, sin, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn rotation_y(angle: Radians) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            cos, 0.0, sin, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -sin, 0.0, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn rotation_z(angle: Radians) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            cos, -sin, 0.0, 0.0, //
            sin, cos, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn translation_scale(translation: Vector3, scale: Vector3) -> Self {
        Self::translation(translation) * Self::scale(scale)
    }

    pub fn translation_uniform_scale(translation: Vector3, scale: f32) -> Self {
        Self::translation(translation) * Self::uniform_scale(scale)
    }

    pub fn translation_rotation(translation: Vector3, rotation: Quaternion) -> Self {
        Self::translation(translation) * Self::rotation(rotation)
    }

    pub fn translation_rotation_scale(translation: Vector3, rotation: Quaternion, scale: Vector3) -> Self {
        Self::translation(translation) * Self::rotation(rotation) * Self::scale(scale)
    }

    pub fn translation_rotation_uniform_scale(translation: Vector3, rotation: Quaternion, scale: f32) -> Self {
        Self::translation(translation) * Self::rotation(rotation) * Self::uniform_scale(scale)
    }

    /// Diagonal matrix of the reciprocal scale factors.
    ///
    /// This is the inverse of `Matrix44::scale(scale)` and nothing else: it is
    /// only a valid normal-matrix ingredient when the transform it undoes is a
    /// pure axis-aligned scale. Use [`Matrix44::normal_matrix`] for anything
    /// with rotation folded into the same matrix or with shear. A zero
    /// component produces an infinite cell.
    pub fn inverse_scale(scale: Vector3) -> Self {
        Self::scale(1.0 / scale)
    }

    /// Inverse-transpose of the linear part, for transforming surface normals
    /// under arbitrary (invertible) transforms. Translation is dropped.
    pub fn normal_matrix(&self) -> Self {
        Self::from_matrix33(self.upper_left().inverse().transpose())
    }

    /// The 3x3 matrix left after removing `column` and `row`.
    pub fn minor(&self, column: usize, row: usize) -> Matrix33 {
        let mut minor = Matrix33::ZERO;
        let mut cells = minor.values_mut().iter_mut();
        for (r, source) in self.rows.iter().enumerate() {
            if r == row {
                continue;
            }
            for c in (0..4).filter(|&c| c != column) {
                if let Some(cell) = cells.next() {
                    *cell = source[c];
                }
            }
        }
        minor
    }

    #[inline]
    pub fn cofactor_of_element(&self, column: usize, row: usize) -> f32 {
        Self::sign_of_element(column, row) * self.minor(column, row).determinant()
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        (0..4)
            .map(|column| self.rows[0][column] * self.cofactor_of_element(column, 0))
            .sum()
    }
}

impl std::ops::Mul<Vector3> for Matrix44 {
    type Output = Vector3;

    /// Transforms the point `(x, y, z, 1)` and drops `w` without dividing;
    /// use `Matrix44 * Vector4` when the projective divide is needed.
    fn mul(self, rhs: Vector3) -> Vector3 {
        (self * rhs.extend(1.0)).truncate()
    }
}
