use super::{Matrix22, Quaternion, Radians, Vector2, Vector3};
use bytemuck::{Pod, Zeroable};

/// Row-major 3x3 matrix.
///
/// Used both as a 3-D linear map (rotations, basis changes) and as a 2-D
/// homogeneous transform, where `Matrix33 * Vector2` treats the vector as
/// `(x, y, 1)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix33 {
    pub rows: [Vector3; 3],
}

impl_matrix!(Matrix33, Vector3, 3, 9);

impl Matrix33 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m20: f32,
        m21: f32,
        m22: f32,
    ) -> Self {
        Self {
            rows: [
                Vector3::new(m00, m01, m02),
                Vector3::new(m10, m11, m12),
                Vector3::new(m20, m21, m22),
            ],
        }
    }

    /// 2-D homogeneous translation.
    pub const fn translation(translation: Vector2) -> Self {
        Self::new(1.0, 0.0, translation.x, 0.0, 1.0, translation.y, 0.0, 0.0, 1.0)
    }

    /// 2-D homogeneous scale.
    pub const fn scale(scale: Vector2) -> Self {
        Self::new(scale.x, 0.0, 0.0, 0.0, scale.y, 0.0, 0.0, 0.0, 1.0)
    }

    /// Counter-clockwise rotation about +Z, which is also the 2-D homogeneous rotation.
    pub fn rotation(rotation: Radians) -> Self {
        let (sin, cos) = rotation.sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation matrix equivalent to `rotation`, which should be unit length.
    pub fn from_quaternion(rotation: Quaternion) -> Self {
        let Quaternion { x, y, z, w } = rotation;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xw, yw, zw) = (x * w, y * w, z * w);
        Self::new(
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy - zw),
            2.0 * (xz + yw),
            2.0 * (xy + zw),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz - xw),
            2.0 * (xz - yw),
            2.0 * (yz + xw),
            1.0 - 2.0 * (xx + yy),
        )
    }

    /// Orientation whose columns are the given basis vectors, so the local
    /// axes `RIGHT`, `UP` and `OUT` map onto `right`, `up` and `forward`.
    pub const fn from_basis(right: Vector3, up: Vector3, forward: Vector3) -> Self {
        Self::new(
            right.x, up.x, forward.x, right.y, up.y, forward.y, right.z, up.z, forward.z,
        )
    }

    /// Look-at orientation facing `forward`. `right` is `up x forward` and `up`
    /// is re-derived so the basis is orthonormal; `forward` and `up` must not
    /// be parallel.
    pub fn look_rotation(forward: Vector3, up: Vector3) -> Self {
        let forward = forward.normalized();
        let right = up.cross(forward).normalized();
        let up = forward.cross(right);
        Self::from_basis(right, up, forward)
    }

    /// The 2x2 matrix left after removing `column` and `row`.
    pub fn minor(&self, column: usize, row: usize) -> Matrix22 {
        let mut minor = Matrix22::ZERO;
        let mut cells = minor.values_mut().iter_mut();
        for (r, source) in self.rows.iter().enumerate() {
            if r == row {
                continue;
            }
            for c in (0..3).filter(|&c| c != column) {
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
        (0..3)
            .map(|column| self.rows[0][column] * self.cofactor_of_element(column, 0))
            .sum()
    }

    /// Extracts the rotation with the trace method. The branch is chosen by
    /// the largest of the trace and the diagonal cells so the divisor never
    /// approaches zero, including for half-turn rotations.
    pub fn to_quaternion(&self) -> Quaternion {
        let [r0, r1, r2] = self.rows;
        let (m00, m01, m02) = (r0.x, r0.y, r0.z);
        let (m10, m11, m12) = (r1.x, r1.y, r1.z);
        let (m20, m21, m22) = (r2.x, r2.y, r2.z);
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quaternion::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Quaternion::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Quaternion::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Quaternion::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }
}

impl std::ops::Mul<Vector2> for Matrix33 {
    type Output = Vector2;

    /// Applies the 2-D homogeneous transform to the point `(x, y, 1)`.
    fn mul(self, rhs: Vector2) -> Vector2 {
        (self * rhs.extend(1.0)).truncate()
    }
}
