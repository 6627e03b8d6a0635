//! Quaternion rotations.
//!
//! Components are stored `(x, y, z, w)` with the scalar part last. Products
//! follow the Hamilton convention, so `a * b` applies `b` first and `a` second,
//! exactly like the matching rotation matrices: `Matrix44::rotation(a * b) ==
//! Matrix44::rotation(a) * Matrix44::rotation(b)`.

use super::{Radians, Vector3, Vector4};
use bytemuck::{Pod, Zeroable};

/// Below this angle between endpoints `slerp` switches to `nlerp`, since
/// `sin(theta)` in the denominator approaches zero.
const SLERP_DOT_THRESHOLD: f32 = 0.9995;

/// A rotation quaternion. Construction never normalizes; callers may hold
/// non-unit values transiently and call [`Quaternion::normalized`] when needed.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`, which must already be unit length.
    pub fn axis_angle(axis: Vector3, angle: Radians) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Rotates about X, then Y, then Z (`qz * qy * qx`).
    pub fn euler(x: Radians, y: Radians, z: Radians) -> Self {
        let (qx, qy, qz) = Self::axis_rotations(x, y, z);
        qz * qy * qx
    }

    /// Rotates about Y, then X, then Z (`qz * qx * qy`). Not interchangeable
    /// with [`Quaternion::euler`] for the same angles.
    pub fn euler_yxz(x: Radians, y: Radians, z: Radians) -> Self {
        let (qx, qy, qz) = Self::axis_rotations(x, y, z);
        qz * qx * qy
    }

    fn axis_rotations(x: Radians, y: Radians, z: Radians) -> (Self, Self, Self) {
        (
            Self::axis_angle(Vector3::RIGHT, x),
            Self::axis_angle(Vector3::UP, y),
            Self::axis_angle(Vector3::OUT, z),
        )
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        Vector4::from(self).dot(Vector4::from(rhs))
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit-length copy; the zero quaternion yields NaN components.
    #[inline]
    pub fn normalized(self) -> Self {
        Vector4::from(self).normalized().into()
    }

    /// Inverse rotation for unit quaternions.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Rotates `vector` by this quaternion, `q * v * q^-1` for unit `q`.
    pub fn rotate(self, vector: Vector3) -> Vector3 {
        let axis = Vector3::new(self.x, self.y, self.z);
        let t = axis.cross(vector) * 2.0;
        vector + t * self.w + axis.cross(t)
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// When the endpoints are within [`SLERP_DOT_THRESHOLD`] of parallel this
    /// falls back to [`Quaternion::nlerp`]; `portion` is not clamped.
    pub fn slerp(self, target: Self, portion: f32) -> Self {
        let mut target = target;
        let mut cos_theta = self.dot(target);
        if cos_theta < 0.0 {
            target = -target;
            cos_theta = -cos_theta;
        }

        if cos_theta > SLERP_DOT_THRESHOLD {
            return self.nlerp(target, portion);
        }

        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let source_weight = ((1.0 - portion) * theta).sin() / sin_theta;
        let target_weight = (portion * theta).sin() / sin_theta;
        self * source_weight + target * target_weight
    }

    /// Componentwise lerp followed by renormalization. Cheaper than
    /// [`Quaternion::slerp`] but not constant angular velocity.
    pub fn nlerp(self, target: Self, portion: f32) -> Self {
        (self + (target - self) * portion).normalized()
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl std::ops::Mul<Vector3> for Quaternion {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.rotate(rhs)
    }
}

impl std::ops::Mul<f32> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        (Vector4::from(self) * rhs).into()
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        (Vector4::from(self) + Vector4::from(rhs)).into()
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        (Vector4::from(self) - Vector4::from(rhs)).into()
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, rhs: &Self) -> bool {
        Vector4::from(*self) == Vector4::from(*rhs)
    }
}

/// Reinterprets the four components; no normalization.
impl From<Vector4> for Quaternion {
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }
}

impl From<Quaternion> for Vector4 {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        Vector4::new(quaternion.x, quaternion.y, quaternion.z, quaternion.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::common::{equals, PI};
    use pretty_assertions::assert_eq;

    fn same_rotation(a: Quaternion, b: Quaternion) -> bool {
        a == b || a == -b
    }

    #[test]
    fn test_identity_is_neutral() {
        let q = Quaternion::axis_angle(Vector3::new(0.0, 0.6, 0.8), 1.2);
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
    }

    #[test]
    fn test_axis_angle_rotates_vector() {
        let q = Quaternion::axis_angle(Vector3::OUT, PI / 2.0);
        assert_eq!(q * Vector3::RIGHT, Vector3::UP);
        let q = Quaternion::axis_angle(Vector3::UP, PI / 2.0);
        assert_eq!(q * Vector3::OUT, Vector3::RIGHT);
    }

    #[test]
    fn test_product_applies_right_operand_first() {
        let about_z = Quaternion::axis_angle(Vector3::OUT, PI / 2.0);
        let about_x = Quaternion::axis_angle(Vector3::RIGHT, PI / 2.0);
        // RIGHT -> UP under z, then UP -> OUT under x.
        assert_eq!((about_x * about_z) * Vector3::RIGHT, Vector3::OUT);
        assert_eq!(about_x * (about_z * Vector3::RIGHT), Vector3::OUT);
        // The other order leaves RIGHT on the x axis, then turns it to UP.
        assert_eq!((about_z * about_x) * Vector3::RIGHT, Vector3::UP);
    }

    #[test]
    fn test_euler_orders_differ() {
        let (x, y, z) = (0.3, 0.7, -0.4);
        let xyz = Quaternion::euler(x, y, z);
        let yxz = Quaternion::euler_yxz(x, y, z);
        assert!(!same_rotation(xyz, yxz));

        let v = Vector3::new(0.2, -0.5, 0.9);
        let step_by_step = Quaternion::axis_angle(Vector3::OUT, z)
            * (Quaternion::axis_angle(Vector3::RIGHT, x) * (Quaternion::axis_angle(Vector3::UP, y) * v));
        assert_eq!(yxz * v, step_by_step);
    }

    #[test]
    fn test_euler_single_axis_matches_axis_angle() {
        assert_eq!(
            Quaternion::euler(0.0, 0.9, 0.0),
            Quaternion::axis_angle(Vector3::UP, 0.9)
        );
        assert_eq!(
            Quaternion::euler_yxz(0.5, 0.0, 0.0),
            Quaternion::axis_angle(Vector3::RIGHT, 0.5)
        );
    }

    #[test]
    fn test_normalized() {
        let q = Quaternion::new(1.0, 2.0, 2.0, 4.0).normalized();
        assert!(equals(q.length(), 1.0));
        assert_eq!(q, Quaternion::new(0.2, 0.4, 0.4, 0.8));
    }

    #[test]
    fn test_vector4_conversion_is_reinterpretation() {
        let v = Vector4::new(3.0, 0.0, 0.0, 4.0);
        let q = Quaternion::from(v);
        assert_eq!(q, Quaternion::new(3.0, 0.0, 0.0, 4.0));
        assert_eq!(Vector4::from(q), v);
    }

    #[test]
    fn test_slerp_endpoints_and_midpoint() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::axis_angle(Vector3::UP, PI / 2.0);
        assert_eq!(a.slerp(b, 0.0), a);
        assert_eq!(a.slerp(b, 1.0), b);
        assert_eq!(a.slerp(b, 0.5), Quaternion::axis_angle(Vector3::UP, PI / 4.0));
    }

    #[test]
    fn test_slerp_with_itself_is_noop() {
        let q = Quaternion::axis_angle(Vector3::new(0.0, 0.6, 0.8), 0.4);
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(q.slerp(q, t), q);
        }
    }

    #[test]
    fn test_slerp_takes_shortest_arc() {
        let a = Quaternion::axis_angle(Vector3::UP, 0.2);
        let b = -Quaternion::axis_angle(Vector3::UP, 0.6);
        assert!(a.dot(b) < 0.0);
        let mid = a.slerp(b, 0.5);
        assert!(same_rotation(mid, Quaternion::axis_angle(Vector3::UP, 0.4)));
    }

    #[test]
    fn test_slerp_near_parallel_stays_finite() {
        let a = Quaternion::axis_angle(Vector3::UP, 0.0);
        let b = Quaternion::axis_angle(Vector3::UP, 0.000_01);
        let q = a.slerp(b, 0.5);
        assert!(q.x.is_finite() && q.y.is_finite() && q.z.is_finite() && q.w.is_finite());
        assert!(equals(q.length(), 1.0));
    }

    #[test]
    fn test_nlerp_is_unit_length() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::axis_angle(Vector3::RIGHT, 2.0);
        let q = a.nlerp(b, 0.3);
        assert!(equals(q.length(), 1.0));
        assert_eq!(a.nlerp(b, 1.0), b);
    }

    #[test]
    fn test_conjugate_undoes_rotation() {
        let q = Quaternion::euler(0.3, -1.1, 0.8);
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(q.conjugate() * (q * v), v);
        assert_eq!(q * q.conjugate(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_zero_normalized_is_nan() {
        assert!(Quaternion::ZERO.normalized().w.is_nan());
    }
}
