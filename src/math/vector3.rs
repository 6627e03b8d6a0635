use super::{Vector2, Vector4};
use bytemuck::{Pod, Zeroable};

/// Three-component vector for points and directions.
///
/// Basis constants follow a left-handed layout: `RIGHT` is +X, `UP` is +Y and
/// `OUT` is +Z (the default camera forward), so `UP.cross(OUT) == RIGHT`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_vector!(Vector3, 3, x, y, z);

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const IN: Self = Self::new(0.0, 0.0, -1.0);
    pub const OUT: Self = Self::new(0.0, 0.0, 1.0);
    pub const UNIT: Self = Self::new(0.577_350_3, 0.577_350_3, 0.577_350_3);

    /// `(y*rz - z*ry, z*rx - x*rz, x*ry - y*rx)`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[inline]
    pub const fn extend(self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub const fn truncate(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}
