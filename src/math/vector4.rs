use super::Vector3;
use bytemuck::{Pod, Zeroable};

/// Four-component vector, also the homogeneous form of a [`Vector3`].
///
/// The basis constants are directions and carry `w = 0`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_vector!(Vector4, 4, x, y, z, w);

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const IN: Self = Self::new(0.0, 0.0, -1.0, 0.0);
    pub const OUT: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const UNIT: Self = Self::new(0.5, 0.5, 0.5, 0.5);

    /// Drops `w` without dividing by it.
    #[inline]
    pub const fn truncate(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}
