use super::Vector3;
use bytemuck::{Pod, Zeroable};

/// Two-component vector.
///
/// There is deliberately no `Default`: use [`Vector2::ZERO`] for a
/// deterministic value or `Zeroable::zeroed()` when a blank value is needed.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl_vector!(Vector2, 2, x, y);

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0);
    pub const DOWN: Self = Self::new(0.0, -1.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    pub const UNIT: Self = Self::new(0.707_107, 0.707_107);

    #[inline]
    pub const fn extend(self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }
}
