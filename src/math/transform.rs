use super::{Matrix33, Matrix44, Quaternion, Vector3};
use bytemuck::{Pod, Zeroable};

/// Object placement: translation, rotation and a single scale factor.
///
/// Holds no cached matrix; [`UniformTransform::build_world_transform_matrix`]
/// composes one on demand.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformTransform {
    pub translation: Vector3,
    pub rotation: Quaternion,
    pub uniform_scale: f32,
}

impl Default for UniformTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl UniformTransform {
    pub const IDENTITY: Self = Self {
        translation: Vector3::ZERO,
        rotation: Quaternion::IDENTITY,
        uniform_scale: 1.0,
    };

    pub fn new(translation: Vector3, rotation: Quaternion, uniform_scale: f32) -> Self {
        Self {
            translation,
            rotation,
            uniform_scale,
        }
    }

    pub fn from_translation(translation: Vector3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn from_translation_rotation(translation: Vector3, rotation: Quaternion) -> Self {
        Self {
            translation,
            rotation,
            uniform_scale: 1.0,
        }
    }

    /// `translation * rotation * scale`, same order as
    /// [`Matrix44::translation_rotation_uniform_scale`].
    pub fn build_world_transform_matrix(&self) -> Matrix44 {
        Matrix44::translation(self.translation)
            * Matrix44::rotation(self.rotation)
            * Matrix44::uniform_scale(self.uniform_scale)
    }

    /// Object-to-world transform for normals: the rotation followed by the
    /// reciprocal scale.
    pub fn build_normal_matrix(&self) -> Matrix44 {
        Matrix44::rotation(self.rotation) * Matrix44::inverse_scale(Vector3::splat(self.uniform_scale))
    }

    pub fn forward(&self) -> Vector3 {
        self.rotation * Vector3::OUT
    }

    pub fn up(&self) -> Vector3 {
        self.rotation * Vector3::UP
    }

    pub fn right(&self) -> Vector3 {
        self.rotation * Vector3::RIGHT
    }

    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.rotation * (point * self.uniform_scale) + self.translation
    }

    pub fn transform_direction(&self, direction: Vector3) -> Vector3 {
        self.rotation * direction
    }

    /// Placement at `position` facing `target`; `up` must not be parallel to
    /// the viewing direction.
    pub fn look_at(position: Vector3, target: Vector3, up: Vector3) -> Self {
        Self {
            translation: position,
            rotation: Matrix33::look_rotation(target - position, up).to_quaternion(),
            uniform_scale: 1.0,
        }
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            translation: self.translation.lerp(other.translation, t),
            rotation: self.rotation.slerp(other.rotation, t),
            uniform_scale: crate::math::common::lerp(self.uniform_scale, other.uniform_scale, t),
        }
    }
}
