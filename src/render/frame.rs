//! Per-frame constant blocks handed to the shader side. Matrices are stored
//! transposed, i.e. column-major, and every block is `Pod` so it can be
//! copied into an upload buffer with `bytemuck::bytes_of`.

use super::Camera;
use crate::math::{Matrix44, UniformTransform, Vector3};
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectConstants {
    pub object_to_view: Matrix44,
    pub object_to_world: Matrix44,
    pub normal_to_view: Matrix44,
    pub normal_to_world: Matrix44,
}

impl ObjectConstants {
    /// `object_to_view` includes the camera projection. Normals only go as
    /// far as camera space, so `normal_to_view` carries no fov or depth scale.
    pub fn new(camera: &Camera, transform: &UniformTransform) -> Self {
        let object_to_world = transform.build_world_transform_matrix();
        let normal_to_world = transform.build_normal_matrix();
        let normal_to_view = camera.view_matrix().normal_matrix() * normal_to_world;
        log::trace!("object constants for {:?}", transform);

        Self {
            object_to_view: (camera.view_projection() * object_to_world).transpose(),
            object_to_world: object_to_world.transpose(),
            normal_to_view: normal_to_view.transpose(),
            normal_to_world: normal_to_world.transpose(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewConstants {
    pub world_to_view: Matrix44,
    pub eye_position: Vector3,
    pub frame_num: u32,
}

impl ViewConstants {
    pub fn new(camera: &Camera, frame_num: u32) -> Self {
        log::trace!("view constants for frame {}", frame_num);
        Self {
            world_to_view: camera.view_projection().transpose(),
            eye_position: camera.position,
            frame_num,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::common::PI;
    use crate::math::Quaternion;
    use pretty_assertions::assert_eq;

    /// Camera at the origin looking down +Z, so its view matrix is identity.
    fn origin_camera() -> Camera {
        Camera {
            position: Vector3::ZERO,
            ..Camera::default()
        }
    }

    #[test]
    fn test_object_constants_are_transposed() {
        let camera = origin_camera();
        let transform = UniformTransform::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let constants = ObjectConstants::new(&camera, &transform);
        // The translation lands in the last row once transposed.
        assert_eq!(constants.object_to_world.row(3).truncate(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(
            constants.object_to_view,
            (camera.view_projection() * transform.build_world_transform_matrix()).transpose()
        );
        assert_eq!(constants.normal_to_world, Matrix44::IDENTITY);
    }

    #[test]
    fn test_normal_constants_follow_rotation_and_scale() {
        let rotation = Quaternion::axis_angle(Vector3::OUT, PI / 2.0);
        let transform = UniformTransform::new(Vector3::ZERO, rotation, 2.0);
        let constants = ObjectConstants::new(&origin_camera(), &transform);
        let expected = (Matrix44::rotation(rotation) * Matrix44::uniform_scale(0.5)).transpose();
        assert_eq!(constants.normal_to_world, expected);
        assert_eq!(constants.normal_to_view, expected);
    }

    #[test]
    fn test_normal_to_view_ignores_projection_scale() {
        let mut camera = Camera::default();
        camera.set_aspect(2.0);
        camera.rotate(PI / 2.0, 0.0);
        let constants = ObjectConstants::new(&camera, &UniformTransform::IDENTITY);

        let normal_to_view = constants.normal_to_view.transpose();
        assert_eq!(normal_to_view, camera.view_matrix().normal_matrix());
        for axis in [Vector3::RIGHT, Vector3::UP, Vector3::OUT] {
            let moved = (normal_to_view * axis.extend(0.0)).truncate();
            assert!((moved.length() - 1.0).abs() < 1e-5, "{:?} -> {:?}", axis, moved);
        }
        // The camera now looks along +X, which is depth in camera space.
        let depth = (normal_to_view * Vector3::RIGHT.extend(0.0)).truncate();
        assert_eq!(depth, Vector3::OUT);
    }

    #[test]
    fn test_view_constants_layout() {
        let camera = Camera::default();
        let constants = ViewConstants::new(&camera, 7);
        assert_eq!(constants.world_to_view, camera.view_projection().transpose());
        assert_eq!(constants.eye_position, camera.position);
        assert_eq!(constants.frame_num, 7);
        assert_eq!(bytemuck::bytes_of(&constants).len(), 64 + 12 + 4);
    }
}
