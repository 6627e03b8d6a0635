use crate::math::common::{tan, PI};
use crate::math::{Matrix44, Radians, Vector3, Vector4};

/// Left-handed free-look camera: `forward` points into the screen along +Z by
/// default and `right` is `up x forward`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    pub position: Vector3,
    pub forward: Vector3,
    pub up: Vector3,
    /// Vertical field of view.
    pub fov: Radians,
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub yaw: Radians,
    pub pitch: Radians,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -2.0),
            forward: Self::DEFAULT_FORWARD,
            up: Self::DEFAULT_UP,
            fov: PI / 2.0,
            aspect: 1.0,
            near: 0.1,
            far: 10.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl Camera {
    pub const DEFAULT_FORWARD: Vector3 = Vector3::OUT;
    pub const DEFAULT_UP: Vector3 = Vector3::UP;

    pub fn new() -> Self {
        Self::default()
    }

    /// World-to-camera transform: the rows of the camera basis times a
    /// translation by `-position`.
    pub fn view_matrix(&self) -> Matrix44 {
        let w = self.forward.normalized();
        let u = self.up.cross(w).normalized();
        let v = w.cross(u);

        let basis = Matrix44::from_rows([
            u.extend(0.0),
            v.extend(0.0),
            w.extend(0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        ]);
        basis * Matrix44::translation(-self.position)
    }

    /// Perspective projection taking camera-space depth in `[near, far]` to
    /// `[0, 1]` after the divide by `w`, which receives camera-space `z`.
    pub fn projection_matrix(&self) -> Matrix44 {
        let y_scale = 1.0 / tan(self.fov / 2.0);
        let x_scale = y_scale / self.aspect;
        let (n, f) = (self.near, self.far);
        let depth = f / (f - n);

        Matrix44::new(
            x_scale, 0.0, 0.0, 0.0, //
            0.0, y_scale, 0.0, 0.0, //
            0.0, 0.0, depth, -n * depth, //
            0.0, 0.0, 1.0, 0.0,
        )
    }

    pub fn view_projection(&self) -> Matrix44 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn right(&self) -> Vector3 {
        self.up.cross(self.forward).normalized()
    }

    pub fn move_forward(&mut self, delta: f32) {
        self.position += self.forward * delta;
    }

    pub fn move_right(&mut self, delta: f32) {
        self.position += self.up.cross(self.forward) * delta;
    }

    /// Adds to the accumulated yaw and pitch and rebuilds `forward` and `up`
    /// from the defaults.
    pub fn rotate(&mut self, yaw: Radians, pitch: Radians) {
        self.yaw += yaw;
        self.pitch += pitch;

        let rotation = Matrix44::rotation_x(self.pitch) * Matrix44::rotation_y(self.yaw);
        self.forward = rotation * Self::DEFAULT_FORWARD;
        self.up = rotation * Self::DEFAULT_UP;
        log::trace!(
            "camera yaw={:.3} pitch={:.3} forward={:?}",
            self.yaw,
            self.pitch,
            self.forward
        );
    }

    /// World-space ray through a point in normalized device coordinates.
    pub fn screen_to_ray(&self, ndc_x: f32, ndc_y: f32) -> (Vector3, Vector3) {
        let inv_view_proj = self.view_projection().inverse();

        let near_point = inv_view_proj * Vector4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far_point = inv_view_proj * Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near_point.truncate() / near_point.w;
        let far = far_point.truncate() / far_point.w;

        (near, (far - near).normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::common::equals;
    use pretty_assertions::assert_eq;

    fn project(camera: &Camera, point: Vector3) -> Vector3 {
        let clip = camera.view_projection() * point.extend(1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn test_default_view_moves_eye_to_origin() {
        let camera = Camera::default();
        assert_eq!(camera.view_matrix() * camera.position, Vector3::ZERO);
        assert_eq!(camera.view_matrix() * Vector3::ZERO, Vector3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_view_basis_is_left_handed() {
        let camera = Camera::default();
        assert_eq!(camera.right(), Vector3::RIGHT);
        let view = camera.view_matrix();
        assert_eq!(view.row(0), Vector4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(view.row(1), Vector4::new(0.0, 1.0, 0.0, 0.0));
        assert_eq!(view.row(2), Vector4::new(0.0, 0.0, 1.0, 2.0));
    }

    #[test]
    fn test_projection_maps_near_and_far_planes() {
        let camera = Camera::default();
        let near = project(&camera, Vector3::new(0.0, 0.0, camera.position.z + camera.near));
        let far = project(&camera, Vector3::new(0.0, 0.0, camera.position.z + camera.far));
        assert!(equals(near.z, 0.0));
        assert!((far.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_projection_edges_of_frustum() {
        // fov of 90 degrees puts the frustum edge at x == z.
        let mut camera = Camera::default();
        camera.position = Vector3::ZERO;
        let edge = project(&camera, Vector3::new(2.0, 2.0, 2.0));
        assert!((edge.x - 1.0).abs() < 1e-5);
        assert!((edge.y - 1.0).abs() < 1e-5);

        camera.set_aspect(2.0);
        let edge = project(&camera, Vector3::new(2.0, 0.0, 1.0));
        assert!((edge.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_movement_follows_basis() {
        let mut camera = Camera::default();
        camera.move_forward(1.0);
        assert_eq!(camera.position, Vector3::new(0.0, 0.0, -1.0));
        camera.move_right(-0.5);
        assert_eq!(camera.position, Vector3::new(-0.5, 0.0, -1.0));
    }

    #[test]
    fn test_rotate_accumulates_from_defaults() {
        let mut camera = Camera::default();
        camera.rotate(PI / 4.0, 0.0);
        camera.rotate(PI / 4.0, 0.0);
        assert_eq!(camera.forward, Vector3::RIGHT);
        assert_eq!(camera.up, Vector3::UP);

        let mut camera = Camera::default();
        camera.rotate(0.0, PI / 2.0);
        assert_eq!(camera.forward, Vector3::DOWN);
        assert_eq!(camera.up, Vector3::OUT);
    }

    #[test]
    fn test_screen_center_ray_points_forward() {
        let camera = Camera::default();
        let (origin, direction) = camera.screen_to_ray(0.0, 0.0);
        assert!((origin.z - (camera.position.z + camera.near)).abs() < 1e-4);
        assert!((direction - Vector3::OUT).length() < 1e-4);
    }
}
