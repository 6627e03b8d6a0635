//! # sbl-math
//!
//! A small single-precision linear algebra library for real-time rendering,
//! plus the camera and per-frame constant blocks built on top of it.
//!
//! ## Features
//! - `Vector2`/`Vector3`/`Vector4` with componentwise operators
//! - Row-major `Matrix22`/`Matrix33`/`Matrix44` with inverse, adjoint and
//!   transform factories
//! - `Quaternion` rotations with slerp and nlerp
//! - `UniformTransform` for translation, rotation and uniform scale
//! - `bytemuck::Pod` on every value type for direct GPU upload
//! - Optional `serde` (default) and `glam` interop
//!
//! Operations never fail: degenerate inputs such as zero-length vectors or
//! singular matrices produce NaN or infinity instead of an error.
//!
//! ## Example
//! ```rust
//! use sbl_math::math::{Matrix44, Quaternion, Vector3};
//! use sbl_math::math::common::PI;
//!
//! let rotation = Quaternion::axis_angle(Vector3::UP, PI / 2.0);
//! let world = Matrix44::translation_rotation_uniform_scale(Vector3::new(0.0, 1.0, 0.0), rotation, 2.0);
//!
//! // Scale, then rotate, then translate.
//! let point = world * Vector3::OUT;
//! assert_eq!(point, Vector3::new(2.0, 1.0, 0.0));
//! ```

pub mod math;
pub mod render;

pub use math::{
    Matrix22, Matrix33, Matrix44, Quaternion, Rectangle, UniformTransform, Vector2, Vector3,
    Vector4,
};
pub use render::{Camera, ObjectConstants, ViewConstants};
