//! Math module
//!
//! Single-precision vectors, square matrices, quaternions and the transform
//! builders composed from them. Matrices are row-major and transform column
//! vectors: `matrix * vector`.

#[macro_use]
mod macros;

pub mod common;
mod matrix22;
mod matrix33;
mod matrix44;
mod quaternion;
mod rectangle;
mod transform;
mod vector2;
mod vector3;
mod vector4;

#[cfg(feature = "glam")]
mod glam_interop;

pub use common::{Degrees, Radians};
pub use matrix22::Matrix22;
pub use matrix33::Matrix33;
pub use matrix44::Matrix44;
pub use quaternion::Quaternion;
pub use rectangle::Rectangle;
pub use transform::UniformTransform;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
