//! Rendering front end
//!
//! The camera and the per-frame constant blocks built from it. No GPU
//! resources live here; callers upload the `Pod` blocks themselves.

pub mod camera;
pub mod frame;

pub use camera::Camera;
pub use frame::{ObjectConstants, ViewConstants};
