//! Conversions to and from `glam`. glam stores matrices column-major, so
//! rows here become glam's `row(i)` and columns become its `from_cols`.

use super::{Matrix22, Matrix33, Matrix44, Quaternion, Vector2, Vector3, Vector4};

macro_rules! impl_glam_vector {
    ($Vector:ident, $Glam:ty, $n:literal) => {
        impl From<$Glam> for $Vector {
            fn from(v: $Glam) -> Self {
                Self::from(v.to_array())
            }
        }

        impl From<$Vector> for $Glam {
            fn from(v: $Vector) -> Self {
                <$Glam>::from_array(<[f32; $n]>::from(v))
            }
        }
    };
}

impl_glam_vector!(Vector2, glam::Vec2, 2);
impl_glam_vector!(Vector3, glam::Vec3, 3);
impl_glam_vector!(Vector4, glam::Vec4, 4);

macro_rules! impl_glam_matrix {
    ($Matrix:ident, $Glam:ty, [$($i:literal),+]) => {
        impl From<$Glam> for $Matrix {
            fn from(m: $Glam) -> Self {
                Self::from_rows([$(m.row($i).into()),+])
            }
        }

        impl From<$Matrix> for $Glam {
            fn from(m: $Matrix) -> Self {
                <$Glam>::from_cols($(m.column($i).into()),+)
            }
        }
    };
}

impl_glam_matrix!(Matrix22, glam::Mat2, [0, 1]);
impl_glam_matrix!(Matrix33, glam::Mat3, [0, 1, 2]);
impl_glam_matrix!(Matrix44, glam::Mat4, [0, 1, 2, 3]);

impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        let [x, y, z, w] = q.to_array();
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matrix_layout_survives_round_trip() {
        let m = Matrix44::translation(Vector3::new(1.0, 2.0, 3.0));
        let g: glam::Mat4 = m.into();
        assert_eq!(g.w_axis, glam::Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Matrix44::from(g), m);
    }

    #[test]
    fn test_vector_and_quaternion_conversions() {
        let v: glam::Vec3 = Vector3::new(1.0, -2.0, 3.0).into();
        assert_eq!(v, glam::Vec3::new(1.0, -2.0, 3.0));
        let q = Quaternion::new(0.0, 0.0, 0.707_106_8, 0.707_106_8);
        let g: glam::Quat = q.into();
        assert_eq!(Quaternion::from(g), q);
    }
}
