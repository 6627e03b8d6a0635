//! Operator boilerplate shared by `Vector2`, `Vector3` and `Vector4`.

/// Componentwise binary operator between two vectors plus the broadcast scalar
/// forms (`vector op scalar`, `scalar op vector`) and their compound assignments.
macro_rules! impl_vector_op {
    ($Vector:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $tok:tt; $($field:ident),+) => {
        impl std::ops::$Op for $Vector {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self { $($field: self.$field $tok rhs.$field),+ }
            }
        }

        impl std::ops::$Op<f32> for $Vector {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: f32) -> Self {
                Self { $($field: self.$field $tok rhs),+ }
            }
        }

        impl std::ops::$Op<$Vector> for f32 {
            type Output = $Vector;
            #[inline]
            fn $op(self, rhs: $Vector) -> $Vector {
                $Vector { $($field: self $tok rhs.$field),+ }
            }
        }

        impl std::ops::$OpAssign for $Vector {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field $tok rhs.$field;)+
            }
        }

        impl std::ops::$OpAssign<f32> for $Vector {
            #[inline]
            fn $op_assign(&mut self, rhs: f32) {
                $(self.$field = self.$field $tok rhs;)+
            }
        }
    };
}

/// Everything the three vector sizes have in common. The struct itself must be
/// `#[repr(C)]` with `N` `f32` fields so that the named fields and the
/// `[f32; N]` view returned by `values()` share the same memory.
macro_rules! impl_vector {
    ($Vector:ident, $n:literal, $($field:ident),+) => {
        impl $Vector {
            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Every component set to `value`.
            #[inline]
            pub const fn splat(value: f32) -> Self {
                Self { $($field: value),+ }
            }

            /// The components as a contiguous array, aliasing the named fields.
            #[inline]
            pub fn values(&self) -> &[f32; $n] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            pub fn values_mut(&mut self) -> &mut [f32; $n] {
                bytemuck::cast_mut(self)
            }

            #[inline]
            pub fn sum(self) -> f32 {
                0.0 $(+ self.$field)+
            }

            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                (self * rhs).sum()
            }

            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Unit-length copy. The zero vector yields NaN components.
            #[inline]
            pub fn normalized(self) -> Self {
                self / self.length()
            }

            /// Angle in radians between the two directions. The cosine is
            /// clamped to `[-1, 1]` so rounding never pushes `acos` into NaN.
            #[inline]
            pub fn angle_between(self, rhs: Self) -> $crate::math::Radians {
                let cosine = self.normalized().dot(rhs.normalized());
                $crate::math::common::arc_cos($crate::math::common::clamp(cosine, -1.0, 1.0))
            }

            /// Mirrors `self` about the plane with the given unit `normal`.
            #[inline]
            pub fn reflection(self, normal: Self) -> Self {
                self - normal * (2.0 * self.dot(normal))
            }

            /// Component of `self` parallel to `target`.
            #[inline]
            pub fn projection(self, target: Self) -> Self {
                target * (self.dot(target) / target.dot(target))
            }

            /// Component of `self` perpendicular to `target`.
            #[inline]
            pub fn rejection(self, target: Self) -> Self {
                self - self.projection(target)
            }

            /// `portion` is not clamped; values outside `[0, 1]` extrapolate.
            #[inline]
            pub fn lerp(self, target: Self, portion: f32) -> Self {
                self + (target - self) * portion
            }

            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($field: self.$field.min(rhs.$field)),+ }
            }

            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($field: self.$field.max(rhs.$field)),+ }
            }

            #[inline]
            pub fn clamp(self, min: f32, max: f32) -> Self {
                Self { $($field: $crate::math::common::clamp(self.$field, min, max)),+ }
            }

            #[inline]
            pub fn clamp_vector(self, min: Self, max: Self) -> Self {
                Self { $($field: $crate::math::common::clamp(self.$field, min.$field, max.$field)),+ }
            }
        }

        impl_vector_op!($Vector, Add, add, AddAssign, add_assign, +; $($field),+);
        impl_vector_op!($Vector, Sub, sub, SubAssign, sub_assign, -; $($field),+);
        impl_vector_op!($Vector, Mul, mul, MulAssign, mul_assign, *; $($field),+);
        impl_vector_op!($Vector, Div, div, DivAssign, div_assign, /; $($field),+);

        impl std::ops::Neg for $Vector {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl PartialEq for $Vector {
            fn eq(&self, rhs: &Self) -> bool {
                true $(&& $crate::math::common::equals(self.$field, rhs.$field))+
            }
        }

        impl std::ops::Index<usize> for $Vector {
            type Output = f32;
            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.values()[index]
            }
        }

        impl std::ops::IndexMut<usize> for $Vector {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.values_mut()[index]
            }
        }

        impl From<[f32; $n]> for $Vector {
            fn from(values: [f32; $n]) -> Self {
                bytemuck::cast(values)
            }
        }

        impl From<$Vector> for [f32; $n] {
            fn from(vector: $Vector) -> Self {
                bytemuck::cast(vector)
            }
        }
    };
}

/// Row storage, views, arithmetic and the cofactor-derived operations shared by
/// the square matrices. Each matrix provides `determinant` and
/// `cofactor_of_element` itself, since those differ per size.
macro_rules! impl_matrix {
    ($Matrix:ident, $Vector:ident, $n:literal, $nn:literal) => {
        impl $Matrix {
            #[inline]
            pub const fn from_rows(rows: [$Vector; $n]) -> Self {
                Self { rows }
            }

            /// All cells in row-major order, aliasing the rows.
            #[inline]
            pub fn values(&self) -> &[f32; $nn] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            pub fn values_mut(&mut self) -> &mut [f32; $nn] {
                bytemuck::cast_mut(self)
            }

            #[inline]
            pub fn row(&self, row_index: usize) -> $Vector {
                self.rows[row_index]
            }

            /// Gathers one component from every row; not a stored view.
            pub fn column(&self, column_index: usize) -> $Vector {
                let mut column = $Vector::ZERO;
                for (row_index, row) in self.rows.iter().enumerate() {
                    column[row_index] = row[column_index];
                }
                column
            }

            /// `+1` when `row + column` is even, `-1` otherwise.
            #[inline]
            pub fn sign_of_element(column: usize, row: usize) -> f32 {
                if (row + column) % 2 == 0 {
                    1.0
                } else {
                    -1.0
                }
            }

            pub fn transpose(&self) -> Self {
                let mut result = Self::ZERO;
                for row in 0..$n {
                    for column in 0..$n {
                        result.rows[column][row] = self.rows[row][column];
                    }
                }
                result
            }

            /// Matrix of signed minors.
            pub fn cofactor(&self) -> Self {
                let mut result = Self::ZERO;
                for row in 0..$n {
                    for column in 0..$n {
                        result.rows[row][column] = self.cofactor_of_element(column, row);
                    }
                }
                result
            }

            #[inline]
            pub fn adjoint(&self) -> Self {
                self.cofactor().transpose()
            }

            /// `adjoint / determinant`. Singular matrices produce Inf/NaN cells.
            #[inline]
            pub fn inverse(&self) -> Self {
                self.adjoint() / self.determinant()
            }
        }

        impl std::ops::Index<usize> for $Matrix {
            type Output = $Vector;
            #[inline]
            fn index(&self, row_index: usize) -> &$Vector {
                &self.rows[row_index]
            }
        }

        impl std::ops::IndexMut<usize> for $Matrix {
            #[inline]
            fn index_mut(&mut self, row_index: usize) -> &mut $Vector {
                &mut self.rows[row_index]
            }
        }

        impl PartialEq for $Matrix {
            fn eq(&self, rhs: &Self) -> bool {
                self.rows == rhs.rows
            }
        }

        impl_matrix_scalar_op!($Matrix, Add, add);
        impl_matrix_scalar_op!($Matrix, Sub, sub);
        impl_matrix_scalar_op!($Matrix, Mul, mul);
        impl_matrix_scalar_op!($Matrix, Div, div);

        /// Row-by-column product; `(a * b) * v == a * (b * v)`.
        impl std::ops::Mul for $Matrix {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                let mut result = Self::ZERO;
                for row in 0..$n {
                    for column in 0..$n {
                        result.rows[row][column] = self.rows[row].dot(rhs.column(column));
                    }
                }
                result
            }
        }

        impl std::ops::MulAssign for $Matrix {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl std::ops::Mul<$Vector> for $Matrix {
            type Output = $Vector;
            fn mul(self, rhs: $Vector) -> $Vector {
                let mut result = $Vector::ZERO;
                for (row_index, row) in self.rows.iter().enumerate() {
                    result[row_index] = row.dot(rhs);
                }
                result
            }
        }
    };
}

/// Elementwise `matrix op scalar`, applied to every cell.
macro_rules! impl_matrix_scalar_op {
    ($Matrix:ident, $Op:ident, $op:ident) => {
        impl std::ops::$Op<f32> for $Matrix {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: f32) -> Self {
                let mut result = self;
                for row in result.rows.iter_mut() {
                    *row = std::ops::$Op::$op(*row, rhs);
                }
                result
            }
        }
    };
}
