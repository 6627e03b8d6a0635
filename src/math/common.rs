//! Scalar constants and helpers shared by every vector, matrix and quaternion type.
//!
//! All math in this crate is single precision. Comparisons between floats go
//! through [`equals`], which tolerates an absolute error of [`EPSILON`] so that
//! the rounding noise of trigonometric and matrix operations does not break
//! equality.

pub type Radians = f32;
pub type Degrees = f32;

pub const EPSILON: f32 = 0.000_001;
pub const PI: f32 = std::f32::consts::PI;
pub const DEGREES_TO_RADIANS: f32 = PI / 180.0;
pub const RADIANS_TO_DEGREES: f32 = 180.0 / PI;
pub const NAN: f32 = f32::NAN;

/// Epsilon-tolerant float comparison, `|lhs - rhs| < EPSILON`.
///
/// NaN never compares equal, infinities compare equal to themselves.
#[inline]
pub fn equals(lhs: f32, rhs: f32) -> bool {
    lhs == rhs || (lhs - rhs).abs() < EPSILON
}

/// Works for any signed type, including the `i32` coordinates of a `Rectangle`.
#[inline]
pub fn abs<T: Copy + PartialOrd + Default + std::ops::Neg<Output = T>>(value: T) -> T {
    if value < T::default() {
        -value
    } else {
        value
    }
}

#[inline]
pub fn is_zero(value: f32) -> bool {
    equals(value, 0.0)
}

/// Snaps values within [`EPSILON`] of zero to exactly zero.
#[inline]
pub fn make_zero(value: f32) -> f32 {
    if is_zero(value) {
        0.0
    } else {
        value
    }
}

#[inline]
pub fn floor(value: f32) -> f32 {
    value.floor()
}

#[inline]
pub fn ceil(value: f32) -> f32 {
    value.ceil()
}

/// Fractional part, always in `[0, 1)` for finite input.
#[inline]
pub fn frac(value: f32) -> f32 {
    value - value.floor()
}

/// Unclamped linear interpolation between two scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn degrees_to_radians(degrees: Degrees) -> Radians {
    degrees * DEGREES_TO_RADIANS
}

#[inline]
pub fn radians_to_degrees(radians: Radians) -> Degrees {
    radians * RADIANS_TO_DEGREES
}

#[inline]
pub fn sin(radians: Radians) -> f32 {
    radians.sin()
}

#[inline]
pub fn cos(radians: Radians) -> f32 {
    radians.cos()
}

#[inline]
pub fn tan(radians: Radians) -> f32 {
    radians.tan()
}

#[inline]
pub fn arc_sin(value: f32) -> Radians {
    value.asin()
}

#[inline]
pub fn arc_cos(value: f32) -> Radians {
    value.acos()
}

#[inline]
pub fn arc_tan(value: f32) -> Radians {
    value.atan()
}

/// Angle of the point `(x, y)` from the +X axis.
#[inline]
pub fn arc_tan2(x: f32, y: f32) -> Radians {
    y.atan2(x)
}

#[inline]
pub fn pow(value: f32, exponent: f32) -> f32 {
    value.powf(exponent)
}

#[inline]
pub fn exp(value: f32) -> f32 {
    value.exp()
}

#[inline]
pub const fn pow2(value: f32) -> f32 {
    value * value
}

#[inline]
pub const fn pow3(value: f32) -> f32 {
    value * value * value
}

/// Generic clamp; unlike `f32::clamp` this never panics on `min > max`,
/// it simply returns `min` for values below it and `max` for values above.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
