//! Interpolation utilities.
//!
//! - Linear interpolation ([`lerp`])
//! - Quintic fade curve ([`fade`]) used to blend gradient-noise corners
//! - Clamping to the unit interval ([`saturate`])
//!
//! # Usage
//!
//! ```rust
//! use gmath_math::{fade, lerp};
//!
//! assert_eq!(lerp(0.0f32, 10.0, 0.5), 5.0);
//! assert_eq!(fade(0.5f64), 0.5);
//! ```

use gmath_core::Scalar;

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0`, and `b` when `t = 1`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
#[inline]
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Ken Perlin's quintic fade curve.
///
/// First and second derivatives are zero at `t = 0` and `t = 1`, so
/// blended lattice cells meet without visible creases.
///
/// # Formula
///
/// `6t^5 - 15t^4 + 10t^3`, evaluated as `t * t * t * (t * (t * 6 - 15) + 10)`
///
/// # Example
///
/// ```rust
/// use gmath_math::fade;
///
/// assert_eq!(fade(0.0f32), 0.0);
/// assert_eq!(fade(1.0f32), 1.0);
/// ```
#[inline]
pub fn fade<T: Scalar>(t: T) -> T {
    let six = T::from_f64(6.0);
    let fifteen = T::from_f64(15.0);
    let ten = T::from_f64(10.0);
    t * t * t * (t * (t * six - fifteen) + ten)
}

/// Clamps a value to [0, 1].
///
/// # Example
///
/// ```rust
/// use gmath_math::saturate;
///
/// assert_eq!(saturate(-0.5f32), 0.0);
/// assert_eq!(saturate(1.5f64), 1.0);
/// ```
#[inline]
pub fn saturate<T: Scalar>(value: T) -> T {
    if value < T::ZERO {
        T::ZERO
    } else if value > T::ONE {
        T::ONE
    } else {
        value
    }
}
