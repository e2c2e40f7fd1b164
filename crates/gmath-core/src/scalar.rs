//! Floating-point scalar abstraction.
//!
//! Vectors, matrices and noise generators are generic over [`Scalar`],
//! which is implemented for `f32` and `f64`.
//!
//! # Example
//!
//! ```rust
//! use gmath_core::Scalar;
//!
//! fn half<T: Scalar>(v: T) -> T {
//!     v / T::TWO
//! }
//!
//! assert_eq!(half(3.0f32), 1.5);
//! assert_eq!(half(3.0f64), 1.5);
//! ```

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A floating-point scalar usable as a vector, matrix or noise component.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Two.
    const TWO: Self;

    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(v: f64) -> Self;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;

    /// Converts a lattice index to a scalar.
    fn from_index(i: usize) -> Self;

    /// Converts a non-negative floored value to an index.
    ///
    /// Saturates: negative values and NaN give 0.
    fn to_index(self) -> usize;

    /// Largest integer less than or equal to `self`.
    fn floor(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Sine (radians).
    fn sin(self) -> Self;

    /// Cosine (radians).
    fn cos(self) -> Self;

    /// Floored remainder, always in `[0, rhs)` up to rounding for positive `rhs`.
    fn rem_euclid(self, rhs: Self) -> Self;

    /// Returns `true` if neither infinite nor NaN.
    fn is_finite(self) -> bool;
}

macro_rules! impl_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_index(i: usize) -> Self {
                i as $t
            }

            #[inline]
            fn to_index(self) -> usize {
                self as usize
            }

            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$t>::cos(self)
            }

            #[inline]
            fn rem_euclid(self, rhs: Self) -> Self {
                <$t>::rem_euclid(self, rhs)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
