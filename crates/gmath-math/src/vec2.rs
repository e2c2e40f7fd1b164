//! 2D vector type.
//!
//! [`Vec2`] carries lattice gradients and sample offsets for gradient noise,
//! and general 2D geometry elsewhere.
//!
//! # Usage
//!
//! ```rust
//! use gmath_math::Vec2;
//!
//! let g = Vec2::new(1.0f32, -1.0);
//! let offset = Vec2::new(0.25, 0.75);
//! assert_eq!(g.dot(offset), -0.5);
//! ```

use gmath_core::Scalar;
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// A 2D vector.
///
/// # Components
///
/// Access via `.x`, `.y` or index `[0]`, `[1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec2<T = f32> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self { x: v, y: v }
    }

    /// Zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn norm_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> T {
        self.norm_squared().sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// The zero vector and vectors already of unit length are returned unchanged.
    pub fn normalize(self) -> Self {
        let len = self.norm();
        if len == T::ZERO || len == T::ONE {
            return self;
        }
        self / len
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).norm()
    }

    /// Rotates counter-clockwise around the origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath_math::Vec2;
    ///
    /// let v = Vec2::new(1.0f64, 0.0).rotate(std::f64::consts::FRAC_PI_2);
    /// assert!((v.x).abs() < 1e-12);
    /// assert!((v.y - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotate(self, radians: T) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Converts to an array `[x, y]`.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T> Index<usize> for Vec2<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<glam::Vec2> for Vec2<f32> {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2<f32>> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2<f32>) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<glam::DVec2> for Vec2<f64> {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2<f64>> for glam::DVec2 {
    #[inline]
    fn from(v: Vec2<f64>) -> Self {
        glam::DVec2::new(v.x, v.y)
    }
}
