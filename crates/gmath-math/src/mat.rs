//! Square matrix type generic over size.
//!
//! [`Mat`] is an `N x N` matrix used for 2D/3D/4D transforms. The aliases
//! [`Mat2`], [`Mat3`] and [`Mat4`] cover the sizes graphics code needs.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 |   | x |   | m00*x + m01*y |
//! | m10 m11 | * | y | = | m10*x + m11*y |
//! ```
//!
//! The flat view returned by [`Mat::as_slice`] places element `(row, col)`
//! at offset `row * N + col`.
//!
//! # Usage
//!
//! ```rust
//! use gmath_math::Mat3;
//!
//! let m = Mat3::<f64>::from_rows([
//!     [1.0, 2.0, 3.0],
//!     [0.0, 1.0, 4.0],
//!     [5.0, 6.0, 0.0],
//! ]);
//! let inv = m.inverse().unwrap();
//! assert!((m * inv).approx_eq(&Mat3::identity(), 1e-9));
//! ```

use crate::inverse::{det_flat, gauss_jordan};
use gmath_core::{Error, Result, Scalar};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A square `N x N` matrix stored row-major.
///
/// # Example
///
/// ```rust
/// use gmath_math::Mat2;
///
/// let identity = Mat2::<f32>::identity();
/// assert_eq!(identity.transform([3.0, 4.0]), [3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat<T, const N: usize> {
    /// Matrix elements in row-major order: `m[row][col]`
    pub m: [[T; N]; N],
}

/// 2x2 matrix.
pub type Mat2<T = f32> = Mat<T, 2>;
/// 3x3 matrix.
pub type Mat3<T = f32> = Mat<T, 3>;
/// 4x4 matrix.
pub type Mat4<T = f32> = Mat<T, 4>;

impl<T: Scalar, const N: usize> Mat<T, N> {
    /// Number of rows (and columns).
    pub const SIZE: usize = N;

    /// Zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self {
            m: [[T::ZERO; N]; N],
        }
    }

    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::scale(T::ONE)
    }

    /// Uniform scale matrix (`s` on the diagonal).
    pub fn scale(s: T) -> Self {
        let mut res = Self::zero();
        for i in 0..N {
            res.m[i][i] = s;
        }
        res
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; N]; N]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from a flat row-major slice.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless `values.len() == N * N`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath_math::Mat2;
    ///
    /// let m = Mat2::<f32>::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.get(1, 0), 3.0);
    /// assert!(Mat2::<f32>::from_slice(&[1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() != N * N {
            return Err(Error::dimension_mismatch(N, values.len()));
        }
        let mut res = Self::zero();
        res.as_mut_slice().copy_from_slice(values);
        Ok(res)
    }

    /// Flat row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.m.as_flattened()
    }

    /// Mutable flat row-major view of the elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.m.as_flattened_mut()
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.m[row][col]
    }

    /// Sets element at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.m[row][col] = value;
    }

    /// Returns a row.
    #[inline]
    pub fn row(&self, i: usize) -> [T; N] {
        self.m[i]
    }

    /// Returns a column.
    pub fn col(&self, i: usize) -> [T; N] {
        let mut res = [T::ZERO; N];
        for (r, out) in res.iter_mut().enumerate() {
            *out = self.m[r][i];
        }
        res
    }

    /// Returns the transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let mut res = Self::zero();
        for r in 0..N {
            for c in 0..N {
                res.m[c][r] = self.m[r][c];
            }
        }
        res
    }

    /// Computes the determinant: cofactor expansion up to 4x4, LU elimination above.
    #[inline]
    pub fn determinant(&self) -> T {
        det_flat(self.as_slice(), N)
    }

    /// Computes the inverse with Gauss-Jordan elimination.
    ///
    /// Fails with [`Error::SingularMatrix`] if the determinant is zero or an
    /// element is not finite.
    /// See [`crate::invert`] for the elimination order.
    pub fn inverse(&self) -> Result<Self> {
        let mut work = *self;
        let mut res = Self::identity();
        gauss_jordan(N, work.as_mut_slice(), res.as_mut_slice())?;
        Ok(res)
    }

    /// Transforms a column vector by this matrix.
    pub fn transform(&self, v: [T; N]) -> [T; N] {
        let mut res = [T::ZERO; N];
        for (r, out) in res.iter_mut().enumerate() {
            let mut acc = T::ZERO;
            for (c, x) in v.iter().enumerate() {
                acc += self.m[r][c] * *x;
            }
            *out = acc;
        }
        res
    }

    /// Multiplies two matrices.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut res = Self::zero();
        for i in 0..N {
            for j in 0..N {
                let mut acc = T::ZERO;
                for k in 0..N {
                    acc += self.m[i][k] * other.m[k][j];
                }
                res.m[i][j] = acc;
            }
        }
        res
    }

    /// Returns true if every element differs from `other` by at most `eps`.
    pub fn approx_eq(&self, other: &Self, eps: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| (*a - *b).abs() <= eps)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|x| x.is_finite())
    }
}

impl<T: Scalar> Mat<T, 2> {
    /// Counter-clockwise rotation by `radians`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath_math::Mat2;
    ///
    /// let r = Mat2::<f64>::rotation(std::f64::consts::PI);
    /// let v = r.transform([1.0, 0.0]);
    /// assert!((v[0] + 1.0).abs() < 1e-12);
    /// ```
    pub fn rotation(radians: T) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        Self::from_rows([[c, -s], [s, c]])
    }
}

impl<T: Scalar, const N: usize> Default for Mat<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

// Mat * Mat
impl<T: Scalar, const N: usize> Mul for Mat<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat * scalar
impl<T: Scalar, const N: usize> Mul<T> for Mat<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        for v in self.as_mut_slice() {
            *v *= rhs;
        }
        self
    }
}

impl<T: Scalar, const N: usize> Add for Mat<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a += *b;
        }
        self
    }
}

impl<T: Scalar, const N: usize> Sub for Mat<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a -= *b;
        }
        self
    }
}

impl<T, const N: usize> Index<(usize, usize)> for Mat<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.m[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Mat<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.m[row][col]
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Mat<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.m.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}

// glam stores columns; our flat row-major array is the column-major array
// of the transpose.
macro_rules! impl_glam_interop {
    ($t:ty, $n:literal, $glam:ty) => {
        impl From<$glam> for Mat<$t, $n> {
            fn from(m: $glam) -> Self {
                let flat = m.transpose().to_cols_array();
                let mut res = Self::zero();
                res.as_mut_slice().copy_from_slice(&flat);
                res
            }
        }

        impl From<Mat<$t, $n>> for $glam {
            fn from(m: Mat<$t, $n>) -> Self {
                let mut flat = [0.0; $n * $n];
                flat.copy_from_slice(m.as_slice());
                <$glam>::from_cols_array(&flat).transpose()
            }
        }
    };
}

impl_glam_interop!(f32, 2, glam::Mat2);
impl_glam_interop!(f32, 3, glam::Mat3);
impl_glam_interop!(f32, 4, glam::Mat4);
impl_glam_interop!(f64, 2, glam::DMat2);
impl_glam_interop!(f64, 3, glam::DMat3);
impl_glam_interop!(f64, 4, glam::DMat4);
