//! Error types for gmath operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers every failure the toolkit reports:
//! - Singular input to the matrix inverter
//! - Matrix data whose length does not match the declared size
//! - Invalid noise construction parameters (octaves, persistence, shape)
//!
//! All failures are returned synchronously; there are no partial results.
//!
//! # Usage
//!
//! ```rust
//! use gmath_core::{Error, Result};
//!
//! fn check_octaves(octaves: u32) -> Result<()> {
//!     if octaves == 0 {
//!         return Err(Error::invalid_parameter("octaves", "must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_octaves(0).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during gmath operations.
///
/// # Categories
///
/// - **Data errors**: [`SingularMatrix`](Error::SingularMatrix)
/// - **Contract errors**: [`DimensionMismatch`](Error::DimensionMismatch),
///   [`InvalidParameter`](Error::InvalidParameter)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The matrix has no inverse.
    ///
    /// Reported when the determinant is exactly zero, or when the pivot
    /// search finds a column with no nonzero entry on or below the diagonal.
    #[error("{size}x{size} matrix is singular and cannot be inverted")]
    SingularMatrix {
        /// Matrix dimension
        size: usize,
    },

    /// Flat matrix data does not hold `size * size` values.
    ///
    /// Also returned for `size == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath_core::Error;
    ///
    /// let err = Error::dimension_mismatch(3, 8);
    /// assert!(err.to_string().contains("3x3"));
    /// ```
    #[error("matrix data of length {len} does not match a {size}x{size} matrix")]
    DimensionMismatch {
        /// Declared matrix dimension
        size: usize,
        /// Actual number of values supplied
        len: usize,
    },

    /// A construction parameter is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular(size: usize) -> Self {
        Self::SingularMatrix { size }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(size: usize, len: usize) -> Self {
        Self::DimensionMismatch { size, len }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the offending parameter
    /// * `reason` - Human readable description of the constraint
    #[inline]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the matrix was singular.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }

    /// Returns `true` for caller contract violations (bad sizes or parameters).
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::DimensionMismatch { .. }
        )
    }
}
