//! # gmath-core
//!
//! Core types shared by the gmath crates.
//!
//! - [`Error`], [`Result`] - Error taxonomy for inversion and noise construction
//! - [`Scalar`] - Floating-point abstraction implemented for `f32` and `f64`
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other gmath crates build on it:
//!
//! ```text
//! gmath-core (this crate)
//!    ^
//!    |
//!    +-- gmath-math (vectors, matrices, inversion)
//!    +-- gmath-noise (gradient grids, fractal noise)
//!    +-- gmath-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;

pub use error::*;
pub use scalar::Scalar;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use gmath_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::Scalar;
}
