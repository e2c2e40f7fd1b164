//! # gmath-math
//!
//! Fixed-size vector and matrix algebra for graphics-adjacent code.
//!
//! - [`Vec2`] - 2D vectors (gradients, lattice offsets)
//! - [`Mat`] - Square `N x N` matrices, with [`Mat2`], [`Mat3`], [`Mat4`] aliases
//! - [`invert`] - Gauss-Jordan inversion over flat row-major buffers
//! - Interpolation utilities ([`lerp`], [`fade`])
//!
//! # Design
//!
//! All matrices are stored **row-major** and indexed `(row, col)`, which
//! maps to flat offset `row * N + col`. The inverter is written once over
//! flat buffers and shared by every matrix size.
//!
//! # Usage
//!
//! ```rust
//! use gmath_math::Mat2;
//!
//! let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
//! assert_eq!(m.determinant(), -2.0);
//!
//! let inv = m.inverse().unwrap();
//! assert_eq!(inv, Mat2::from_rows([[-2.0, 1.0], [1.5, -0.5]]));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop with the SIMD math types used by renderers
//! - `gmath-core` - Error and scalar types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod inverse;
mod mat;
mod vec2;

pub use interp::*;
pub use inverse::{determinant, invert};
pub use mat::*;
pub use vec2::*;

pub use gmath_core::{Error, Result, Scalar};
