//! # gmath-noise
//!
//! Seeded 2D fractal gradient noise.
//!
//! # Modules
//!
//! - [`rng`] - Explicit seed stream used for grid generation and seed derivation
//! - [`grid`] - [`GradientGrid`]: one lattice of diagonal gradients
//! - [`sample`] - [`sample_grid`]: single-octave sampling with periodic wrap
//! - [`perlin`] - [`PerlinNoise`]: multi-octave composition
//! - [`config`] - [`NoiseConfig`]: construction parameters
//!
//! # Example
//!
//! ```rust
//! use gmath_noise::{PerlinNoise, Shape};
//!
//! let noise = PerlinNoise::<f32>::new(42, Shape::new(8, 8), 4, 0.5).unwrap();
//! let v = noise.sample(1.25, 3.5);
//! assert_eq!(v, noise.sample(1.25, 3.5));
//! ```
//!
//! # Determinism
//!
//! Grids are generated eagerly at construction from an explicit
//! [`SeedStream`]; no global RNG state is touched. After construction an
//! engine is immutable and can be shared between threads.
//!
//! # Feature Flags
//!
//! - `parallel` - Render noise maps with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod grid;
pub mod perlin;
pub mod rng;
pub mod sample;

pub use config::NoiseConfig;
pub use grid::{GradientGrid, Shape};
pub use perlin::{PerlinNoise, PerlinNoised, PerlinNoisef};
pub use rng::{derive_next_seed, SeedStream};
pub use sample::sample_grid;

pub use gmath_core::{Error, Result, Scalar};
