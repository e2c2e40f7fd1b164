//! Noise construction parameters.
//!
//! [`NoiseConfig`] gathers the parameters of [`PerlinNoise::new`] so they
//! can be assembled piecewise (for example from CLI flags) and validated
//! once at build time.
//!
//! # Example
//!
//! ```rust
//! use gmath_noise::{NoiseConfig, Shape};
//!
//! let noise = NoiseConfig::default()
//!     .with_seed(7)
//!     .with_shape(Shape::new(8, 8))
//!     .with_octaves(4)
//!     .with_persistence(0.5)
//!     .build::<f32>()
//!     .unwrap();
//! assert_eq!(noise.octaves(), 4);
//! ```

use crate::grid::Shape;
use crate::perlin::{PerlinNoise, DEFAULT_SEED, DEFAULT_SHAPE};
use gmath_core::{Result, Scalar};

/// Parameters for a [`PerlinNoise`] engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    /// Seed of the first octave
    pub seed: u32,
    /// Lattice shape of the first octave
    pub shape: Shape,
    /// Number of octaves (at least 1)
    pub octaves: u32,
    /// Amplitude decay per octave, within [0, 1]
    pub persistence: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            shape: DEFAULT_SHAPE,
            octaves: 1,
            persistence: 0.0,
        }
    }
}

impl NoiseConfig {
    /// Set the first-octave seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Set the first-octave lattice shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the octave count.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Set the persistence.
    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Validates the parameters and generates the engine.
    ///
    /// Errors are those of [`PerlinNoise::new`].
    pub fn build<T: Scalar>(&self) -> Result<PerlinNoise<T>> {
        PerlinNoise::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_engine_default() {
        let from_config = NoiseConfig::default().build::<f64>().unwrap();
        assert_eq!(from_config, PerlinNoise::<f64>::default());
    }

    #[test]
    fn test_build_validates() {
        let bad = NoiseConfig::default().with_octaves(0);
        assert!(bad.build::<f32>().unwrap_err().is_invalid_parameter());

        let bad = NoiseConfig::default().with_octaves(2).with_persistence(2.0);
        assert!(bad.build::<f32>().is_err());

        let bad = NoiseConfig::default().with_shape(Shape::new(4, 0));
        assert!(bad.build::<f32>().is_err());
    }

    #[test]
    fn test_setters() {
        let cfg = NoiseConfig::default()
            .with_seed(1)
            .with_shape(Shape::new(2, 3))
            .with_octaves(5)
            .with_persistence(0.25);
        assert_eq!(cfg.seed, 1);
        assert_eq!(cfg.shape, Shape::new(2, 3));
        assert_eq!(cfg.octaves, 5);
        assert_eq!(cfg.persistence, 0.25);

        let noise = cfg.build::<f64>().unwrap();
        assert_eq!(noise.seed(), 1);
        assert_eq!(noise.persistence(), 0.25);
    }
}
