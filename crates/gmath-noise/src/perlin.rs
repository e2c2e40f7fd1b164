//! Multi-octave fractal gradient noise.
//!
//! [`PerlinNoise`] owns one [`GradientGrid`] per octave. Octave `i + 1` has
//! twice the resolution of octave `i`, and its seed is derived from octave
//! `i`'s seed with [`derive_next_seed`]. All grids are generated eagerly at
//! construction; sampling is read-only.
//!
//! # Fractal sum
//!
//! ```text
//! total = Σ sample_grid(grid[i], x * 2^i, y * 2^i) * persistence^i
//! value = total / Σ persistence^i
//! ```
//!
//! Summation stops early once the next amplitude drops to `1e-5` or below.
//!
//! # Usage
//!
//! ```rust
//! use gmath_noise::{PerlinNoise, Shape};
//!
//! let noise = PerlinNoise::<f64>::new(7, Shape::new(4, 4), 3, 0.5).unwrap();
//! assert_eq!(noise.grids().len(), 3);
//! assert_eq!(noise.grids()[2].shape(), Shape::new(16, 16));
//!
//! let n = noise.sample_normalized(0.3, 0.8);
//! assert!(n > -0.5 && n < 1.5);
//! ```

use crate::config::NoiseConfig;
use crate::grid::{GradientGrid, Shape};
use crate::rng::{derive_next_seed, SeedStream};
use crate::sample::sample_grid;
use gmath_core::{Error, Result, Scalar};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Amplitude at or below which further octaves are skipped.
pub const AMPLITUDE_MIN: f64 = 1e-5;

/// Frequency growth between octaves.
pub const FREQUENCY_MULTIPLIER: f64 = 2.0;

/// Base shape used by [`PerlinNoise::default`].
pub const DEFAULT_SHAPE: Shape = Shape::new(16, 16);

/// Seed used by [`PerlinNoise::default`].
pub const DEFAULT_SEED: u32 = 42;

/// Seeded 2D fractal gradient noise.
///
/// Immutable after construction, so a single engine can be sampled from
/// many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct PerlinNoise<T = f32> {
    seed: u32,
    octaves: u32,
    persistence: T,
    grids: Vec<GradientGrid<T>>,
}

/// Single-precision noise.
pub type PerlinNoisef = PerlinNoise<f32>;
/// Double-precision noise.
pub type PerlinNoised = PerlinNoise<f64>;

impl<T: Scalar> PerlinNoise<T> {
    /// Creates a noise engine and generates every octave grid.
    ///
    /// Grids are built eagerly, including octaves whose amplitude is already
    /// below the early-exit threshold. Octave `i` holds `4^i` times the base
    /// cell count, so memory grows as `4^octaves`.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed of the first octave
    /// * `shape` - Lattice shape of the first octave
    /// * `octaves` - Number of octaves, at least 1
    /// * `persistence` - Amplitude decay per octave, within `[0, 1]`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `octaves == 0`, `persistence` is
    /// outside `[0, 1]` (or NaN), or any octave's shape is empty or overflows.
    pub fn new(seed: u32, shape: Shape, octaves: u32, persistence: T) -> Result<Self> {
        trace!(seed, octaves, width = shape.width, height = shape.height, "PerlinNoise::new");

        if octaves == 0 {
            return Err(Error::invalid_parameter("octaves", "must be at least 1"));
        }
        if !(persistence >= T::ZERO && persistence <= T::ONE) {
            return Err(Error::invalid_parameter(
                "persistence",
                format!("{} is not within [0, 1]", persistence),
            ));
        }

        let shapes = octave_shapes(shape, octaves)?;
        let grids = generate_grids(seed, &shapes);

        Ok(Self {
            seed,
            octaves,
            persistence,
            grids,
        })
    }

    /// Single-octave noise over `shape`.
    pub fn with_shape(seed: u32, shape: Shape) -> Result<Self> {
        Self::new(seed, shape, 1, T::ZERO)
    }

    /// Creates a noise engine from a [`NoiseConfig`].
    pub fn from_config(config: &NoiseConfig) -> Result<Self> {
        Self::new(
            config.seed,
            config.shape,
            config.octaves,
            T::from_f64(config.persistence),
        )
    }

    /// Seed of the first octave.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Number of octaves.
    #[inline]
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Amplitude decay per octave.
    #[inline]
    pub fn persistence(&self) -> T {
        self.persistence
    }

    /// Lattice shape of the first octave.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.grids[0].shape()
    }

    /// Octave grids, coarsest first.
    #[inline]
    pub fn grids(&self) -> &[GradientGrid<T>] {
        &self.grids
    }

    /// Fractal noise at `(x, y)`, nominally in `[-1, 1]`.
    ///
    /// With one octave or zero persistence this is exactly
    /// [`sample_grid`] on the first grid.
    pub fn sample(&self, x: T, y: T) -> T {
        if self.octaves == 1 || self.persistence == T::ZERO {
            return sample_grid(&self.grids[0], x, y);
        }

        let amplitude_min = T::from_f64(AMPLITUDE_MIN);
        let frequency_multiplier = T::from_f64(FREQUENCY_MULTIPLIER);

        let mut total = T::ZERO;
        let mut frequency = T::ONE;
        let mut amplitude = T::ONE;
        let mut max_amplitude = T::ZERO;

        for grid in &self.grids {
            total += sample_grid(grid, x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;

            amplitude *= self.persistence;
            if amplitude <= amplitude_min {
                break;
            }
            frequency *= frequency_multiplier;
        }

        if max_amplitude == T::ZERO {
            return T::ZERO;
        }
        total / max_amplitude
    }

    /// Noise remapped from `[-1, 1]` to `[0, 1]` as `(v + 1) / 2`.
    ///
    /// Not clamped: values slightly outside the nominal range stay outside.
    #[inline]
    pub fn sample_normalized(&self, x: T, y: T) -> T {
        (self.sample(x, y) + T::ONE) * T::from_f64(0.5)
    }

    /// Samples a `cols x rows` lattice, row-major.
    ///
    /// Cell `(col, row)` holds `sample(col * scale, row * scale)`.
    pub fn render(&self, cols: usize, rows: usize, scale: T) -> Vec<T> {
        self.render_with(cols, rows, scale, |x, y| self.sample(x, y))
    }

    /// Like [`render`](Self::render) with [`sample_normalized`](Self::sample_normalized).
    pub fn render_normalized(&self, cols: usize, rows: usize, scale: T) -> Vec<T> {
        self.render_with(cols, rows, scale, |x, y| self.sample_normalized(x, y))
    }

    #[cfg(feature = "parallel")]
    fn render_with<F>(&self, cols: usize, rows: usize, scale: T, f: F) -> Vec<T>
    where
        F: Fn(T, T) -> T + Sync,
    {
        trace!(cols, rows, "PerlinNoise::render");
        if cols == 0 || rows == 0 {
            return Vec::new();
        }
        let mut out = vec![T::ZERO; cols * rows];

        out.par_chunks_mut(cols).enumerate().for_each(|(row, line)| {
            let y = T::from_index(row) * scale;
            for (col, v) in line.iter_mut().enumerate() {
                *v = f(T::from_index(col) * scale, y);
            }
        });

        out
    }

    #[cfg(not(feature = "parallel"))]
    fn render_with<F>(&self, cols: usize, rows: usize, scale: T, f: F) -> Vec<T>
    where
        F: Fn(T, T) -> T,
    {
        trace!(cols, rows, "PerlinNoise::render");
        let mut out = Vec::with_capacity(cols * rows);

        for row in 0..rows {
            let y = T::from_index(row) * scale;
            for col in 0..cols {
                out.push(f(T::from_index(col) * scale, y));
            }
        }

        out
    }
}

impl<T: Scalar> Default for PerlinNoise<T> {
    /// Seed 42, 16x16 lattice, one octave, zero persistence.
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            octaves: 1,
            persistence: T::ZERO,
            grids: generate_grids(DEFAULT_SEED, &[DEFAULT_SHAPE]),
        }
    }
}

/// Shapes of every octave, doubling from `base`.
fn octave_shapes(base: Shape, octaves: u32) -> Result<Vec<Shape>> {
    base.validate()?;
    let mut shapes = vec![base];
    for _ in 1..octaves {
        let last = shapes[shapes.len() - 1];
        let next = last.checked_double().ok_or_else(|| {
            Error::invalid_parameter(
                "octaves",
                format!("{} octaves overflow a {}x{} base shape", octaves, base.width, base.height),
            )
        })?;
        next.validate()?;
        shapes.push(next);
    }
    Ok(shapes)
}

/// Generates one grid per validated shape, chaining seeds octave to octave.
fn generate_grids<T: Scalar>(seed: u32, shapes: &[Shape]) -> Vec<GradientGrid<T>> {
    let mut stream = SeedStream::new(seed);
    let mut grids = Vec::with_capacity(shapes.len());
    let mut octave_seed = seed;

    for (i, &shape) in shapes.iter().enumerate() {
        if i > 0 {
            octave_seed = derive_next_seed(&mut stream, octave_seed);
        }
        debug!(octave = i, seed = octave_seed, width = shape.width, height = shape.height, "generating octave");
        grids.push(GradientGrid::generate(shape, octave_seed, &mut stream));
    }

    grids
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_zero_octaves() {
        let err = PerlinNoise::<f32>::new(1, Shape::new(4, 4), 0, 0.5).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("octaves"));
    }

    #[test]
    fn test_rejects_bad_persistence() {
        for p in [-0.1f64, 1.5, f64::NAN] {
            let err = PerlinNoise::<f64>::new(1, Shape::new(4, 4), 2, p).unwrap_err();
            assert!(err.to_string().contains("persistence"));
        }
        assert!(PerlinNoise::<f64>::new(1, Shape::new(4, 4), 2, 0.0).is_ok());
        assert!(PerlinNoise::<f64>::new(1, Shape::new(4, 4), 2, 1.0).is_ok());
    }

    #[test]
    fn test_rejects_overflowing_shapes() {
        let err = PerlinNoise::<f32>::new(1, Shape::new(usize::MAX / 2, 1), 3, 0.5).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_octave_shapes_double() {
        let noise = PerlinNoise::<f32>::new(3, Shape::new(3, 2), 4, 0.5).unwrap();
        let shapes: Vec<Shape> = noise.grids().iter().map(|g| g.shape()).collect();
        assert_eq!(
            shapes,
            vec![Shape::new(3, 2), Shape::new(6, 4), Shape::new(12, 8), Shape::new(24, 16)]
        );
        assert_eq!(noise.shape(), Shape::new(3, 2));
    }

    #[test]
    fn test_unreachable_octaves_still_generated() {
        // 0.01^3 is below the early-exit threshold, yet all five grids exist
        let noise = PerlinNoise::<f64>::new(8, Shape::new(2, 3), 5, 0.01).unwrap();
        let cells: Vec<usize> = noise.grids().iter().map(|g| g.cells().len()).collect();
        assert_eq!(cells, vec![6, 24, 96, 384, 1536]);
    }

    #[test]
    fn test_octave_seed_chain() {
        let noise = PerlinNoise::<f32>::new(1234, Shape::new(2, 2), 3, 0.5).unwrap();
        let mut stream = SeedStream::new(0);
        let s1 = derive_next_seed(&mut stream, 1234);
        let s2 = derive_next_seed(&mut stream, s1);
        let seeds: Vec<u32> = noise.grids().iter().map(|g| g.seed()).collect();
        assert_eq!(seeds, vec![1234, s1, s2]);

        let expected = GradientGrid::<f32>::new(Shape::new(4, 4), s1).unwrap();
        assert_eq!(noise.grids()[1], expected);
    }

    #[test]
    fn test_single_octave_is_raw_sample() {
        let noise = PerlinNoise::<f64>::new(5, Shape::new(8, 8), 1, 0.7).unwrap();
        for i in 0..20 {
            let (x, y) = (i as f64 * 0.43, i as f64 * -0.29);
            assert_eq!(noise.sample(x, y), sample_grid(&noise.grids()[0], x, y));
        }
    }

    #[test]
    fn test_zero_persistence_is_raw_sample() {
        let noise = PerlinNoise::<f64>::new(5, Shape::new(8, 8), 6, 0.0).unwrap();
        assert_eq!(noise.sample(1.7, 2.2), sample_grid(&noise.grids()[0], 1.7, 2.2));
    }

    #[test]
    fn test_fractal_sum() {
        let p = 0.5f64;
        let noise = PerlinNoise::<f64>::new(9, Shape::new(4, 4), 3, p).unwrap();
        let (x, y) = (1.3, 0.4);
        let g = noise.grids();
        let expected = (sample_grid(&g[0], x, y)
            + sample_grid(&g[1], x * 2.0, y * 2.0) * p
            + sample_grid(&g[2], x * 4.0, y * 4.0) * p * p)
            / (1.0 + p + p * p);
        assert_relative_eq!(noise.sample(x, y), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_early_exit() {
        // amplitude 1e-3 after octave 0, 1e-6 after octave 1: stop there
        let p = 1e-3f64;
        let noise = PerlinNoise::<f64>::new(21, Shape::new(4, 4), 6, p).unwrap();
        let (x, y) = (0.7, 2.9);
        let g = noise.grids();
        let expected =
            (sample_grid(&g[0], x, y) + sample_grid(&g[1], x * 2.0, y * 2.0) * p) / (1.0 + p);
        assert_relative_eq!(noise.sample(x, y), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized() {
        let noise = PerlinNoise::<f64>::new(2, Shape::new(4, 4), 2, 0.5).unwrap();
        let (x, y) = (0.25, 3.75);
        assert_relative_eq!(
            noise.sample_normalized(x, y),
            (noise.sample(x, y) + 1.0) * 0.5,
            epsilon = 1e-15
        );
        assert_eq!(noise.sample_normalized(1.0, 1.0), 0.5);
    }

    #[test]
    fn test_default() {
        let noise = PerlinNoise::<f32>::default();
        assert_eq!(noise.seed(), 42);
        assert_eq!(noise.octaves(), 1);
        assert_eq!(noise.persistence(), 0.0);
        assert_eq!(noise.shape(), DEFAULT_SHAPE);
        assert_eq!(noise, PerlinNoise::new(42, DEFAULT_SHAPE, 1, 0.0).unwrap());
    }

    #[test]
    fn test_render_layout() {
        let noise = PerlinNoise::<f32>::new(8, Shape::new(4, 4), 2, 0.5).unwrap();
        let map = noise.render(5, 3, 0.37);
        assert_eq!(map.len(), 15);
        assert_eq!(map[2 * 5 + 4], noise.sample(4.0 * 0.37, 2.0 * 0.37));
        assert!(noise.render(0, 3, 1.0).is_empty());

        let norm = noise.render_normalized(5, 3, 0.37);
        assert_eq!(norm[7], noise.sample_normalized(2.0 * 0.37, 1.0 * 0.37));
    }
}
