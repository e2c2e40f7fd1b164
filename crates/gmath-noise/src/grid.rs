//! Gradient lattice for one noise octave.
//!
//! A [`GradientGrid`] holds one gradient per lattice point, stored row-major.
//! Every gradient is one of the four diagonals `(±1, ±1)`. They are left
//! unnormalized (length √2), which is the classic corner-vector scheme.

use crate::rng::SeedStream;
use gmath_core::{Error, Result, Scalar};
use gmath_math::Vec2;
use tracing::trace;

/// Lattice dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of columns (period along x)
    pub width: usize,
    /// Number of rows (period along y)
    pub height: usize,
}

impl Shape {
    /// Creates a shape.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells, or `None` on overflow.
    #[inline]
    pub fn cells(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Shape scaled by 2 in both dimensions, or `None` on overflow.
    #[inline]
    pub fn checked_double(&self) -> Option<Self> {
        Some(Self::new(self.width.checked_mul(2)?, self.height.checked_mul(2)?))
    }

    /// Checks that the shape is non-empty and its cell count fits in `usize`.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid_parameter(
                "shape",
                format!("{}x{} has no cells", self.width, self.height),
            ));
        }
        if self.cells().is_none() {
            return Err(Error::invalid_parameter(
                "shape",
                format!("{}x{} overflows the cell count", self.width, self.height),
            ));
        }
        Ok(())
    }
}

/// Gradient for each index drawn from the stream.
const GRADIENTS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// A seeded 2D lattice of diagonal gradients.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientGrid<T = f32> {
    shape: Shape,
    seed: u32,
    cells: Vec<Vec2<T>>,
}

impl<T: Scalar> GradientGrid<T> {
    /// Builds a grid, drawing from `stream` after reseeding it with `seed`.
    ///
    /// Identical `(shape, seed)` always produce identical cells, whatever
    /// state `stream` was in.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if the shape has no cells or overflows.
    pub fn build(shape: Shape, seed: u32, stream: &mut SeedStream) -> Result<Self> {
        shape.validate()?;
        Ok(Self::generate(shape, seed, stream))
    }

    /// Builds a grid with its own transient stream.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath_noise::{GradientGrid, Shape};
    ///
    /// let a = GradientGrid::<f32>::new(Shape::new(2, 2), 42).unwrap();
    /// let b = GradientGrid::<f32>::new(Shape::new(2, 2), 42).unwrap();
    /// assert_eq!(a.cells(), b.cells());
    /// ```
    pub fn new(shape: Shape, seed: u32) -> Result<Self> {
        Self::build(shape, seed, &mut SeedStream::new(seed))
    }

    /// Fills the grid. `shape` must already be validated.
    pub(crate) fn generate(shape: Shape, seed: u32, stream: &mut SeedStream) -> Self {
        let count = shape.width * shape.height;
        trace!(width = shape.width, height = shape.height, seed, "GradientGrid::generate");

        stream.reseed(seed);
        let cells = (0..count)
            .map(|_| {
                let (x, y) = GRADIENTS[stream.next_gradient_index() as usize];
                Vec2::new(T::from_f64(x), T::from_f64(y))
            })
            .collect();

        Self { shape, seed, cells }
    }

    /// Lattice dimensions.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Seed the cells were generated from.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Gradients in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Vec2<T>] {
        &self.cells
    }

    /// Gradient at lattice point `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn gradient(&self, x: usize, y: usize) -> Vec2<T> {
        assert!(
            x < self.shape.width && y < self.shape.height,
            "lattice point ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.shape.width,
            self.shape.height
        );
        self.cells[y * self.shape.width + x]
    }
}
