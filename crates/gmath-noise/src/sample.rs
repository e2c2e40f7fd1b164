//! Single-octave gradient sampling.
//!
//! [`sample_grid`] evaluates raw gradient noise at any point of the plane.
//! The grid tiles the plane: coordinates are reduced with a floored modulo,
//! so the result has period `width` along x and `height` along y.
//!
//! # Algorithm
//!
//! ```text
//!  (xi, yi) ---- top ---- (xi+1, yi)
//!      |            .          |
//!      |         (x, y)        |
//!      |                       |
//! (xi, yi+1) -- bottom -- (xi+1, yi+1)
//! ```
//!
//! Each corner contributes `dot(gradient, point - corner)`. Corner lookups
//! wrap, offsets do not. Contributions are blended with the quintic
//! [`fade`] curve: first across x (top, bottom), then across y.

use crate::grid::GradientGrid;
use gmath_core::Scalar;
use gmath_math::{fade, lerp, Vec2};

/// Evaluates gradient noise for one grid at `(x, y)`.
///
/// Total over the plane; the value is 0 at every lattice point and lies
/// roughly in `[-1, 1]` elsewhere, without a strict bound.
///
/// # Example
///
/// ```rust
/// use gmath_noise::{sample_grid, GradientGrid, Shape};
///
/// let grid = GradientGrid::<f64>::new(Shape::new(4, 4), 42).unwrap();
/// assert_eq!(sample_grid(&grid, 2.0, 3.0), 0.0);
/// let a = sample_grid(&grid, 0.3, 0.6);
/// let b = sample_grid(&grid, 4.3, -3.4);
/// assert!((a - b).abs() < 1e-9);
/// ```
pub fn sample_grid<T: Scalar>(grid: &GradientGrid<T>, x: T, y: T) -> T {
    let shape = grid.shape();
    let (w, h) = (shape.width, shape.height);

    let x = wrap(x, w);
    let y = wrap(y, h);

    let xi = x.floor().to_index();
    let yi = y.floor().to_index();
    let xf = x - x.floor();
    let yf = y - y.floor();

    let u = fade(xf);
    let v = fade(yf);

    let x1 = (xi + 1) % w;
    let y1 = (yi + 1) % h;
    let one = T::ONE;

    let top_left = grid.gradient(xi, yi).dot(Vec2::new(xf, yf));
    let bottom_left = grid.gradient(xi, y1).dot(Vec2::new(xf, yf - one));
    let bottom_right = grid.gradient(x1, y1).dot(Vec2::new(xf - one, yf - one));
    let top_right = grid.gradient(x1, yi).dot(Vec2::new(xf - one, yf));

    let top = lerp(top_left, top_right, u);
    let bottom = lerp(bottom_left, bottom_right, u);

    lerp(top, bottom, v)
}

/// Reduces `v` into `[0, period)`.
///
/// `rem_euclid` can round tiny negative inputs up to `period` itself;
/// that case maps to 0.
#[inline]
fn wrap<T: Scalar>(v: T, period: usize) -> T {
    let p = T::from_index(period);
    let r = v.rem_euclid(p);
    if r >= p { T::ZERO } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Shape;
    use approx::assert_abs_diff_eq;

    fn grid(w: usize, h: usize, seed: u32) -> GradientGrid<f64> {
        GradientGrid::new(Shape::new(w, h), seed).unwrap()
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(5.5f64, 4), 1.5);
        assert_eq!(wrap(-0.5f64, 4), 3.5);
        assert_eq!(wrap(-4.0f64, 4), 0.0);
        assert_eq!(wrap(-1e-20f32, 4), 0.0);
        assert!(wrap(-1e-7f32, 4) < 4.0);
    }

    #[test]
    fn test_zero_at_lattice_points() {
        let g = grid(4, 3, 5);
        for y in -3..6 {
            for x in -4..8 {
                assert_eq!(sample_grid(&g, x as f64, y as f64), 0.0);
            }
        }
    }

    #[test]
    fn test_periodic() {
        let g = grid(5, 3, 17);
        for i in 0..50 {
            let x = i as f64 * 0.37 - 7.0;
            let y = i as f64 * 0.21 - 4.0;
            let v = sample_grid(&g, x, y);
            assert_abs_diff_eq!(v, sample_grid(&g, x + 5.0, y), epsilon = 1e-9);
            assert_abs_diff_eq!(v, sample_grid(&g, x, y + 3.0), epsilon = 1e-9);
            assert_abs_diff_eq!(v, sample_grid(&g, x - 10.0, y - 6.0), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_single_corner_contribution() {
        // At the cell centre every corner weighs 1/4
        let g = grid(2, 2, 3);
        let expected = 0.25
            * (g.gradient(0, 0).dot(Vec2::new(0.5, 0.5))
                + g.gradient(1, 0).dot(Vec2::new(-0.5, 0.5))
                + g.gradient(0, 1).dot(Vec2::new(0.5, -0.5))
                + g.gradient(1, 1).dot(Vec2::new(-0.5, -0.5)));
        assert_abs_diff_eq!(sample_grid(&g, 0.5, 0.5), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_seam_continuity() {
        // Approaching the wrap seam from both sides gives the same value
        let g = grid(4, 4, 23);
        let eps = 1e-9;
        let left = sample_grid(&g, 4.0 - eps, 1.3);
        let right = sample_grid(&g, eps, 1.3);
        assert_abs_diff_eq!(left, right, epsilon = 1e-6);
    }

    #[test]
    fn test_bounded() {
        // Convex blend of terms each bounded by |dx| + |dy| <= 2
        let g = grid(8, 8, 99);
        for i in 0..400 {
            let v = sample_grid(&g, i as f64 * 0.113, i as f64 * 0.071);
            assert!(v.abs() <= 2.0, "value {} out of expected range", v);
        }
    }

    #[test]
    fn test_non_finite_input_does_not_panic() {
        let g = grid(4, 4, 1);
        assert!(sample_grid(&g, f64::NAN, 0.5).is_nan());
        let _ = sample_grid(&g, f64::INFINITY, 0.5);
    }

    #[test]
    fn test_f32_matches_f64() {
        let g32 = GradientGrid::<f32>::new(Shape::new(4, 4), 8).unwrap();
        let g64 = grid(4, 4, 8);
        let a = sample_grid(&g32, 1.3, 2.7) as f64;
        let b = sample_grid(&g64, 1.3, 2.7);
        assert_abs_diff_eq!(a, b, epsilon = 1e-5);
    }
}
