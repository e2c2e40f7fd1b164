//! Gauss-Jordan matrix inversion.
//!
//! The elimination is written once over flat row-major buffers and shared
//! by [`invert`] (runtime size) and [`Mat::inverse`](crate::Mat::inverse)
//! (compile-time size).
//!
//! # Algorithm
//!
//! A working copy `C` of the input is reduced to the identity while the
//! same row operations are applied to `R`, which starts as the identity.
//! For each diagonal index `d`:
//!
//! 1. If `C[d,d] == 0`, swap row `d` with the first row below it that has a
//!    nonzero entry in column `d`. No such row means the matrix is singular.
//! 2. If `C[d,d] != 1`, scale row `d` by `1 / C[d,d]`.
//! 3. For every other row `y` with `C[y,d] != 0`, add `-C[y,d]` times row `d`.
//!
//! Pivot selection is first-nonzero, not largest-magnitude. Results are
//! pinned to this order.
//!
//! # Usage
//!
//! ```rust
//! use gmath_math::invert;
//!
//! let inv = invert(&[1.0f64, 2.0, 3.0, 4.0], 2).unwrap();
//! assert_eq!(inv, vec![-2.0, 1.0, 1.5, -0.5]);
//! ```

use gmath_core::{Error, Result, Scalar};
use tracing::{debug, trace};

/// Inverts a square matrix given as a flat row-major buffer.
///
/// # Arguments
///
/// * `values` - `size * size` elements, `(row, col)` at `row * size + col`
/// * `size` - Matrix dimension
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] if `size == 0` or `values.len() != size * size`
/// - [`Error::SingularMatrix`] if the determinant is zero, any element is
///   NaN or infinite, or no pivot exists
pub fn invert<T: Scalar>(values: &[T], size: usize) -> Result<Vec<T>> {
    check_shape(values, size)?;
    let mut work = values.to_vec();
    let mut res = identity_flat(size);
    gauss_jordan(size, &mut work, &mut res)?;
    Ok(res)
}

/// Determinant of a square matrix given as a flat row-major buffer.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if `size == 0` or `values.len() != size * size`.
///
/// # Example
///
/// ```rust
/// use gmath_math::determinant;
///
/// assert_eq!(determinant(&[1.0f32, 2.0, 3.0, 4.0], 2).unwrap(), -2.0);
/// assert!(determinant(&[1.0f32, 2.0, 3.0], 2).is_err());
/// ```
pub fn determinant<T: Scalar>(values: &[T], size: usize) -> Result<T> {
    check_shape(values, size)?;
    Ok(det_flat(values, size))
}

fn check_shape<T>(values: &[T], size: usize) -> Result<()> {
    if size == 0 || size.checked_mul(size) != Some(values.len()) {
        return Err(Error::dimension_mismatch(size, values.len()));
    }
    Ok(())
}

fn identity_flat<T: Scalar>(size: usize) -> Vec<T> {
    let mut res = vec![T::ZERO; size * size];
    for i in 0..size {
        res[i * size + i] = T::ONE;
    }
    res
}

/// Largest size handled by cofactor expansion. Beyond it the O(N!) cost
/// dominates, so larger matrices go through [`det_elimination`].
const COFACTOR_MAX: usize = 4;

/// Determinant of a flat row-major matrix.
pub(crate) fn det_flat<T: Scalar>(values: &[T], size: usize) -> T {
    if size > COFACTOR_MAX {
        det_elimination(values, size)
    } else {
        det_cofactor(values, size)
    }
}

/// Cofactor expansion along the first row.
fn det_cofactor<T: Scalar>(values: &[T], size: usize) -> T {
    match size {
        0 => T::ONE,
        1 => values[0],
        2 => values[0] * values[3] - values[1] * values[2],
        _ => {
            let n = size - 1;
            let mut minor = vec![T::ZERO; n * n];
            let mut det = T::ZERO;
            for col in 0..size {
                let a = values[col];
                if a == T::ZERO {
                    continue;
                }
                let mut k = 0;
                for r in 1..size {
                    for c in (0..size).filter(|&c| c != col) {
                        minor[k] = values[r * size + c];
                        k += 1;
                    }
                }
                let term = a * det_cofactor(&minor, n);
                if col % 2 == 0 {
                    det += term;
                } else {
                    det -= term;
                }
            }
            det
        }
    }
}

/// Product of the pivots of a partially pivoted LU elimination, O(N^3).
fn det_elimination<T: Scalar>(values: &[T], size: usize) -> T {
    let mut m = values.to_vec();
    let mut det = T::ONE;
    for diag in 0..size {
        let mut best = diag;
        for y in diag + 1..size {
            if m[y * size + diag].abs() > m[best * size + diag].abs() {
                best = y;
            }
        }
        let pivot = m[best * size + diag];
        if pivot == T::ZERO {
            return T::ZERO;
        }
        if best != diag {
            for c in 0..size {
                m.swap(diag * size + c, best * size + c);
            }
            det = -det;
        }
        det *= pivot;
        for y in diag + 1..size {
            let factor = m[y * size + diag] / pivot;
            if factor != T::ZERO {
                for c in diag..size {
                    let v = m[diag * size + c];
                    m[y * size + c] -= factor * v;
                }
            }
        }
    }
    det
}

/// Rejects zero-determinant and non-finite input, then reduces `work` to the identity,
/// leaving the inverse in `res`.
///
/// `res` must hold the identity on entry.
pub(crate) fn gauss_jordan<T: Scalar>(size: usize, work: &mut [T], res: &mut [T]) -> Result<()> {
    trace!(size, "gauss_jordan");
    if !work.iter().all(|&v| v.is_finite()) {
        debug!(size, "non-finite element");
        return Err(Error::singular(size));
    }
    if det_flat(work, size) == T::ZERO {
        debug!(size, "zero determinant");
        return Err(Error::singular(size));
    }
    eliminate(size, work, res)
}

fn eliminate<T: Scalar>(size: usize, work: &mut [T], res: &mut [T]) -> Result<()> {
    for diag in 0..size {
        let mut pivot = work[diag * size + diag];
        if pivot == T::ZERO {
            let Some(row) = (diag + 1..size).find(|&y| work[y * size + diag] != T::ZERO) else {
                debug!(size, diag, "no pivot in column");
                return Err(Error::singular(size));
            };
            debug!(diag, row, "swapping pivot row");
            swap_rows(size, work, res, diag, row);
            pivot = work[diag * size + diag];
        }

        if pivot != T::ONE {
            scale_row(size, work, res, diag, T::ONE / pivot);
        }

        // Rows above the pivot, then rows below
        for y in (0..diag).rev().chain(diag + 1..size) {
            let factor = work[y * size + diag];
            if factor != T::ZERO {
                add_row(size, work, res, y, diag, -factor);
            }
        }
    }
    Ok(())
}

fn scale_row<T: Scalar>(size: usize, work: &mut [T], res: &mut [T], row: usize, mult: T) {
    let start = row * size;
    for i in start..start + size {
        work[i] *= mult;
        res[i] *= mult;
    }
}

/// `row += src * mult` in both matrices.
fn add_row<T: Scalar>(size: usize, work: &mut [T], res: &mut [T], row: usize, src: usize, mult: T) {
    let (dst, from) = (row * size, src * size);
    for i in 0..size {
        let w = work[from + i];
        work[dst + i] += w * mult;
        let r = res[from + i];
        res[dst + i] += r * mult;
    }
}

fn swap_rows<T: Scalar>(size: usize, work: &mut [T], res: &mut [T], a: usize, b: usize) {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    for m in [work, res] {
        let (head, tail) = m.split_at_mut(hi * size);
        head[lo * size..(lo + 1) * size].swap_with_slice(&mut tail[..size]);
    }
}
