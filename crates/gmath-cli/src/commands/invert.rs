//! Invert command
//!
//! Inverts a square matrix passed as row-major values on the command line.

use crate::InvertArgs;
use anyhow::{bail, Context, Result};
use gmath_math::{determinant, invert};
use tracing::{info, trace};

pub fn run(args: InvertArgs, verbose: u8) -> Result<()> {
    trace!(count = args.values.len(), precision = args.precision, "invert::run");

    let size = square_size(args.values.len())?;
    info!(size, "Inverting matrix");

    if verbose > 0 {
        let det = determinant(&args.values, size)?;
        println!("{}x{} matrix, determinant {}", size, size, det);
    }

    let inverse = invert(&args.values, size)
        .with_context(|| format!("Cannot invert {}x{} matrix", size, size))?;

    for row in inverse.chunks(size) {
        println!("{}", super::format_row(row, args.precision));
    }

    Ok(())
}

/// Side length of a square matrix with `len` elements.
fn square_size(len: usize) -> Result<usize> {
    let size = len.isqrt();
    if size == 0 || size * size != len {
        bail!("{} values do not form a square matrix", len);
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_size() {
        assert_eq!(square_size(4).unwrap(), 2);
        assert_eq!(square_size(9).unwrap(), 3);
        assert_eq!(square_size(16).unwrap(), 4);
        assert_eq!(square_size(1).unwrap(), 1);
        assert!(square_size(8).is_err());
        assert!(square_size(0).is_err());
    }
}
