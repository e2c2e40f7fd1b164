//! Noise command
//!
//! Renders a fractal noise map to stdout as numbers or an ASCII ramp.

use crate::NoiseArgs;
use anyhow::{Context, Result};
use gmath_math::saturate;
use gmath_noise::{NoiseConfig, PerlinNoise, Shape};
use tracing::{info, trace};

/// Characters from dark to bright.
const RAMP: &[u8] = b" .:-=+*#%@";

pub fn run(args: NoiseArgs, verbose: u8) -> Result<()> {
    trace!(seed = args.seed, octaves = args.octaves, persistence = args.persistence, "noise::run");

    let config = NoiseConfig::default()
        .with_seed(args.seed)
        .with_shape(Shape::new(args.width, args.height))
        .with_octaves(args.octaves)
        .with_persistence(args.persistence);

    let noise: PerlinNoise<f64> = config
        .build()
        .with_context(|| format!("Invalid noise parameters: {:?}", config))?;

    info!(cols = args.cols, rows = args.rows, scale = args.scale, "Rendering noise map");

    if verbose > 0 {
        println!(
            "seed {} | {}x{} base | {} octave(s) | persistence {}",
            noise.seed(),
            noise.shape().width,
            noise.shape().height,
            noise.octaves(),
            noise.persistence()
        );
    }

    let normalized = args.normalized || args.ascii;
    let map = if normalized {
        noise.render_normalized(args.cols, args.rows, args.scale)
    } else {
        noise.render(args.cols, args.rows, args.scale)
    };

    if args.cols == 0 {
        return Ok(());
    }
    for row in map.chunks(args.cols) {
        if args.ascii {
            println!("{}", ascii_row(row));
        } else {
            println!("{}", super::format_row(row, 4));
        }
    }

    Ok(())
}

/// Map normalized values to ramp characters.
fn ascii_row(values: &[f64]) -> String {
    let last = RAMP.len() - 1;
    values
        .iter()
        .map(|&v| {
            let idx = (saturate(v) * last as f64).round() as usize;
            RAMP[idx.min(last)] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_row() {
        assert_eq!(ascii_row(&[0.0, 1.0, -3.0, 5.0]), " @ @");
        assert_eq!(ascii_row(&[0.5]), "+");
    }
}
