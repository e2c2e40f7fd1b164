//! gmath - matrix inversion and procedural noise from the command line

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "gmath")]
#[command(author, version, about = "Matrix inversion and fractal noise toolkit")]
#[command(long_about = "
Small numeric toolkit: Gauss-Jordan matrix inversion and seeded
multi-octave gradient noise.

Examples:
  gmath invert 1 2 3 4                      # Invert a 2x2 matrix (row-major)
  gmath invert -p 3 2 0 0 0 1 0 1 0 3       # 3x3, three decimals
  gmath noise --seed 42 --octaves 4 --persistence 0.5
  gmath noise --cols 64 --rows 32 --scale 0.125 --ascii
  RUST_LOG=gmath_noise=debug gmath noise --octaves 3 --persistence 0.5
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Invert a square matrix given in row-major order
    #[command(visible_alias = "inv")]
    Invert(InvertArgs),

    /// Render a fractal noise map
    #[command(visible_alias = "n")]
    Noise(NoiseArgs),
}

/// Arguments for the `invert` command.
#[derive(Args)]
#[command(allow_negative_numbers = true)]
struct InvertArgs {
    /// Matrix elements, row-major; the count must be a perfect square
    #[arg(required = true)]
    values: Vec<f64>,

    /// Decimal places to print
    #[arg(short, long, default_value = "6")]
    precision: usize,
}

/// Arguments for the `noise` command.
#[derive(Args)]
struct NoiseArgs {
    /// Seed of the first octave
    #[arg(short, long, default_value = "42")]
    seed: u32,

    /// Lattice width of the first octave
    #[arg(long, default_value = "16")]
    width: usize,

    /// Lattice height of the first octave
    #[arg(long, default_value = "16")]
    height: usize,

    /// Number of octaves
    #[arg(short, long, default_value = "1")]
    octaves: u32,

    /// Amplitude decay per octave, within [0, 1]
    #[arg(short, long, default_value = "0.0")]
    persistence: f64,

    /// Output columns
    #[arg(long, default_value = "16")]
    cols: usize,

    /// Output rows
    #[arg(long, default_value = "16")]
    rows: usize,

    /// Distance between samples in lattice units
    #[arg(long, default_value = "0.25")]
    scale: f64,

    /// Map values from [-1, 1] to [0, 1]
    #[arg(short, long)]
    normalized: bool,

    /// Draw with an ASCII ramp instead of numbers
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = commands::init_logging(cli.verbose, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Invert(args) => commands::invert::run(args, cli.verbose),
        Commands::Noise(args) => commands::noise::run(args, cli.verbose),
    }
}
