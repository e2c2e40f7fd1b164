//! CLI command implementations

pub mod invert;
pub mod noise;

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `-v`. With a log file, the returned guard must be
/// held until exit so buffered lines are flushed.
pub fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let stderr_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let file_layer = fmt::layer().with_ansi(false).with_writer(writer);

            Registry::default()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            Registry::default().with(filter).with(stderr_layer).try_init()?;
            Ok(None)
        }
    }
}

/// Format one row of numbers with fixed precision, right-aligned.
pub fn format_row(values: &[f64], precision: usize) -> String {
    let width = precision + 6;
    values
        .iter()
        .map(|v| format!("{:>width$.precision$}", v, width = width, precision = precision))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row() {
        assert_eq!(format_row(&[1.0, -0.5], 2), "    1.00    -0.50");
        assert_eq!(format_row(&[], 3), "");
    }
}
