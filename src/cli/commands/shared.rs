//! Shared components for CLI commands
//!
//! This module contains common utilities used across the CLI command
//! implementations: logging setup and output-file fan-out.

use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Set up structured logging for a command
///
/// Respects `RUST_LOG` when set; otherwise filters to the crate at the
/// level derived from the command's verbosity flags. Logs go to stderr so
/// report output on stdout stays machine-readable.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("grid_historian={log_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Write command output to a file, or print it to stdout when no path is
/// given
pub fn write_or_print(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output).map_err(|e| {
                Error::io(format!("failed to write output to {}", path.display()), e)
            })?;
            tracing::info!("Output written to: {}", path.display());
        }
        None => {
            println!("{output}");
        }
    }
    Ok(())
}
