//! histview — interactive histogram of one column of a CSV-like file.
//!
//! Run with:  `RUST_LOG=debug histview data.csv 40`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("histview v{} starting", env!("CARGO_PKG_VERSION"));

    histview::run(std::env::args_os()).map_err(Into::into)
}
