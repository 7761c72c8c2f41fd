//! aqua — a desktop system resource monitor.
//!
//! Run with:  `RUST_LOG=info aqua`

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("aqua v{} starting", env!("CARGO_PKG_VERSION"));

    // A startup failure is printed once by the returned error; no window opens.
    aqua_window::run().context("error initializing application")
}
