//! Utility functions exposed to Python.

use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the model version string.
#[pyfunction]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Routes the model's `tracing` output to stderr.
///
/// `filter` uses `RUST_LOG` syntax (e.g. `"slotsim_core=debug"`); without it
/// the `RUST_LOG` environment variable is read. Calling it again is a no-op.
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub fn init_logging(filter: Option<String>) {
    let filter = filter.map_or_else(EnvFilter::from_default_env, EnvFilter::new);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
