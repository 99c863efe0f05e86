//! Python bindings for the issue-slot model.
//!
//! This crate exposes the model to Python via PyO3. It provides:
//! 1. **Slot:** `PySlot` for configuration, tick stepping and script runs.
//! 2. **Statistics:** `PyStats` for counters and selective section printing.
//! 3. **Utilities:** Version string, logging setup and conversion helpers.

use pyo3::prelude::*;

/// Python value to Rust type conversion.
pub mod conversion;
/// Issue slot binding (`PySlot`).
pub mod slot;
/// Statistics binding (`PyStats`).
pub mod stats;
/// Utility functions (version, logging).
pub mod utils;

/// Registers all model classes and functions onto the given Python module.
///
/// # Errors
///
/// Returns a `PyErr` if registration fails.
pub fn register_slot_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<slot::PySlot>()?;
    m.add_class::<stats::PyStats>()?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_slot_module(m)
}
