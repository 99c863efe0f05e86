//! Python↔Rust value conversion.
//!
//! Python dicts and lists cross the boundary as JSON: `json.dumps` on the way
//! in, `json.loads` on the way out. The same serde schema therefore serves
//! stimulus files, config files and Python callers.

use pyo3::exceptions::{PyOSError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use slotsim_core::common::{ConfigError, SimError};
use slotsim_core::config::Config;

/// Converts a Python dict to a validated model `Config`.
///
/// Keys must match the Rust config structure (`general`, `slot`); missing
/// keys take their defaults.
pub fn py_dict_to_config(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<Config> {
    let json = dumps(py, dict)?;
    Config::from_json(&json).map_err(config_err)
}

/// Deserializes a Python value (dict, list, scalars) into `T`.
pub fn from_py<T: DeserializeOwned>(py: Python<'_>, obj: &Bound<'_, PyAny>) -> PyResult<T> {
    let json = dumps(py, obj)?;
    serde_json::from_str(&json).map_err(|e| PyValueError::new_err(format!("invalid input: {e}")))
}

/// Serializes `value` into plain Python objects.
pub fn to_py<T: Serialize>(py: Python<'_>, value: &T) -> PyResult<PyObject> {
    let json = serde_json::to_string(value)
        .map_err(|e| PyRuntimeError::new_err(format!("failed to encode output: {e}")))?;
    let loads = py.import("json")?.getattr("loads")?;
    Ok(loads.call1((json,))?.unbind())
}

/// Maps a configuration error to `ValueError`.
pub fn config_err(e: ConfigError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Maps a simulator error to the closest Python exception.
pub fn sim_err(e: SimError) -> PyErr {
    match e {
        SimError::Io(_) => PyOSError::new_err(e.to_string()),
        SimError::Stimulus(_) | SimError::Config(_) => PyValueError::new_err(e.to_string()),
        SimError::Contract { .. } | SimError::Halted(_) => PyRuntimeError::new_err(e.to_string()),
    }
}

fn dumps(py: Python<'_>, obj: &Bound<'_, PyAny>) -> PyResult<String> {
    py.import("json")?.getattr("dumps")?.call1((obj,))?.extract()
}
