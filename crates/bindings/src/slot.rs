//! Issue slot Python binding.
//!
//! Wraps the simulator so Python can build a slot from a config dict, drive it
//! one tick at a time or from a list of ticks, and read back outputs as dicts.

use pyo3::prelude::*;
use slotsim_core::SlotSimulator;
use slotsim_core::config::Config;
use slotsim_core::sim::{Stimulus, TickStimulus};

use crate::conversion::{config_err, from_py, py_dict_to_config, sim_err, to_py};
use crate::stats::PyStats;

/// Python-exposed issue slot with its statistics and cycle counter.
#[pyclass]
#[derive(Debug)]
pub struct PySlot {
    /// Underlying simulator.
    pub inner: SlotSimulator,
}

#[pymethods]
impl PySlot {
    /// Creates an empty slot.
    ///
    /// # Errors
    /// Returns a `ValueError` if `config_dict` does not describe a valid config.
    #[new]
    #[pyo3(signature = (config_dict=None))]
    fn new(py: Python<'_>, config_dict: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let config = match config_dict {
            Some(dict) => py_dict_to_config(py, dict)?,
            None => Config::default(),
        };
        let inner = SlotSimulator::new(&config).map_err(config_err)?;
        Ok(Self { inner })
    }

    /// Dispatch request for the coming tick.
    #[getter]
    fn request(&self) -> bool {
        self.inner.slot.request()
    }

    /// Whether the slot currently holds an operation.
    #[getter]
    fn valid(&self) -> bool {
        self.inner.slot.valid()
    }

    #[getter]
    fn cycle(&self) -> u64 {
        self.inner.cycle()
    }

    #[getter]
    fn halted(&self) -> bool {
        self.inner.is_halted()
    }

    /// Advances one tick.
    ///
    /// `tick` is a dict with optional `inputs` and `bus` keys, in the same
    /// shape as one entry of a stimulus script. Returns the tick's outputs.
    ///
    /// # Errors
    /// `ValueError` for malformed input, `RuntimeError` for a contract
    /// violation or a halted slot.
    #[pyo3(signature = (tick=None))]
    fn tick(&mut self, py: Python<'_>, tick: Option<&Bound<'_, PyAny>>) -> PyResult<PyObject> {
        let stim: TickStimulus = match tick {
            Some(obj) => from_py(py, obj)?,
            None => TickStimulus::default(),
        };
        let bus = stim.bus_or_idle(self.inner.slot.config().slow_wakeup_lanes);
        let out = self.inner.step(&stim.inputs, &bus).map_err(sim_err)?;
        to_py(py, &out)
    }

    /// Runs a list of ticks and returns one `{cycle, outputs}` dict per tick.
    fn run(&mut self, py: Python<'_>, ticks: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let ticks: Vec<TickStimulus> = from_py(py, ticks)?;
        let records = self.inner.run(&Stimulus { ticks }).map_err(sim_err)?;
        to_py(py, &records)
    }

    /// Runs a JSON stimulus script from disk.
    fn run_file(&mut self, py: Python<'_>, path: String) -> PyResult<PyObject> {
        let stimulus = Stimulus::from_path(path).map_err(sim_err)?;
        let records = self.inner.run(&stimulus).map_err(sim_err)?;
        to_py(py, &records)
    }

    /// Registered state as a dict (`state`, `ready`, `uop`).
    fn regs(&self, py: Python<'_>) -> PyResult<PyObject> {
        let regs = self.inner.slot.regs();
        to_py(
            py,
            &serde_json::json!({
                "state": regs.state,
                "ready": regs.ready,
                "uop": regs.uop,
            }),
        )
    }

    /// Snapshot of the statistics collected so far.
    pub fn get_stats(&self) -> PyStats {
        PyStats::from(self.inner.stats.clone())
    }
}
