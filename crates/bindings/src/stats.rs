//! Statistics Python binding.
//!
//! Getters for the slot counters, `print` / `print_sections` for the text
//! report, and `to_dict` for export.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use slotsim_core::stats::SlotStats;

/// Python-exposed statistics: wraps `SlotStats` for read and print from Python.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PyStats {
    /// Snapshot being exposed.
    pub inner: SlotStats,
}

#[pymethods]
impl PyStats {
    /// Print all stats.
    fn print(&self) {
        self.inner.print();
    }

    /// Print only the given sections: "summary", "lifecycle", "dispatch", "wakeup".
    /// Pass an empty list for the full report.
    fn print_sections(&self, sections: Vec<String>) {
        self.inner.print_sections(&sections);
    }

    #[getter]
    fn ticks(&self) -> u64 {
        self.inner.ticks
    }
    #[getter]
    fn occupied_ticks(&self) -> u64 {
        self.inner.occupied_ticks
    }
    #[getter]
    fn request_ticks(&self) -> u64 {
        self.inner.request_ticks
    }
    #[getter]
    fn loads(&self) -> u64 {
        self.inner.loads
    }
    #[getter]
    fn clears(&self) -> u64 {
        self.inner.clears
    }
    #[getter]
    fn kills(&self) -> u64 {
        self.inner.kills
    }
    #[getter]
    fn branch_kills(&self) -> u64 {
        self.inner.branch_kills
    }
    #[getter]
    fn dispatches_whole(&self) -> u64 {
        self.inner.dispatches_whole
    }
    #[getter]
    fn dispatches_split(&self) -> u64 {
        self.inner.dispatches_split
    }
    #[getter]
    fn slow_wakeups(&self) -> u64 {
        self.inner.slow_wakeups
    }
    #[getter]
    fn fast_wakeups(&self) -> u64 {
        self.inner.fast_wakeups
    }
    #[getter]
    fn bypass_suppressed(&self) -> u64 {
        self.inner.bypass_suppressed
    }
    #[getter]
    fn occupancy(&self) -> f64 {
        self.inner.occupancy()
    }

    /// Export all stats as a Python dict.
    fn to_dict(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        let d = PyDict::new(py);
        let s = &self.inner;
        d.set_item("ticks", s.ticks)?;
        d.set_item("occupied_ticks", s.occupied_ticks)?;
        d.set_item("request_ticks", s.request_ticks)?;
        d.set_item("occupancy", s.occupancy())?;

        d.set_item("loads", s.loads)?;
        d.set_item("clears", s.clears)?;
        d.set_item("kills", s.kills)?;
        d.set_item("branch_kills", s.branch_kills)?;

        d.set_item("dispatches_whole", s.dispatches_whole)?;
        d.set_item("dispatches_split", s.dispatches_split)?;
        d.set_item("dispatches", s.dispatches())?;

        d.set_item("slow_wakeups", s.slow_wakeups)?;
        d.set_item("fast_wakeups", s.fast_wakeups)?;
        d.set_item("bypass_suppressed", s.bypass_suppressed)?;

        Ok(d.into())
    }
}

impl From<SlotStats> for PyStats {
    fn from(inner: SlotStats) -> Self {
        Self { inner }
    }
}
