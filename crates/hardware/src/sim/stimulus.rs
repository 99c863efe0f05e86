//! Stimulus scripts: per-tick inputs for a slot, read from JSON.
//!
//! A script is a list of ticks. Each tick names the slot inputs and the bus
//! snapshot; either may be omitted and every field inside defaults:
//!
//! ```json
//! { "ticks": [
//!     { "inputs": { "load": { "state": "Single", "busy": [false, true],
//!                             "operand_tags": [3, 4] } } },
//!     { "bus": { "slow": [4, null, null, null] } },
//!     { "inputs": { "grant": true } }
//! ] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::SimError;
use crate::core::slot::io::SlotInputs;
use crate::core::wakeup::WakeupBus;

/// Inputs and broadcasts for one tick.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickStimulus {
    /// Signals driven into the slot.
    pub inputs: SlotInputs,
    /// Wakeup bus snapshot.
    pub bus: WakeupBus,
}

impl TickStimulus {
    /// The tick's bus, or an idle bus of `lanes` lanes if no slow lanes were given.
    pub fn bus_or_idle(&self, lanes: usize) -> WakeupBus {
        if self.bus.slow.is_empty() {
            WakeupBus {
                slow: vec![None; lanes],
                fast: self.bus.fast,
            }
        } else {
            self.bus.clone()
        }
    }
}

/// A sequence of ticks to drive through a simulator.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stimulus {
    /// Ticks in order.
    #[serde(default)]
    pub ticks: Vec<TickStimulus>,
}

impl Stimulus {
    /// Parses a script from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Stimulus`] if the JSON does not match the schema.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a script file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Stimulus`] if it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
