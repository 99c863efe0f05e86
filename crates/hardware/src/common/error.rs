//! Error definitions for the issue-slot model.
//!
//! This module defines every failure the model can report. It provides:
//! 1. **Slot Errors:** Contract violations detected while evaluating a tick.
//! 2. **Config Errors:** Invalid or unparsable configuration.
//! 3. **Simulation Errors:** Driver-level failures wrapping the two above.
//!
//! Routine conditions (no wakeup match, no grant, a misprediction the resident
//! operation does not depend on) are never errors.

use thiserror::Error;

use crate::core::uop::SlotState;

/// A contract violation detected while evaluating one tick of an issue slot.
///
/// These are fatal: the tick that produced one is not committed and the
/// surrounding simulation is expected to halt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SlotError {
    /// The queue controller loaded an operation into an occupied slot without
    /// asserting `clear` or `kill` in the same tick.
    #[error("load into occupied issue slot (state {state:?}) without clear or kill")]
    OccupiedOverwrite {
        /// Occupancy state of the slot when the load arrived.
        state: SlotState,
    },

    /// The slow wakeup bus carried a different number of lanes than configured.
    #[error("slow wakeup bus has {got} lanes, slot is configured for {expected}")]
    LaneCountMismatch {
        /// Configured lane count.
        expected: usize,
        /// Lanes present in the tick's inputs.
        got: usize,
    },

    /// A branch mask used bits beyond the configured branch-mask width.
    #[error("{what} mask {mask:#x} exceeds {bits}-bit branch mask width")]
    BranchMaskOutOfRange {
        /// Which mask was rejected (`"load"`, `"resolve"` or `"mispredict"`).
        what: &'static str,
        /// Offending mask value.
        mask: u64,
        /// Configured width in bits.
        bits: u32,
    },
}

/// Configuration could not be parsed or failed validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document did not match the configuration schema.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The slow wakeup bus must have at least one lane.
    #[error("slot.slow_wakeup_lanes must be at least 1")]
    NoWakeupLanes,

    /// Branch masks are carried in a `u64`.
    #[error("slot.branch_mask_bits must be in 1..=64, got {0}")]
    BranchMaskBits(u32),
}

/// Failure of the simulation driver.
#[derive(Debug, Error)]
pub enum SimError {
    /// A tick violated the slot contract; the simulator is now halted.
    #[error("cycle {cycle}: {source}")]
    Contract {
        /// Cycle at which the violation was detected.
        cycle: u64,
        /// Underlying violation.
        #[source]
        source: SlotError,
    },

    /// A previous contract violation halted the simulator.
    #[error("simulator halted at cycle {0}")]
    Halted(u64),

    /// The stimulus script could not be read.
    #[error("failed to read stimulus: {0}")]
    Io(#[from] std::io::Error),

    /// The stimulus script was not valid JSON for the input schema.
    #[error("invalid stimulus: {0}")]
    Stimulus(#[from] serde_json::Error),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
