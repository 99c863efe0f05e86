//! Simulation driver and stimulus scripts.
//!
//! Provides a driver that owns a slot with its statistics, and a JSON script
//! format for feeding it per-tick inputs.

/// Slot simulator with statistics and halting on contract violations.
pub mod simulator;

/// JSON stimulus scripts.
pub mod stimulus;

pub use simulator::{SlotSimulator, TickRecord};
pub use stimulus::{Stimulus, TickStimulus};
