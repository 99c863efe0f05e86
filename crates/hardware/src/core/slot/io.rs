//! Per-tick signal bundles of an issue slot.
//!
//! Direction is relative to the slot: [`SlotInputs`] are driven by the queue
//! controller, arbiter, branch unit and pipeline; [`SlotOutputs`] are read by
//! them. The wakeup buses arrive separately as a shared
//! [`WakeupBus`](crate::core::wakeup::WakeupBus).

use serde::{Deserialize, Serialize};

use crate::core::branch::BranchUpdate;
use crate::core::uop::{MicroOp, SlotState};

/// Signals driven into one slot during one tick.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotInputs {
    /// Arbiter awarded dispatch to this slot.
    pub grant: bool,
    /// Branch resolution broadcast.
    pub branch: BranchUpdate,
    /// Pipeline-wide flush.
    pub kill: bool,
    /// Controller removes the resident entry (it was relocated elsewhere).
    pub clear: bool,
    /// Load speculation miss. Accepted but does not affect the slot.
    pub load_spec_miss: bool,
    /// Operation the controller installs into this slot, with its occupancy tag.
    pub load: Option<MicroOp>,
}

impl SlotInputs {
    /// Inputs that only load `uop`.
    pub fn load(uop: MicroOp) -> Self {
        Self {
            load: Some(uop),
            ..Self::default()
        }
    }

    /// Inputs that only assert grant.
    pub fn grant() -> Self {
        Self {
            grant: true,
            ..Self::default()
        }
    }

    /// Inputs that only assert clear.
    pub fn clear() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }

    /// Inputs that only assert kill.
    pub fn kill() -> Self {
        Self {
            kill: true,
            ..Self::default()
        }
    }
}

/// Introspection outputs. No behavioral effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotDebug {
    /// Operand 1 readiness used for this tick's request.
    pub p1: bool,
    /// Operand 2 readiness used for this tick's request.
    pub p2: bool,
    /// Current occupancy.
    pub state: SlotState,
}

/// Signals the slot drives during one tick.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotOutputs {
    /// Slot is occupied this tick.
    pub valid: bool,
    /// Slot stays occupied next tick unless killed, cleared or reloaded.
    pub will_be_valid: bool,
    /// Slot asks the arbiter for dispatch.
    pub request: bool,
    /// Request on the high-priority line.
    pub request_hp: bool,
    /// Operation sent downstream this tick; present iff request and grant.
    pub dispatch: Option<MicroOp>,
    /// Resident entry as it stands after this tick, for relocation.
    pub projection: MicroOp,
    /// Introspection.
    pub debug: SlotDebug,
}
