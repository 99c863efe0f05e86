//! Operand readiness and wakeup resolution.
//!
//! Readiness is held as a sticky bit per operand plus a one-tick bypass pulse.
//! The bit is set by load initialization, a slow-bus match, or a fast-bus
//! match, and never cleared while the entry lives. The pulse marks an operand
//! woken by the fast bus: during the following tick its readiness reads false,
//! so the entry cannot request before the forwarded value is visible.

use crate::core::uop::{MicroOp, Operand, SlotState};
use crate::core::wakeup::WakeupBus;

/// Readiness of a record after snooping one tick of broadcasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Resolved {
    /// Sticky readiness bits for the next tick.
    pub ready: [bool; 2],
    /// Bypass pulses for the next tick.
    pub bypass: [bool; 2],
    /// Operands matched on the slow bus this tick.
    pub slow_hits: [bool; 2],
    /// Operand matched on the fast bus this tick.
    pub fast_hit: Option<Operand>,
}

/// Readiness visible this tick: a pending bypass pulse masks the sticky bit.
#[inline]
pub const fn effective(ready: [bool; 2], bypass: [bool; 2]) -> [bool; 2] {
    [ready[0] && !bypass[0], ready[1] && !bypass[1]]
}

/// Operand the fast bus is compared against.
///
/// The second half of a split fused pair checks the operand its record
/// selects; anything else, including a whole fused pair, checks operand 1.
#[inline]
pub const fn fast_target(record: &MicroOp, state: SlotState) -> Operand {
    if record.is_second_half(state) {
        record.fast_operand
    } else {
        Operand::First
    }
}

/// Folds this tick's broadcasts into `base` readiness for `record` held in `state`.
///
/// Overrides apply in order: `base` (stored bits, or load initialization),
/// slow-bus matches, then the fast-bus match, which also raises the bypass
/// pulse for the next tick. Pulses not raised here are dropped.
pub fn resolve(record: &MicroOp, state: SlotState, base: [bool; 2], bus: &WakeupBus) -> Resolved {
    let mut out = Resolved {
        ready: base,
        ..Resolved::default()
    };

    for op in Operand::BOTH {
        if bus.slow_hit(record.tag(op)) {
            out.ready[op.index()] = true;
            out.slow_hits[op.index()] = true;
        }
    }

    let target = fast_target(record, state);
    if bus.fast_hit(record.tag(target)) {
        out.ready[target.index()] = true;
        out.bypass[target.index()] = true;
        out.fast_hit = Some(target);
    }

    out
}
