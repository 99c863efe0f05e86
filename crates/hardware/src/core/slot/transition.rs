//! Grant-driven occupancy transitions.

use crate::core::uop::SlotState;

/// What left the slot this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Issue {
    /// Nothing dispatched.
    #[default]
    None,
    /// The whole entry dispatched; the slot vacates.
    Whole,
    /// Only the first half of a fused pair dispatched; the second half stays.
    FirstHalf,
    /// Only the second half of a fused pair dispatched; the first half stays.
    SecondHalf,
}

impl Issue {
    /// Returns `true` if anything was dispatched.
    #[inline]
    pub const fn dispatched(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if a fused pair split.
    #[inline]
    pub const fn is_split(self) -> bool {
        matches!(self, Self::FirstHalf | Self::SecondHalf)
    }
}

/// Successor state from grant and this tick's readiness, before branch kill.
pub const fn on_grant(state: SlotState, grant: bool, ready: [bool; 2]) -> (SlotState, Issue) {
    let [p1, p2] = ready;
    if !grant {
        return (state, Issue::None);
    }
    match state {
        SlotState::Single if p1 && p2 => (SlotState::Empty, Issue::Whole),
        SlotState::Fused if p1 && p2 => (SlotState::Empty, Issue::Whole),
        SlotState::Fused if p1 => (SlotState::Single, Issue::FirstHalf),
        SlotState::Fused if p2 => (SlotState::Single, Issue::SecondHalf),
        _ => (state, Issue::None),
    }
}

/// Whether `state` asks for dispatch given this tick's readiness.
#[inline]
pub const fn requests(state: SlotState, ready: [bool; 2]) -> bool {
    match state {
        SlotState::Empty => false,
        SlotState::Single => ready[0] && ready[1],
        SlotState::Fused => ready[0] || ready[1],
    }
}
