//! Micro-op record held by an issue slot.
//!
//! The record is the unit the queue controller moves between slots: it carries
//! its own occupancy tag and readiness mirrors so a relocated entry resumes
//! exactly where it left off.

use serde::{Deserialize, Serialize};

use crate::common::tag::{BranchMask, PhysTag};

/// Operation identifier. The slot never interprets it beyond copying and
/// rewriting it when a fused pair splits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Opcode(pub u16);

/// Whether a source operand names a real register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperandKind {
    /// Operand is read from a physical register.
    #[default]
    Register,
    /// Operand is not used; set on the remaining half of a split fused pair.
    NotApplicable,
}

/// Selects one of the two source operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Operand {
    /// Source operand 1 (`p1`).
    #[default]
    First,
    /// Source operand 2 (`p2`).
    Second,
}

impl Operand {
    /// Both operands in index order.
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    /// Array index of this operand in the per-operand fields.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Occupancy of an issue slot, also carried by a record on relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlotState {
    /// No operation resident.
    #[default]
    Empty,
    /// A single pending operation.
    Single,
    /// A fused pair; either half may dispatch on its own.
    Fused,
}

impl SlotState {
    /// Returns `true` unless the state is [`SlotState::Empty`].
    #[inline]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// A pending operation as stored in, dispatched from, or relocated out of a slot.
///
/// Per-operand fields are indexed by [`Operand::index`]. Every field defaults,
/// so stimulus scripts only spell out what they care about.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroOp {
    /// Operation identifier.
    pub opcode: Opcode,
    /// Opcode of the data half of a fused pair, taken over when the first half leaves.
    pub second_half_opcode: Opcode,
    /// Physical tags of the two source operands.
    pub operand_tags: [PhysTag; 2],
    /// Whether each source operand is a real register.
    pub operand_kinds: [OperandKind; 2],
    /// Operand not yet available.
    pub busy: [bool; 2],
    /// Operand became ready through the fast wakeup last tick.
    pub bypass: [bool; 2],
    /// Operand the fast wakeup checks once the record is the second half of a
    /// split fused pair.
    pub fast_operand: Operand,
    /// Branches this operation is speculatively ordered behind.
    pub branch_mask: BranchMask,
    /// Occupancy the record installs when loaded into a slot.
    pub state: SlotState,
    /// Request on the high-priority line (branch-like operations).
    pub high_priority: bool,
}

impl MicroOp {
    /// Tag of the given source operand.
    #[inline]
    pub const fn tag(&self, op: Operand) -> PhysTag {
        self.operand_tags[op.index()]
    }

    /// Kind of the given source operand.
    #[inline]
    pub const fn kind(&self, op: Operand) -> OperandKind {
        self.operand_kinds[op.index()]
    }

    /// Whether the record, held in `state`, is the half left behind after the
    /// first half of a fused pair dispatched. The split marks operand 1 as
    /// unused, so the mark survives relocation.
    #[inline]
    pub const fn is_second_half(&self, state: SlotState) -> bool {
        matches!(state, SlotState::Single)
            && matches!(self.operand_kinds[0], OperandKind::NotApplicable)
    }

    /// Readiness implied by the busy mirrors, used when the record is loaded.
    #[inline]
    pub const fn initial_readiness(&self) -> [bool; 2] {
        [!self.busy[0], !self.busy[1]]
    }
}
