//! Output views built from the resident record.
//!
//! Both views are fresh values derived from the stored record; neither
//! aliases the other.

use super::readiness::Resolved;
use super::transition::Issue;
use crate::common::tag::BranchMask;
use crate::core::uop::{MicroOp, OperandKind, SlotState};

/// Operation sent downstream this tick.
///
/// When a fused pair splits, the view is narrowed to the dispatching half:
/// the first half drops operand 2, the second half takes the second-half
/// opcode and drops operand 1.
pub fn dispatch_view(resident: &MicroOp, issue: Issue, branch_mask: BranchMask) -> MicroOp {
    let mut uop = resident.clone();
    match issue {
        Issue::FirstHalf => {
            uop.operand_kinds[1] = OperandKind::NotApplicable;
        }
        Issue::SecondHalf => {
            uop.opcode = resident.second_half_opcode;
            uop.operand_kinds[0] = OperandKind::NotApplicable;
        }
        Issue::None | Issue::Whole => {}
    }
    uop.branch_mask = branch_mask;
    uop
}

/// Resident entry as it stands after this tick.
///
/// The half left behind by a split is rewritten the opposite way to the
/// dispatch view. Readiness is folded back into the busy mirrors so a load of
/// this value elsewhere resumes with the same operand state.
pub fn resident_view(
    resident: &MicroOp,
    issue: Issue,
    next_state: SlotState,
    branch_mask: BranchMask,
    readiness: &Resolved,
) -> MicroOp {
    let mut uop = resident.clone();
    match issue {
        Issue::FirstHalf => {
            uop.opcode = resident.second_half_opcode;
            uop.operand_kinds[0] = OperandKind::NotApplicable;
        }
        Issue::SecondHalf => {
            uop.operand_kinds[1] = OperandKind::NotApplicable;
        }
        Issue::None | Issue::Whole => {}
    }
    uop.state = next_state;
    uop.branch_mask = branch_mask;
    uop.busy = [!readiness.ready[0], !readiness.ready[1]];
    uop.bypass = readiness.bypass;
    uop
}
