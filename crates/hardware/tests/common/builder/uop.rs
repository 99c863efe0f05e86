use slotsim_core::common::{BranchMask, PhysTag};
use slotsim_core::core::uop::{MicroOp, Opcode, Operand, SlotState};

/// Default tags given to operand 1 and operand 2.
pub const TAG1: PhysTag = PhysTag(11);
pub const TAG2: PhysTag = PhysTag(22);

/// Default opcodes of a fused pair's two halves.
pub const FIRST_HALF: Opcode = Opcode(0x40);
pub const SECOND_HALF: Opcode = Opcode(0x41);

pub struct UopBuilder(MicroOp);

impl UopBuilder {
    /// Single operation waiting on nothing, operands `TAG1`/`TAG2`.
    pub fn single() -> Self {
        Self(MicroOp {
            opcode: FIRST_HALF,
            second_half_opcode: SECOND_HALF,
            operand_tags: [TAG1, TAG2],
            state: SlotState::Single,
            ..MicroOp::default()
        })
    }

    /// Fused pair waiting on nothing, operands `TAG1`/`TAG2`.
    pub fn fused() -> Self {
        Self::single().state(SlotState::Fused)
    }

    pub fn state(mut self, state: SlotState) -> Self {
        self.0.state = state;
        self
    }

    pub fn opcode(mut self, op: u16) -> Self {
        self.0.opcode = Opcode(op);
        self
    }

    pub fn second_half(mut self, op: u16) -> Self {
        self.0.second_half_opcode = Opcode(op);
        self
    }

    pub fn tags(mut self, t1: u32, t2: u32) -> Self {
        self.0.operand_tags = [PhysTag(t1), PhysTag(t2)];
        self
    }

    pub fn busy(mut self, b1: bool, b2: bool) -> Self {
        self.0.busy = [b1, b2];
        self
    }

    pub fn fast_operand(mut self, op: Operand) -> Self {
        self.0.fast_operand = op;
        self
    }

    pub fn mask(mut self, mask: u64) -> Self {
        self.0.branch_mask = BranchMask(mask);
        self
    }

    pub fn high_priority(mut self) -> Self {
        self.0.high_priority = true;
        self
    }

    pub fn build(self) -> MicroOp {
        self.0
    }
}
