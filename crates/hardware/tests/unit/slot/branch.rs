//! Branch Kill Tests: Misprediction Precedence and Mask Update.

use pretty_assertions::assert_eq;

use crate::common::builder::inputs::InputsBuilder;
use crate::common::builder::uop::UopBuilder;
use crate::common::harness::TestContext;
use slotsim_core::common::{BranchMask, SlotError};
use slotsim_core::core::branch::BranchUpdate;
use slotsim_core::core::slot::io::SlotInputs;
use slotsim_core::core::uop::SlotState;

#[test]
fn branch_kill_with_grant_still_projects_empty() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().mask(0b100).build());
    let out = ctx.tick(InputsBuilder::new().grant().mispredict(2).build());
    assert!(out.request);
    assert!(out.dispatch.is_some());
    assert_eq!(out.projection.state, SlotState::Empty);
    assert!(!ctx.slot().valid());
}

#[test]
fn branch_kill_without_grant_vacates_requesting_slot() {
    let mut ctx = TestContext::new().loaded(UopBuilder::fused().mask(0b1).build());
    let out = ctx.tick(InputsBuilder::new().mispredict(0).build());
    assert!(out.request);
    assert!(out.dispatch.is_none());
    assert_eq!(out.projection.state, SlotState::Empty);
    assert!(!ctx.slot().valid());
    assert!(!ctx.peek().request);
}

#[test]
fn branch_kill_overrides_split() {
    let mut ctx = TestContext::new().loaded(UopBuilder::fused().busy(false, true).mask(0b10).build());
    let out = ctx.tick(InputsBuilder::new().grant().mispredict(1).build());
    assert_eq!(out.projection.state, SlotState::Empty);
    assert!(!ctx.slot().valid());
}

#[test]
fn independent_misprediction_is_harmless() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().mask(0b01).build());
    let out = ctx.tick(InputsBuilder::new().mispredict(3).build());
    assert_eq!(out.projection.state, SlotState::Single);
    assert!(ctx.slot().valid());
}

#[test]
fn resolved_branch_is_dropped_from_mask() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().busy(true, true).mask(0b110).build());
    let out = ctx.tick(InputsBuilder::new().resolve(1).build());
    assert_eq!(out.projection.branch_mask, BranchMask(0b100));
    assert_eq!(ctx.slot().regs().uop.branch_mask, BranchMask(0b100));
}

#[test]
fn dispatch_view_carries_updated_mask() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().mask(0b11).build());
    let out = ctx.tick(InputsBuilder::new().grant().resolve(0).build());
    assert_eq!(out.dispatch.map(|u| u.branch_mask), Some(BranchMask(0b10)));
}

#[test]
fn load_keeps_its_own_mask() {
    let mut ctx = TestContext::new();
    let _ = ctx.tick(
        InputsBuilder::new()
            .load(UopBuilder::single().mask(0b100).build())
            .resolve(2)
            .build(),
    );
    assert_eq!(ctx.slot().regs().uop.branch_mask, BranchMask(0b100));
}

#[test]
fn load_is_not_killed_by_same_tick_misprediction() {
    let mut ctx = TestContext::new();
    let _ = ctx.tick(
        InputsBuilder::new()
            .load(UopBuilder::single().mask(0b100).build())
            .mispredict(2)
            .build(),
    );
    assert!(ctx.slot().valid());
}

#[test]
fn mask_wider_than_configured_is_rejected() {
    let mut ctx = TestContext::new();
    let bus = ctx.idle_bus();
    let io = SlotInputs {
        branch: BranchUpdate {
            mispredict_mask: BranchMask(1 << 20),
            ..BranchUpdate::NONE
        },
        ..SlotInputs::default()
    };
    let err = ctx.sim.slot.tick(&io, &bus).unwrap_err();
    assert_eq!(
        err,
        SlotError::BranchMaskOutOfRange {
            what: "mispredict",
            mask: 1 << 20,
            bits: 12
        }
    );

    let io = SlotInputs::load(UopBuilder::single().mask(1 << 12).build());
    assert!(matches!(
        ctx.sim.slot.tick(&io, &bus),
        Err(SlotError::BranchMaskOutOfRange { what: "load", .. })
    ));
}

#[test]
fn out_of_range_branch_tag_resolves_nothing() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().mask(0b1).build());
    let out = ctx.tick(InputsBuilder::new().mispredict(64).build());
    assert_eq!(out.projection.branch_mask, BranchMask(0b1));
    assert!(ctx.slot().valid());
}
