//! Wakeup Tests: Slow Bus, Fast Bus, Bypass Suppression.
//!
//! Verifies that broadcast tags set operand readiness, that a fast wakeup
//! masks its operand for exactly one tick, and that the fast bus checks the
//! operand the second half of a split pair selects.

use rstest::rstest;

use crate::common::builder::uop::{SECOND_HALF, TAG1, TAG2, UopBuilder};
use crate::common::harness::TestContext;
use slotsim_core::common::PhysTag;
use slotsim_core::core::slot::io::SlotInputs;
use slotsim_core::core::uop::{Operand, OperandKind};
use slotsim_core::core::wakeup::WakeupBus;

// ══════════════════════════════════════════════════════════
// 1. Slow bus
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
fn any_slow_lane_wakes_operand(#[case] lane: usize) {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().busy(true, false).build());
    let bus = WakeupBus::slow(ctx.lanes(), lane, TAG1);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    assert!(ctx.slot().request());
}

#[test]
fn two_lanes_wake_both_operands_in_one_tick() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().busy(true, true).build());
    let mut bus = ctx.idle_bus();
    bus.slow[0] = Some(TAG2);
    bus.slow[2] = Some(TAG1);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    assert_eq!(ctx.slot().readiness(), [true, true]);
    assert!(ctx.slot().request());
}

#[test]
fn unrelated_tag_does_not_wake() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().busy(true, true).build());
    let bus = ctx.slow(PhysTag(999));
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    assert_eq!(ctx.slot().readiness(), [false, false]);
}

#[test]
fn wakeup_on_load_tick_matches_incoming_tags() {
    let mut ctx = TestContext::new();
    let bus = ctx.slow(TAG2);
    let _ = ctx.tick_bus(
        SlotInputs::load(UopBuilder::single().busy(false, true).build()),
        &bus,
    );
    assert!(ctx.slot().request());
}

#[test]
fn readiness_is_sticky() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().busy(true, false).build());
    let bus = ctx.slow(TAG1);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    for _ in 0..4 {
        let _ = ctx.tick(SlotInputs::default());
        assert!(ctx.slot().request());
    }
}

// ══════════════════════════════════════════════════════════
// 2. Fast bus and bypass suppression
// ══════════════════════════════════════════════════════════

#[test]
fn fast_wakeup_suppresses_exactly_one_tick() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().busy(true, false).build());

    let bus = ctx.fast(TAG1);
    let out = ctx.tick_bus(SlotInputs::default(), &bus);
    assert!(!out.debug.p1);
    assert_eq!(ctx.slot().regs().uop.bypass, [true, false]);

    // Suppressed tick: operand is ready but masked, no request.
    let out = ctx.tick(SlotInputs::default());
    assert!(!out.debug.p1);
    assert!(!out.request);

    // Pulse is gone.
    let out = ctx.tick(SlotInputs::default());
    assert!(out.debug.p1);
    assert!(out.request);
}

#[test]
fn suppressed_tick_ignores_grant() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().busy(true, false).build());
    let bus = ctx.fast(TAG1);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    let out = ctx.tick(SlotInputs::grant());
    assert!(out.dispatch.is_none());
    assert!(ctx.slot().valid());
}

#[test]
fn fast_wins_over_same_tick_slow_match() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().busy(true, false).build());
    let mut bus = ctx.fast(TAG1);
    bus.slow[1] = Some(TAG1);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    assert_eq!(ctx.slot().regs().uop.bypass, [true, false]);
    assert!(!ctx.slot().request());
}

#[test]
fn fast_checks_only_operand_one_outside_fused() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().busy(false, true).build());
    let bus = ctx.fast(TAG2);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    assert_eq!(ctx.slot().readiness(), [true, false]);
}

#[test]
fn whole_fused_pair_fast_checks_operand_one() {
    let uop = UopBuilder::fused()
        .busy(true, true)
        .fast_operand(Operand::Second)
        .build();
    let mut ctx = TestContext::new().loaded(uop);

    let bus = ctx.fast(TAG2);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    assert_eq!(ctx.slot().regs().ready, [false, false]);

    let bus = ctx.fast(TAG1);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    assert_eq!(ctx.slot().regs().ready, [true, false]);
    assert_eq!(ctx.slot().regs().uop.bypass, [true, false]);
}

#[test]
fn split_remainder_fast_wakeup_uses_selector() {
    let uop = UopBuilder::fused()
        .busy(false, true)
        .fast_operand(Operand::Second)
        .build();
    let mut ctx = TestContext::new().loaded(uop);
    let _ = ctx.tick(SlotInputs::grant());
    assert_eq!(
        ctx.slot().regs().uop.operand_kinds,
        [OperandKind::NotApplicable, OperandKind::Register]
    );

    let bus = ctx.fast(TAG2);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    assert_eq!(ctx.slot().regs().ready, [true, true]);
    assert_eq!(ctx.slot().regs().uop.bypass, [false, true]);
    assert!(!ctx.slot().request());

    let _ = ctx.tick(SlotInputs::default());
    assert!(ctx.slot().request());
    let out = ctx.tick(SlotInputs::grant());
    assert_eq!(out.dispatch.map(|u| u.opcode), Some(SECOND_HALF));
    assert!(!ctx.slot().valid());
}

#[test]
fn split_remainder_with_default_selector_ignores_its_operand() {
    let mut ctx = TestContext::new().loaded(UopBuilder::fused().busy(false, true).build());
    let _ = ctx.tick(SlotInputs::grant());
    let bus = ctx.fast(TAG2);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    assert_eq!(ctx.slot().regs().ready, [true, false]);
}

#[test]
fn repeated_fast_wakeup_extends_suppression() {
    let mut ctx = TestContext::new().loaded(UopBuilder::single().busy(true, false).build());
    let bus = ctx.fast(TAG1);
    let _ = ctx.tick_bus(SlotInputs::default(), &bus);
    let out = ctx.tick_bus(SlotInputs::default(), &bus);
    assert!(!out.debug.p1);
    assert!(!ctx.peek().debug.p1);
    let _ = ctx.tick(SlotInputs::default());
    assert!(ctx.peek().debug.p1);
}
