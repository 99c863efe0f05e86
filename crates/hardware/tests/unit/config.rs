//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization and validation.

use rstest::rstest;
use slotsim_core::common::ConfigError;
use slotsim_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_ticks);
    assert_eq!(config.slot.slow_wakeup_lanes, 4);
    assert_eq!(config.slot.branch_mask_bits, 12);
    assert!(config.slot.check_lane_count);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.slot.slow_wakeup_lanes, 4);
    assert!(!config.general.trace_ticks);
}

#[test]
fn test_partial_slot_section() {
    let config = Config::from_json(r#"{ "slot": { "check_lane_count": false } }"#).unwrap();
    assert!(!config.slot.check_lane_count);
    assert_eq!(config.slot.slow_wakeup_lanes, 4);
    assert_eq!(config.slot.branch_mask_bits, 12);
}

#[rstest]
#[case(r#"{ "slot": { "slow_wakeup_lanes": 0 } }"#)]
#[case(r#"{ "slot": { "branch_mask_bits": 0 } }"#)]
#[case(r#"{ "slot": { "branch_mask_bits": 65 } }"#)]
fn test_out_of_range_rejected(#[case] json: &str) {
    let err = Config::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NoWakeupLanes | ConfigError::BranchMaskBits(_)
    ));
}

#[rstest]
#[case("not json")]
#[case(r#"{ "slot": { "slow_wakeup_lanes": "four" } }"#)]
#[case(r#"{ "general": { "trace_ticks": 1 } }"#)]
fn test_malformed_rejected(#[case] json: &str) {
    assert!(matches!(
        Config::from_json(json),
        Err(ConfigError::Parse(_))
    ));
}

#[rstest]
#[case(1)]
#[case(32)]
#[case(64)]
fn test_mask_width_bounds_accepted(#[case] bits: u32) {
    let json = format!(r#"{{ "slot": {{ "branch_mask_bits": {bits} }} }}"#);
    let config = Config::from_json(&json).unwrap();
    assert_eq!(config.slot.branch_mask_bits, bits);
}

#[test]
fn test_error_messages_name_setting() {
    assert_eq!(
        ConfigError::BranchMaskBits(70).to_string(),
        "slot.branch_mask_bits must be in 1..=64, got 70"
    );
    assert!(ConfigError::NoWakeupLanes.to_string().contains("slow_wakeup_lanes"));
}
