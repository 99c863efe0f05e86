//! Issue slot simulator library.
//!
//! This crate implements a cycle-level behavioral model of a single issue-queue
//! slot of an out-of-order scheduler:
//! 1. **Core:** The slot state machine, its micro-op record, branch and wakeup buses.
//! 2. **Simulation:** A driver with statistics, and JSON stimulus scripts.
//! 3. **Configuration:** Bus widths and input checks, deserialized from JSON.
//!
//! Each tick the slot evaluates its outputs from registered state plus that
//! tick's inputs, then commits its next registered state atomically.

/// Common types (tags, branch masks, errors).
pub mod common;
/// Model configuration (defaults, validation).
pub mod config;
/// Issue slot and the records and buses it exchanges.
pub mod core;
/// Simulation driver and stimulus scripts.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The issue slot.
pub use crate::core::IssueSlot;
/// Driver owning a slot, its stats and cycle counter.
pub use crate::sim::SlotSimulator;
