//! Issue slot implementation.
//!
//! This module contains the slot state machine and the records and buses it
//! exchanges with its peers: the micro-op record, the branch resolution
//! broadcast and the wakeup buses.

/// Branch resolution record and kill policy.
pub mod branch;

/// Issue slot state machine (readiness, transitions, projection).
pub mod slot;

/// Micro-op record, operand and occupancy types.
pub mod uop;

/// Slow and fast wakeup buses.
pub mod wakeup;

pub use self::slot::IssueSlot;
