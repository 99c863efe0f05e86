//! Common types shared throughout the issue-slot model.
//!
//! This module provides the fundamental building blocks used by the slot, the
//! simulator driver and the bindings. It includes:
//! 1. **Tags:** Strong types for physical register tags and branch masks.
//! 2. **Error Handling:** Slot contract violations, configuration and driver errors.

/// Error types for slot evaluation, configuration and simulation.
pub mod error;

/// Physical register tag and branch mask types.
pub mod tag;

pub use error::{ConfigError, SimError, SlotError};
pub use tag::{BranchMask, PhysTag};
