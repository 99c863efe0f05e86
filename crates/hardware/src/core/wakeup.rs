//! Wakeup broadcast buses.
//!
//! One [`WakeupBus`] snapshot is built per tick and handed by shared reference
//! to every slot; slots only read it.

use serde::{Deserialize, Serialize};

use crate::common::tag::PhysTag;

/// Operand-ready broadcasts visible during one tick.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WakeupBus {
    /// Slow bus lanes; `None` is an idle lane.
    pub slow: Vec<Option<PhysTag>>,
    /// Single fast lane, one tick ahead of the result being usable.
    pub fast: Option<PhysTag>,
}

impl WakeupBus {
    /// Idle bus with `lanes` slow lanes.
    pub fn idle(lanes: usize) -> Self {
        Self {
            slow: vec![None; lanes],
            fast: None,
        }
    }

    /// Idle bus with `tag` broadcast on slow lane `lane`.
    pub fn slow(lanes: usize, lane: usize, tag: PhysTag) -> Self {
        let mut bus = Self::idle(lanes);
        if let Some(slot) = bus.slow.get_mut(lane) {
            *slot = Some(tag);
        }
        bus
    }

    /// Idle bus with `tag` broadcast on the fast lane.
    pub fn fast(lanes: usize, tag: PhysTag) -> Self {
        Self {
            slow: vec![None; lanes],
            fast: Some(tag),
        }
    }

    /// Returns `true` if any slow lane carries `tag`.
    #[inline]
    pub fn slow_hit(&self, tag: PhysTag) -> bool {
        self.slow.iter().any(|lane| *lane == Some(tag))
    }

    /// Returns `true` if the fast lane carries `tag`.
    #[inline]
    pub fn fast_hit(&self, tag: PhysTag) -> bool {
        self.fast == Some(tag)
    }
}
