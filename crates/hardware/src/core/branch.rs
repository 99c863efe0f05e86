//! Branch resolution record consumed by issue slots.
//!
//! Each tick the branch unit publishes which in-flight branches resolved and
//! which of those resolved the wrong way. A slot uses it twice:
//! 1. **Kill check:** the resident operation dies if its mask names any mispredicted branch.
//! 2. **Mask update:** resolved branches are dropped from the resident mask.

use serde::{Deserialize, Serialize};

use crate::common::tag::BranchMask;

/// Branch resolution broadcast for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchUpdate {
    /// Branches that resolved this tick, correctly or not.
    pub resolve_mask: BranchMask,
    /// Branches that resolved against their prediction this tick.
    pub mispredict_mask: BranchMask,
}

impl BranchUpdate {
    /// Update for a tick in which no branch resolved.
    pub const NONE: Self = Self {
        resolve_mask: BranchMask::NONE,
        mispredict_mask: BranchMask::NONE,
    };

    /// Update reporting that `tag` resolved as predicted.
    pub const fn resolved(tag: u32) -> Self {
        Self {
            resolve_mask: BranchMask::single(tag),
            mispredict_mask: BranchMask::NONE,
        }
    }

    /// Update reporting that `tag` resolved against its prediction.
    pub const fn mispredicted(tag: u32) -> Self {
        Self {
            resolve_mask: BranchMask::single(tag),
            mispredict_mask: BranchMask::single(tag),
        }
    }

    /// Returns `true` if an operation carrying `mask` lies on a mispredicted path.
    #[inline]
    pub const fn kills(&self, mask: BranchMask) -> bool {
        mask.intersects(self.mispredict_mask)
    }

    /// Returns `mask` with every branch resolved this tick removed.
    #[inline]
    pub const fn update(&self, mask: BranchMask) -> BranchMask {
        mask.without(self.resolve_mask)
    }
}
