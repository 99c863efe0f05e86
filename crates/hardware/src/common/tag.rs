//! Strong types for the identifiers carried on the wakeup and branch buses.

use serde::{Deserialize, Serialize};

/// Physical register tag naming a source operand or a broadcast result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhysTag(pub u32);

/// Set of in-flight branches an operation is speculatively ordered behind.
///
/// Bit `i` set means the operation depends on the branch occupying branch
/// tag `i`. Width is bounded by `SlotConfig::branch_mask_bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchMask(pub u64);

impl BranchMask {
    /// Mask with no dependencies.
    pub const NONE: Self = Self(0);

    /// Returns a mask with only bit `tag` set, or an empty mask if `tag` is
    /// outside the 64 representable branches.
    #[inline]
    pub const fn single(tag: u32) -> Self {
        match 1u64.checked_shl(tag) {
            Some(bit) => Self(bit),
            None => Self::NONE,
        }
    }

    /// Returns `true` if no branch bit is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the two masks share any branch.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns this mask with every bit of `other` cleared.
    #[inline]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if the mask fits in `bits` bits.
    #[inline]
    pub const fn fits(self, bits: u32) -> bool {
        bits >= 64 || self.0 >> bits == 0
    }
}
