// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Growth policies for [`RawArrayList::ensure_capacity`](crate::RawArrayList::ensure_capacity).

/// How a list computes its new capacity when more room is needed.
///
/// The policy is fixed at construction. It never causes capacity to shrink;
/// only [`compact`](crate::RawArrayList::compact) does that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrowthPolicy {
    /// Double the *requested* slot count (unless that would overflow), then
    /// reallocate to exactly that many slots if it exceeds the current
    /// capacity.
    ///
    /// The doubling is applied to the request, not to the current capacity, so
    /// a request that already fits can still trigger growth: with `capacity = 4`
    /// a request for `3` slots grows the list to `6`. Repeated single-element
    /// appends therefore reallocate on every call, each time to `2 * len`.
    #[default]
    DoubleRequest,
    /// Reallocate only when the request exceeds the current capacity, to
    /// `max(needed, 2 * capacity)`.
    DoubleCapacity,
    /// Reallocate only when the request exceeds the current capacity, to
    /// exactly `needed` slots.
    Exact,
}

impl GrowthPolicy {
    /// Returns the capacity a list should be grown to, or `None` if `capacity`
    /// already satisfies `needed` under this policy.
    #[inline]
    pub const fn target(self, capacity: usize, needed: usize) -> Option<usize> {
        match self {
            Self::DoubleRequest => {
                let doubled = if needed < usize::MAX / 2 {
                    needed * 2
                } else {
                    needed
                };
                if doubled > capacity {
                    Some(doubled)
                } else {
                    None
                }
            }
            Self::DoubleCapacity => {
                if needed <= capacity {
                    return None;
                }
                let doubled = capacity.saturating_mul(2);
                Some(if doubled > needed { doubled } else { needed })
            }
            Self::Exact => {
                if needed > capacity {
                    Some(needed)
                } else {
                    None
                }
            }
        }
    }
}
