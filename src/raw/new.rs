// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::GrowthPolicy, raw::RawArrayList};

// Core imports
use core::ptr::NonNull;

// External imports - alloc
use alloc::alloc::alloc;

// External imports - log
use log::{trace, warn};

impl RawArrayList {
    /// Creates an empty list of `element_size`-byte elements with one slot
    /// allocated.
    ///
    /// Returns [`Error::InvalidHandle`] if `element_size == 0` and
    /// [`Error::OutOfMemory`] if the first slot cannot be allocated.
    #[inline]
    pub fn new(element_size: usize) -> Result<Self, Error> {
        Self::create(element_size, 1, GrowthPolicy::default())
    }

    /// Like [`new`](Self::new), with the store aligned to `align`.
    ///
    /// `align` must be a power of two that divides `element_size`, so that
    /// every slot starts on an aligned address; otherwise
    /// [`Error::InvalidHandle`] is returned.
    #[inline]
    pub fn with_align(element_size: usize, align: usize) -> Result<Self, Error> {
        Self::create(element_size, align, GrowthPolicy::default())
    }

    /// Like [`new`](Self::new), growing according to `policy`.
    #[inline]
    pub fn with_policy(element_size: usize, policy: GrowthPolicy) -> Result<Self, Error> {
        Self::create(element_size, 1, policy)
    }

    /// Combines [`with_align`](Self::with_align) and
    /// [`with_policy`](Self::with_policy).
    #[inline]
    pub fn with_align_and_policy(
        element_size: usize,
        align: usize,
        policy: GrowthPolicy,
    ) -> Result<Self, Error> {
        Self::create(element_size, align, policy)
    }

    pub(crate) fn create(
        element_size: usize,
        align: usize,
        policy: GrowthPolicy,
    ) -> Result<Self, Error> {
        if element_size == 0 || !align.is_power_of_two() || element_size % align != 0 {
            return Err(Error::InvalidHandle);
        }

        // Not yet allocated: `store` stays `None` until the first slot exists,
        // so an early return drops nothing.
        let mut list = Self {
            store: None,
            element_size,
            align,
            len: 0,
            cap: 0,
            policy,
            released: false,
        };

        let layout = list.layout_for(1)?;
        // SAFETY: `layout` has a non-zero size because `element_size > 0`.
        let raw = unsafe { alloc(layout) };
        let Some(store) = NonNull::new(raw) else {
            warn!("array list: failed to allocate {} bytes", layout.size());
            return Err(Error::OutOfMemory);
        };

        list.store = Some(store);
        list.cap = 1;
        trace!("array list created: element_size {element_size}, align {align}");
        Ok(list)
    }

    /// Frees the backing store now instead of at drop.
    ///
    /// Afterwards `len` and `capacity` are `0` and every fallible operation
    /// returns [`Error::InvalidHandle`]. Calling it again is a no-op.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.free_store();
        self.released = true;
        self.len = 0;
        self.cap = 0;
        trace!("array list released");
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, GrowthPolicy, RawArrayList};

    #[test]
    fn test_with_align_validates_alignment() {
        let list = RawArrayList::with_align(8, 8).unwrap();
        assert_eq!(list.align(), 8);
        assert_eq!(list.as_ptr() as usize % 8, 0);

        assert_eq!(RawArrayList::with_align(8, 3).unwrap_err(), Error::InvalidHandle);
        assert_eq!(RawArrayList::with_align(6, 4).unwrap_err(), Error::InvalidHandle);
        assert_eq!(RawArrayList::with_align(0, 1).unwrap_err(), Error::InvalidHandle);
        assert_eq!(RawArrayList::with_align(4, 0).unwrap_err(), Error::InvalidHandle);
    }

    #[test]
    fn test_with_policy_keeps_policy() {
        let list = RawArrayList::with_policy(2, GrowthPolicy::Exact).unwrap();
        assert_eq!(list.policy(), GrowthPolicy::Exact);
        assert_eq!(list.capacity(), 1);
    }

    #[test]
    fn test_with_align_and_policy_keeps_both() {
        let mut list = RawArrayList::with_align_and_policy(8, 8, GrowthPolicy::Exact).unwrap();
        assert_eq!(list.align(), 8);
        assert_eq!(list.policy(), GrowthPolicy::Exact);
        list.add_last(&[1; 8]).unwrap();
        list.add_last(&[2; 8]).unwrap();
        assert_eq!(list.capacity(), 2);
        assert_eq!(list.as_ptr() as usize % 8, 0);

        assert_eq!(
            RawArrayList::with_align_and_policy(8, 16, GrowthPolicy::Exact).unwrap_err(),
            Error::InvalidHandle
        );
    }

    #[test]
    fn test_unrepresentable_first_slot_is_out_of_memory() {
        // One element larger than `isize::MAX` bytes cannot be laid out.
        let err = RawArrayList::new(usize::MAX).unwrap_err();
        assert_eq!(err, Error::OutOfMemory);
    }

    #[test]
    fn test_drop_after_release_does_not_double_free() {
        let mut list = RawArrayList::new(16).unwrap();
        list.add_last(&[1u8; 16]).unwrap();
        list.release();
        drop(list);
    }
}
