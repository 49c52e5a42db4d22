// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::ArrayList};

// Core imports
use core::ptr;

impl<T: Copy> ArrayList<T> {
    /// Appends `value`, growing according to the list's policy.
    ///
    /// On [`Error::OutOfMemory`] or [`Error::LengthOverflow`] the list is
    /// unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        // SAFETY: `value` is a local `T`, disjoint from the store.
        unsafe { self.raw.add_last_from(ptr::from_ref(&value).cast::<u8>()) }
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index == len` appends. Returns [`Error::IndexOutOfRange`] if
    /// `index > len`, without growing.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        // SAFETY: `value` is a local `T`, disjoint from the store.
        unsafe { self.raw.add_at_from(index, ptr::from_ref(&value).cast::<u8>()) }
    }

    /// Appends all of `src`, reserving room once. All-or-nothing.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        // SAFETY: `src` spans `src.len()` `T`s and cannot alias the store,
        // which is only reachable through `&mut self`.
        unsafe { self.raw.extend_from_raw(src.as_ptr().cast::<u8>(), src.len()) }
    }
}
