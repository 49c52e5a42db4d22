// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawArrayList};

// Core imports
use core::ptr;

// External imports - log
use log::trace;

impl RawArrayList {
    /// Appends `element` after the last live slot, growing if needed.
    ///
    /// Fails with [`Error::NullElement`] / [`Error::CopyFailure`] for a bad
    /// buffer, [`Error::LengthOverflow`] or [`Error::OutOfMemory`] when room
    /// cannot be made. On error `len()` and the contents are unchanged.
    #[inline]
    pub fn add_last(&mut self, element: &[u8]) -> Result<(), Error> {
        self.usable()?;
        self.check_element(element.len())?;
        // SAFETY: `element` spans exactly `element_size` readable bytes and is
        // borrowed separately from `self`.
        unsafe { self.add_last_from(element.as_ptr()) }
    }

    /// Inserts `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len()` appends; `index > len()` is
    /// [`Error::IndexOutOfRange`] and is rejected before any growth.
    #[inline]
    pub fn add_at(&mut self, index: usize, element: &[u8]) -> Result<(), Error> {
        self.usable()?;
        self.check_element(element.len())?;
        // SAFETY: as in `add_last`.
        unsafe { self.add_at_from(index, element.as_ptr()) }
    }

    /// Appends every element packed in `bytes`, reserving room once.
    ///
    /// `bytes.len()` must be a multiple of `element_size()`, otherwise
    /// [`Error::CopyFailure`]. All-or-nothing: on error nothing is appended.
    pub fn extend_from_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.usable()?;
        if bytes.len() % self.element_size != 0 {
            return Err(Error::CopyFailure);
        }
        let count = bytes.len() / self.element_size;
        // SAFETY: `bytes` spans `count * element_size` readable bytes.
        unsafe { self.extend_from_raw(bytes.as_ptr(), count) }
    }

    /// # Safety
    ///
    /// `src` must be valid for reads of `element_size` bytes and must not point
    /// into this list's store (which may be reallocated before the read).
    pub(crate) unsafe fn add_last_from(&mut self, src: *const u8) -> Result<(), Error> {
        self.ensure_length(1)?;
        let store = self.usable()?;
        let index = self.len;
        // SAFETY: `ensure_length(1)` guarantees `index < cap`; the caller
        // guarantees `src`.
        unsafe { self.write_slot(store, index, src) };
        // Only counted once the slot holds the element.
        self.len = index + 1;
        Ok(())
    }

    /// # Safety
    ///
    /// Same contract as [`add_last_from`](Self::add_last_from).
    pub(crate) unsafe fn add_at_from(&mut self, index: usize, src: *const u8) -> Result<(), Error> {
        self.usable()?;
        if index > self.len {
            return Err(Error::IndexOutOfRange);
        }
        if index == self.len {
            // SAFETY: forwarded contract.
            return unsafe { self.add_last_from(src) };
        }

        self.ensure_length(1)?;
        let store = self.usable()?;
        let len = self.len;
        let tail = (len - index) * self.element_size;

        // Shift right: [index..len) -> [index+1..len+1). The ranges overlap, so
        // this must be a memmove.
        trace!("array list: shifting {} slots right from {index}", len - index);
        // SAFETY: `len + 1 <= cap` after `ensure_length(1)`, so both ranges lie
        // within the store; `ptr::copy` handles the overlap.
        unsafe { ptr::copy(self.slot(store, index), self.slot(store, index + 1), tail) };
        // SAFETY: `index < cap`; the caller guarantees `src`.
        unsafe { self.write_slot(store, index, src) };

        self.len = len + 1;
        Ok(())
    }

    /// # Safety
    ///
    /// `src` must be valid for reads of `count * element_size` bytes and must
    /// not point into this list's store.
    pub(crate) unsafe fn extend_from_raw(&mut self, src: *const u8, count: usize) -> Result<(), Error> {
        self.usable()?;
        if count == 0 {
            return Ok(());
        }
        self.ensure_length(count)?;
        let store = self.usable()?;
        let len = self.len;
        // SAFETY: `len + count <= cap` after `ensure_length(count)`, and the
        // caller guarantees `src` for `count` elements outside the store.
        unsafe {
            ptr::copy_nonoverlapping(src, self.slot(store, len), count * self.element_size)
        };
        self.len = len + count;
        Ok(())
    }
}
