// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawArrayList};

// Core imports
use core::ptr::{self, NonNull};

impl RawArrayList {
    /// Copies `element` into slot `index`.
    ///
    /// - [`Error::IndexOutOfRange`] if `index >= len()`; this never grows the list.
    /// - [`Error::NullElement`] if `element` is empty.
    /// - [`Error::CopyFailure`] if `element.len() != element_size()`.
    #[inline]
    pub fn set(&mut self, index: usize, element: &[u8]) -> Result<(), Error> {
        self.usable()?;
        self.check_index(index)?;
        self.check_element(element.len())?;
        // SAFETY: `element` spans exactly `element_size` readable bytes.
        unsafe { self.set_from(index, element.as_ptr()) }
    }

    /// Copies slot `index` into `out`.
    ///
    /// Same errors as [`set`](Self::set). `out` is only written on success.
    #[inline]
    pub fn get(&self, index: usize, out: &mut [u8]) -> Result<(), Error> {
        self.usable()?;
        self.check_index(index)?;
        self.check_element(out.len())?;
        // SAFETY: `out` spans exactly `element_size` writable bytes.
        unsafe { self.get_into(index, out.as_mut_ptr()) }
    }

    /// Returns the live prefix of the store as bytes (`len() * element_size()`).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self.store {
            // SAFETY: the first `len * element_size` bytes are initialized and
            // lie within the allocation (or are empty for a dangling store).
            Some(store) => unsafe {
                core::slice::from_raw_parts(store.as_ptr(), self.len * self.element_size)
            },
            None => &[],
        }
    }

    /// Returns a raw pointer to the start of the store, or null once released.
    ///
    /// Any call that grows or compacts the list may move the store and
    /// invalidate this pointer. Only the first `len() * element_size()` bytes
    /// may be read through it.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        match self.store {
            Some(store) => store.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Mutable counterpart of [`as_ptr`](Self::as_ptr), with the same
    /// invalidation rules. Writes past `len()` are not reflected in the list.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        match self.store {
            Some(store) => store.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Copies `element_size` bytes from `src` into slot `index`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `element_size` bytes and must not point
    /// into this list's store.
    pub(crate) unsafe fn set_from(&mut self, index: usize, src: *const u8) -> Result<(), Error> {
        let store = self.usable()?;
        self.check_index(index)?;
        // SAFETY: `index < len <= cap`, and the caller guarantees `src`.
        unsafe { self.write_slot(store, index, src) };
        Ok(())
    }

    /// Copies slot `index` out to `dst`.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of `element_size` bytes and must not
    /// point into this list's store.
    pub(crate) unsafe fn get_into(&self, index: usize, dst: *mut u8) -> Result<(), Error> {
        let store = self.usable()?;
        self.check_index(index)?;
        // SAFETY: `index < len`, so the slot is initialized and in bounds; the
        // caller guarantees `dst` and that the ranges are disjoint.
        unsafe { ptr::copy_nonoverlapping(self.slot(store, index), dst, self.element_size) };
        Ok(())
    }

    /// # Safety
    ///
    /// `store` is the current store, `index < cap`, and `src` is valid for
    /// reads of `element_size` bytes outside the store.
    #[inline]
    pub(crate) unsafe fn write_slot(&mut self, store: NonNull<u8>, index: usize, src: *const u8) {
        // SAFETY: upheld by the caller.
        unsafe { ptr::copy_nonoverlapping(src, self.slot(store, index), self.element_size) };
    }
}
