// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::ArrayList};

// Core imports
use core::{mem::MaybeUninit, ptr};

impl<T: Copy> ArrayList<T> {
    /// Returns a copy of the element at `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, Error> {
        let mut out = MaybeUninit::<T>::uninit();
        // SAFETY: `out` is valid for `size_of::<T>() == element_size` bytes and
        // lives outside the store.
        unsafe { self.raw.get_into(index, out.as_mut_ptr().cast::<u8>())? };
        // SAFETY: `get_into` succeeded, so every byte of `out` was copied from a
        // live slot, which holds a `T`.
        Ok(unsafe { out.assume_init() })
    }

    /// Overwrites the element at `index` with `value`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`; never grows.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), Error> {
        // SAFETY: `value` is a local `T`, readable for `element_size` bytes and
        // disjoint from the store.
        unsafe { self.raw.set_from(index, ptr::from_ref(&value).cast::<u8>()) }
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self.raw.store {
            // SAFETY: the store is aligned for `T`, and its first `len` slots
            // hold initialized `T`s. A zero-capacity store is a dangling,
            // aligned pointer with `len == 0`.
            Some(store) => unsafe {
                core::slice::from_raw_parts(store.as_ptr().cast::<T>(), self.raw.len)
            },
            None => &[],
        }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.raw.store {
            // SAFETY: as in `as_slice`; `&mut self` gives exclusive access.
            Some(store) => unsafe {
                core::slice::from_raw_parts_mut(store.as_ptr().cast::<T>(), self.raw.len)
            },
            None => &mut [],
        }
    }

    /// Returns a raw pointer to the start of the store.
    ///
    /// Only the first `len` elements may be read through it. Any call that
    /// grows or compacts the list may move the store and invalidate the
    /// pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw.as_ptr().cast::<T>()
    }

    /// Mutable counterpart of [`as_ptr`](Self::as_ptr), with the same
    /// invalidation rules.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.as_mut_ptr().cast::<T>()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<T> {
        self.as_slice().first().copied()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.as_slice().last().copied()
    }
}
