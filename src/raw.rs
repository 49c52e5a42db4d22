// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The type-erased `RawArrayList` and its inherent API.
//!
//! `RawArrayList` owns one contiguous heap block sized for `capacity` slots of
//! `element_size` bytes each, and tracks how many leading slots (`len`) are
//! live. Elements go in and out as byte buffers; slot `i` lives at byte offset
//! `i * element_size`.
//!
//! Every operation validates its arguments and returns a specific
//! [`Error`](crate::Error) instead of panicking. A failed operation leaves the
//! list exactly as it was.

mod access;
mod capacity;
mod insert;
mod new;
mod remove;

// Crate imports
use crate::{error::Error, policy::GrowthPolicy};

// Core imports
use core::{alloc::Layout, fmt, ptr::NonNull};

// External imports - alloc
use alloc::alloc::dealloc;

/// A growable list of fixed-size, byte-copied elements whose size is only
/// known at runtime.
///
/// # Layout and invariants
///
/// - `store` is a single allocation of `cap * element_size` bytes aligned to
///   `align`, or a dangling, well-aligned pointer when `cap == 0` (only after
///   compacting an empty list).
/// - `0 <= len <= cap` always holds.
/// - Bytes of slots `[0, len)` are initialized; slots `[len, cap)` are never
///   read.
/// - Capacity only shrinks through [`compact`](RawArrayList::compact).
/// - Once [`release`](RawArrayList::release)d, `store` is `None` and every
///   fallible operation returns [`Error::InvalidHandle`].
///
/// # Examples
///
/// ```rust
/// use copy_array_list::RawArrayList;
///
/// let mut list = RawArrayList::new(4).unwrap();
/// list.add_last(&7u32.to_ne_bytes()).unwrap();
/// list.add_last(&9u32.to_ne_bytes()).unwrap();
///
/// let mut out = [0u8; 4];
/// list.get(1, &mut out).unwrap();
/// assert_eq!(u32::from_ne_bytes(out), 9);
/// ```
pub struct RawArrayList {
    pub(crate) store: Option<NonNull<u8>>,
    pub(crate) element_size: usize,
    pub(crate) align: usize,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    pub(crate) policy: GrowthPolicy,
    pub(crate) released: bool,
}

// SAFETY: the store is an exclusively owned heap block of plain bytes with no
// interior mutability; moving or sharing the owner is as safe as for `Vec<u8>`.
unsafe impl Send for RawArrayList {}
// SAFETY: `&RawArrayList` only permits reads of the owned block.
unsafe impl Sync for RawArrayList {}

impl RawArrayList {
    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots the store can hold without reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns `capacity - len`.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.cap - self.len
    }

    /// Returns the size in bytes of one element.
    #[inline]
    pub const fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns the alignment of the backing store.
    #[inline]
    pub const fn align(&self) -> usize {
        self.align
    }

    /// Returns the growth policy this list was created with.
    #[inline]
    pub const fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns `true` if the list has a store and has not been released.
    #[inline]
    pub const fn is_usable(&self) -> bool {
        !self.released && self.store.is_some()
    }

    /// Returns the store, or the reason the list cannot be used.
    #[inline]
    pub(crate) fn usable(&self) -> Result<NonNull<u8>, Error> {
        if self.released {
            return Err(Error::InvalidHandle);
        }
        self.store.ok_or(Error::CorruptStorage)
    }

    #[inline]
    pub(crate) fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange);
        }
        Ok(())
    }

    /// Validates a caller buffer that must hold exactly one element.
    #[inline]
    pub(crate) fn check_element(&self, buf_len: usize) -> Result<(), Error> {
        if buf_len == 0 {
            return Err(Error::NullElement);
        }
        if buf_len != self.element_size {
            return Err(Error::CopyFailure);
        }
        Ok(())
    }

    /// Layout of a store holding `slots` elements.
    #[inline]
    pub(crate) fn layout_for(&self, slots: usize) -> Result<Layout, Error> {
        let bytes = slots
            .checked_mul(self.element_size)
            .ok_or(Error::OutOfMemory)?;
        Layout::from_size_align(bytes, self.align).map_err(|_| Error::OutOfMemory)
    }

    /// Pointer to the first byte of slot `index`.
    ///
    /// # Safety
    ///
    /// `store` must be this list's current store and `index <= cap`.
    #[inline]
    pub(crate) unsafe fn slot(&self, store: NonNull<u8>, index: usize) -> *mut u8 {
        // SAFETY: `index <= cap`, so the offset stays within (or one past) the
        // allocation of `cap * element_size` bytes.
        unsafe { store.as_ptr().add(index * self.element_size) }
    }

    /// Frees the store, if one is allocated.
    fn free_store(&mut self) {
        if let Some(store) = self.store.take() {
            if self.cap == 0 {
                return;
            }
            if let Ok(layout) = self.layout_for(self.cap) {
                // SAFETY: `store` was allocated with exactly this layout and is
                // not used again; `take` cleared our only handle to it.
                unsafe { dealloc(store.as_ptr(), layout) };
            }
        }
    }
}

impl Drop for RawArrayList {
    fn drop(&mut self) {
        self.free_store();
    }
}

impl fmt::Debug for RawArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArrayList")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("element_size", &self.element_size)
            .field("policy", &self.policy)
            .field("usable", &self.is_usable())
            .finish()
    }
}

impl PartialEq for RawArrayList {
    fn eq(&self, other: &Self) -> bool {
        self.element_size == other.element_size && self.as_bytes() == other.as_bytes()
    }
}
impl Eq for RawArrayList {}
