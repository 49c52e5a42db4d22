// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawArrayList};

// Core imports
use core::ptr::NonNull;

// External imports - alloc
use alloc::alloc::{alloc, dealloc, realloc};

// External imports - log
use log::{debug, warn};

impl RawArrayList {
    /// Guarantees `capacity() >= needed` afterwards, growing according to the
    /// list's [`GrowthPolicy`](crate::GrowthPolicy).
    ///
    /// With the default `DoubleRequest` policy the request is doubled before it
    /// is compared with the current capacity, so this may grow a list that
    /// already has `needed` slots.
    ///
    /// On [`Error::OutOfMemory`] the list keeps its previous store, capacity and
    /// contents.
    pub fn ensure_capacity(&mut self, needed: usize) -> Result<(), Error> {
        let store = self.usable()?;
        match self.policy.target(self.cap, needed) {
            Some(target) => self.reallocate(store, target),
            None => Ok(()),
        }
    }

    /// Guarantees room for `delta` more elements beyond `len()`.
    ///
    /// Returns [`Error::LengthOverflow`] without touching the list if
    /// `len() + delta` does not fit in a `usize`.
    pub fn ensure_length(&mut self, delta: usize) -> Result<(), Error> {
        self.usable()?;
        let needed = self.len.checked_add(delta).ok_or(Error::LengthOverflow)?;
        self.ensure_capacity(needed)
    }

    /// Shrinks the store to exactly `len()` slots.
    ///
    /// A no-op when `capacity() == len()`. Compacting an empty list frees the
    /// store entirely; the next growth allocates a new one.
    pub fn compact(&mut self) -> Result<(), Error> {
        let store = self.usable()?;
        if self.len == self.cap {
            return Ok(());
        }
        if self.len == 0 {
            let layout = self.layout_for(self.cap)?;
            // SAFETY: `cap > 0` here, so `store` is a live allocation made with
            // exactly `layout`; it is replaced below and never used again.
            unsafe { dealloc(store.as_ptr(), layout) };
            self.store = Some(self.dangling());
            debug!("array list compacted: capacity {} -> 0", self.cap);
            self.cap = 0;
            return Ok(());
        }
        self.reallocate(store, self.len)
    }

    /// Moves the store to a block of exactly `new_cap` slots, keeping the first
    /// `min(cap, new_cap)` slots' bytes.
    ///
    /// `new_cap` must be non-zero. Nothing changes on failure.
    fn reallocate(&mut self, store: NonNull<u8>, new_cap: usize) -> Result<(), Error> {
        let new_layout = match self.layout_for(new_cap) {
            Ok(layout) => layout,
            Err(err) => {
                warn!(
                    "array list: {new_cap} slots of {} bytes are not representable",
                    self.element_size
                );
                return Err(err);
            }
        };

        let raw = if self.cap == 0 {
            // SAFETY: `new_cap > 0` and `element_size > 0`, so the layout is
            // non-zero sized.
            unsafe { alloc(new_layout) }
        } else {
            let old_layout = self.layout_for(self.cap)?;
            // SAFETY: `store` was allocated with `old_layout`, the new size is
            // non-zero, and `layout_for` checked it does not overflow `isize`
            // once rounded to `align`.
            unsafe { realloc(store.as_ptr(), old_layout, new_layout.size()) }
        };

        let Some(new_store) = NonNull::new(raw) else {
            // `realloc` leaves the old block untouched on failure.
            warn!(
                "array list: failed to reallocate {} -> {} slots ({} bytes)",
                self.cap,
                new_cap,
                new_layout.size()
            );
            return Err(Error::OutOfMemory);
        };

        debug!("array list reallocated: capacity {} -> {new_cap}", self.cap);
        self.store = Some(new_store);
        self.cap = new_cap;
        Ok(())
    }

    /// A non-null pointer aligned to `align`, used as the store of a
    /// zero-capacity list. Never dereferenced.
    fn dangling(&self) -> NonNull<u8> {
        // SAFETY: `align` is a power of two, hence non-zero.
        unsafe { NonNull::new_unchecked(self.align as *mut u8) }
    }
}
