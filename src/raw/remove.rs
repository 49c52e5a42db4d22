// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawArrayList};

// Core imports
use core::ptr;

// External imports - log
use log::trace;

impl RawArrayList {
    /// Removes the element at `index`, shifting `(index, len)` one slot left.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`. Capacity is
    /// never reduced; see [`compact`](Self::compact).
    pub fn remove_at(&mut self, index: usize) -> Result<(), Error> {
        let store = self.usable()?;
        self.check_index(index)?;
        let len = self.len;

        // Shift left: [index+1..len) -> [index..len-1)
        if index + 1 < len {
            let tail = (len - index - 1) * self.element_size;
            trace!("array list: shifting {} slots left into {index}", len - index - 1);
            // SAFETY: `index + 1 < len <= cap`, so both ranges lie within the
            // initialized prefix; `ptr::copy` handles the overlap.
            unsafe { ptr::copy(self.slot(store, index + 1), self.slot(store, index), tail) };
        }

        self.len = len - 1;
        Ok(())
    }

    /// Sets `len = 0` without touching the store or capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrinks to `new_len` if `new_len < len()`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }
}
