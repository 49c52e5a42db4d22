// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::ArrayList};

impl<T: Copy> ArrayList<T> {
    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`. Capacity is kept.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        let out = self.get(index)?;
        self.raw.remove_at(index)?;
        Ok(out)
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        let out = self.get(last).ok()?;
        self.raw.truncate(last);
        Some(out)
    }
}
