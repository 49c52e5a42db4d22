// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::ArrayList, policy::GrowthPolicy, raw::RawArrayList};

// Core imports
use core::mem::{align_of, size_of};

impl<T: Copy> ArrayList<T> {
    /// Constructs an empty list with room for one element.
    ///
    /// Returns [`Error::InvalidHandle`] for zero-sized `T` and
    /// [`Error::OutOfMemory`] if the first slot cannot be allocated.
    #[inline]
    pub fn new() -> Result<Self, Error> {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Constructs an empty list that grows according to `policy`.
    #[inline]
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, Error> {
        RawArrayList::create(size_of::<T>(), align_of::<T>(), policy).map(Self::from_raw)
    }

    /// Constructs a list holding a copy of `src`.
    #[inline]
    pub fn from_slice(src: &[T]) -> Result<Self, Error> {
        let mut list = Self::new()?;
        list.extend_from_slice(src)?;
        Ok(list)
    }

    /// Copies the live elements into a new list with the same policy.
    ///
    /// The copy's capacity follows its own growth, not the source's.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut out = Self::with_policy(self.policy())?;
        out.extend_from_slice(self.as_slice())?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{ArrayList, GrowthPolicy};

    #[test]
    fn test_new_is_empty_with_one_slot() {
        let list: ArrayList<[u8; 3]> = ArrayList::new().unwrap();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 1);
        assert_eq!(list.policy(), GrowthPolicy::DoubleRequest);
    }

    #[test]
    fn test_try_clone_is_independent() {
        let a = ArrayList::from_slice(&[1i64, 2, 3]).unwrap();
        let mut b = a.try_clone().unwrap();
        b.set(0, 10).unwrap();
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[10, 2, 3]);
        assert_eq!(b.policy(), a.policy());
    }

    #[test]
    fn test_from_empty_slice() {
        let list = ArrayList::<u32>::from_slice(&[]).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 1);
    }
}
