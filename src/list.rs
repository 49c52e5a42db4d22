// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed `ArrayList` and its inherent API.
//!
//! `ArrayList<T>` is a thin, type-safe front over [`RawArrayList`]: the element
//! size and alignment come from `T`, and values go in and out by value instead
//! of as byte buffers. Capacity management, shifting and error reporting are
//! exactly those of the raw list.

mod access;
mod new;
mod push;
mod remove;

// Crate imports
use crate::{error::Error, policy::GrowthPolicy, raw::RawArrayList};

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// A growable, heap-backed list of `Copy` elements with fallible,
/// explicitly managed capacity.
///
/// # Invariants
///
/// - `0 <= len <= capacity` always holds.
/// - Only `[0, len)` is initialized and visible through
///   [`as_slice`](ArrayList::as_slice) and [`get`](ArrayList::get).
/// - Growth follows the list's [`GrowthPolicy`]; capacity shrinks only
///   through [`compact`](ArrayList::compact).
/// - Every fallible method either succeeds or returns an [`Error`] with the
///   list unchanged.
///
/// Zero-sized `T` is not supported: [`new`](ArrayList::new) returns
/// [`Error::InvalidHandle`].
///
/// # Examples
///
/// ```rust
/// use copy_array_list::ArrayList;
///
/// let mut list: ArrayList<i32> = ArrayList::new().unwrap();
/// for v in [1, 2, 3, 4] {
///     list.push(v).unwrap();
/// }
/// list.remove(2).unwrap();
/// list.insert(2, 7).unwrap();
/// assert_eq!(list.as_slice(), &[1, 2, 7, 4]);
///
/// list.compact().unwrap();
/// assert_eq!(list.capacity(), 4);
/// ```
pub struct ArrayList<T: Copy> {
    pub(crate) raw: RawArrayList,
    _marker: PhantomData<T>,
}

impl<T: Copy> ArrayList<T> {
    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of elements the list can hold without reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns `capacity - len`.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.raw.spare_capacity()
    }

    /// Returns the growth policy this list was created with.
    #[inline]
    pub const fn policy(&self) -> GrowthPolicy {
        self.raw.policy()
    }

    /// See [`RawArrayList::ensure_capacity`].
    #[inline]
    pub fn ensure_capacity(&mut self, needed: usize) -> Result<(), Error> {
        self.raw.ensure_capacity(needed)
    }

    /// See [`RawArrayList::ensure_length`].
    #[inline]
    pub fn ensure_length(&mut self, delta: usize) -> Result<(), Error> {
        self.raw.ensure_length(delta)
    }

    /// Shrinks capacity to exactly `len`. See [`RawArrayList::compact`].
    #[inline]
    pub fn compact(&mut self) -> Result<(), Error> {
        self.raw.compact()
    }

    /// Sets `len = 0`, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.raw.truncate(new_len);
    }

    /// Returns `true` if the list contains `x` (linear scan of the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    #[inline]
    pub(crate) fn from_raw(raw: RawArrayList) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Copy + Eq> Eq for ArrayList<T> {}
impl<T: Copy + Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Copy> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Copy> AsMut<[T]> for ArrayList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Copy> TryFrom<&[T]> for ArrayList<T> {
    type Error = Error;

    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::ArrayList;
    use crate::{Error, GrowthPolicy};
    use proptest::prelude::*;

    #[test]
    fn test_example_scenario() {
        let mut list: ArrayList<i32> = ArrayList::new().unwrap();
        for v in [1, 2, 3, 4] {
            list.push(v).unwrap();
        }
        assert_eq!(list.len(), 4);

        list.remove(2).unwrap();
        assert_eq!(list.as_slice(), &[1, 2, 4]);
        list.insert(2, 7).unwrap();
        assert_eq!(list.as_slice(), &[1, 2, 7, 4]);
        list.push(8).unwrap();
        assert_eq!(list.as_slice(), &[1, 2, 7, 4, 8]);
        assert_eq!(list.remove(5), Err(Error::IndexOutOfRange));
        assert_eq!(list.as_slice(), &[1, 2, 7, 4, 8]);
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.as_slice(), &[2, 7, 4, 8]);
    }

    #[test]
    fn test_zero_sized_elements_are_unsupported() {
        assert_eq!(ArrayList::<()>::new().unwrap_err(), Error::InvalidHandle);
    }

    #[test]
    fn test_append_order_and_growth() {
        let mut list: ArrayList<u64> = ArrayList::new().unwrap();
        for v in 0..100u64 {
            list.push(v * 3).unwrap();
            assert!(list.len() <= list.capacity());
        }
        assert_eq!(list.len(), 100);
        assert_eq!(list.capacity(), 200);
        for i in 0..100 {
            assert_eq!(list.get(i), Ok(i as u64 * 3));
        }
    }

    #[test]
    fn test_compact_keeps_values_and_order() {
        let mut list = ArrayList::from_slice(&[5u16, 6, 7, 8, 9]).unwrap();
        list.remove(1).unwrap();
        list.compact().unwrap();
        assert_eq!(list.capacity(), list.len());
        assert_eq!(list.as_slice(), &[5, 7, 8, 9]);
        list.compact().unwrap();
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn test_clear_truncate_contains() {
        let mut list = ArrayList::from_slice(&[1i8, 2, 3]).unwrap();
        assert!(list.contains(&2));
        list.truncate(1);
        assert!(!list.contains(&2));
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.spare_capacity(), list.capacity());
    }

    #[test]
    fn test_eq_hash_via_slice() {
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a = ArrayList::from_slice(&[1u32, 2, 3]).unwrap();
        let mut b = ArrayList::with_policy(GrowthPolicy::Exact).unwrap();
        b.extend_from_slice(&[1u32, 2, 3]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.capacity(), b.capacity());

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_debug_structure() {
        let list = ArrayList::from_slice(&[1u8, 2]).unwrap();
        let s = format!("{list:?}");
        assert!(s.contains("ArrayList"));
        assert!(s.contains("len: 2"));
        assert!(s.contains("elements: [1, 2]"));
    }

    #[test]
    fn test_try_from_slice() {
        let list = ArrayList::try_from(&[4u32, 5][..]).unwrap();
        assert_eq!(list.as_ref(), &[4, 5]);
    }

    #[test]
    fn test_padded_struct_elements() {
        #[derive(Copy, Clone, Debug, PartialEq)]
        struct Sample {
            tag: u8,
            value: u64,
        }

        let mut list: ArrayList<Sample> = ArrayList::new().unwrap();
        for i in 0..10u8 {
            list.push(Sample { tag: i, value: u64::from(i) << 40 }).unwrap();
        }
        list.insert(3, Sample { tag: 99, value: 1 }).unwrap();
        assert_eq!(list.get(3), Ok(Sample { tag: 99, value: 1 }));
        assert_eq!(list.get(4), Ok(Sample { tag: 3, value: 3 << 40 }));
        assert_eq!(list.as_ptr() as usize % core::mem::align_of::<Sample>(), 0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Insert(usize, i32),
        Remove(usize),
        Set(usize, i32),
        Pop,
        EnsureCapacity(usize),
        Compact,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<i32>().prop_map(Op::Push),
            2 => (0usize..40, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => (0usize..40).prop_map(Op::Remove),
            1 => (0usize..40, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
            1 => Just(Op::Pop),
            1 => (0usize..64).prop_map(Op::EnsureCapacity),
            1 => Just(Op::Compact),
        ]
    }

    fn policy() -> impl Strategy<Value = GrowthPolicy> {
        prop_oneof![
            Just(GrowthPolicy::DoubleRequest),
            Just(GrowthPolicy::DoubleCapacity),
            Just(GrowthPolicy::Exact),
        ]
    }

    proptest! {
        #[test]
        fn prop_matches_vec_model(policy in policy(), ops in prop::collection::vec(op(), 0..80)) {
            let mut list: ArrayList<i32> = ArrayList::with_policy(policy).unwrap();
            let mut model: Vec<i32> = Vec::new();

            for op in ops {
                let cap_before = list.capacity();
                match op {
                    Op::Push(v) => {
                        list.push(v).unwrap();
                        model.push(v);
                    }
                    Op::Insert(i, v) => {
                        let res = list.insert(i, v);
                        if i <= model.len() {
                            prop_assert_eq!(res, Ok(()));
                            model.insert(i, v);
                        } else {
                            prop_assert_eq!(res, Err(Error::IndexOutOfRange));
                            prop_assert_eq!(list.capacity(), cap_before);
                        }
                    }
                    Op::Remove(i) => {
                        let res = list.remove(i);
                        if i < model.len() {
                            prop_assert_eq!(res, Ok(model.remove(i)));
                        } else {
                            prop_assert_eq!(res, Err(Error::IndexOutOfRange));
                        }
                        prop_assert_eq!(list.capacity(), cap_before);
                    }
                    Op::Set(i, v) => {
                        let res = list.set(i, v);
                        if i < model.len() {
                            prop_assert_eq!(res, Ok(()));
                            model[i] = v;
                        } else {
                            prop_assert_eq!(res, Err(Error::IndexOutOfRange));
                        }
                    }
                    Op::Pop => {
                        prop_assert_eq!(list.pop(), model.pop());
                    }
                    Op::EnsureCapacity(n) => {
                        list.ensure_capacity(n).unwrap();
                        prop_assert!(list.capacity() >= n);
                        prop_assert!(list.capacity() >= cap_before);
                    }
                    Op::Compact => {
                        list.compact().unwrap();
                        prop_assert_eq!(list.capacity(), model.len());
                    }
                }
                prop_assert!(list.len() <= list.capacity());
                prop_assert_eq!(list.as_slice(), &model[..]);
            }
        }

        #[test]
        fn prop_set_get_roundtrip(
            values in prop::collection::vec(any::<u64>(), 1..30),
            idx in any::<prop::sample::Index>(),
            v in any::<u64>(),
        ) {
            let mut list = ArrayList::from_slice(&values).unwrap();
            let i = idx.index(values.len());
            list.set(i, v).unwrap();
            prop_assert_eq!(list.get(i), Ok(v));
            prop_assert_eq!(list.get(values.len()), Err(Error::IndexOutOfRange));
        }
    }
}
