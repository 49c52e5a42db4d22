// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `copy-array-list`
//!
//! A `no_std` (+ `alloc`), growable, contiguous list for plain-old-data
//! elements, with **explicit, fallible capacity management**.
//!
//! Two types share one implementation:
//!
//! - [`RawArrayList`]: element size (and alignment) chosen at runtime;
//!   elements are copied in and out as byte buffers. Slot `i` lives at byte
//!   offset `i * element_size`.
//! - [`ArrayList<T>`]: the typed front for `T: Copy`, with element size and
//!   alignment taken from `T`.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You need every allocation failure reported as a value instead of an abort.
//! - You want to choose exactly when capacity grows and when it is given back.
//! - You store elements whose size is only known at runtime.
//!
//! For general-purpose use, `Vec` is the better fit.
//!
//! ## Semantics
//!
//! - A new list has `len == 0` and `capacity == 1`.
//! - Only `[0, len)` is live; `[len, capacity)` is never read.
//! - Every fallible operation returns [`Error`] and leaves the list unchanged
//!   on failure, including on [`Error::OutOfMemory`].
//! - Growth follows a [`GrowthPolicy`]. The default,
//!   [`GrowthPolicy::DoubleRequest`], doubles the *requested* size rather
//!   than the current capacity.
//! - Removal never shrinks capacity; only [`compact`](RawArrayList::compact)
//!   does.
//! - Insertion and removal shift the tail with an overlap-safe copy.
//! - Index errors are reported, never panicked on.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `ArrayList<T>` and
//!     [`GrowthPolicy`].
//!
//! ## Logging
//!
//! Reallocations and compactions are reported through the [`log`] facade at
//! `debug` level, allocation failures at `warn`, shifts at `trace`. Install
//! any `log` implementation to see them.
//!
//! ## Example
//!
//! ```rust
//! use copy_array_list::{ArrayList, Error};
//!
//! let mut list: ArrayList<u32> = ArrayList::new().unwrap();
//! list.extend_from_slice(&[1, 2, 3, 4]).unwrap();
//! list.remove(2).unwrap();
//! list.insert(2, 7).unwrap();
//! assert_eq!(list.as_slice(), &[1, 2, 7, 4]);
//! assert_eq!(list.remove(4), Err(Error::IndexOutOfRange));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod list;
mod policy;
mod raw;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use error::Error;
pub use list::ArrayList;
pub use policy::GrowthPolicy;
pub use raw::RawArrayList;
