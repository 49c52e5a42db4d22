// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`RawArrayList`](crate::RawArrayList) and
//! [`ArrayList`](crate::ArrayList).
//!
//! Every fallible operation reports exactly one of these causes and leaves the
//! list in its pre-call state. They are `Copy` and implement
//! `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on an array list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The list is unusable: it was created with a zero element size or an
    /// invalid alignment, or it has already been released.
    InvalidHandle,
    /// The list is alive but its backing store is missing.
    ///
    /// No code path in this crate produces such a list; the check exists so a
    /// corrupted list fails instead of dereferencing a missing buffer.
    CorruptStorage,
    /// An allocation or reallocation failed, or the requested byte size is not
    /// representable. The list keeps its previous store and capacity.
    OutOfMemory,
    /// `len + delta` does not fit in a `usize`. Nothing was changed.
    LengthOverflow,
    /// The index exceeds the bound of the operation (`< len` for access and
    /// removal, `<= len` for insertion).
    IndexOutOfRange,
    /// A required element or output buffer was empty.
    NullElement,
    /// The byte copy could not be performed because the caller's buffer does
    /// not span exactly one element.
    CopyFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHandle => f.write_str("invalid list handle"),
            Self::CorruptStorage => f.write_str("list storage is missing"),
            Self::OutOfMemory => f.write_str("out of memory"),
            Self::LengthOverflow => f.write_str("length overflow"),
            Self::IndexOutOfRange => f.write_str("index out of range"),
            Self::NullElement => f.write_str("element buffer is empty"),
            Self::CopyFailure => f.write_str("element copy failed"),
        }
    }
}

impl CoreError for Error {}
