// This file is part of copy-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`ArrayList`](crate::ArrayList).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence, appending with
//!   [`push`](crate::ArrayList::push). The sequence's size hint is ignored, so
//!   capacity only grows with elements actually read. An allocation failure or
//!   a zero-sized element type surfaces as a custom deserializer error.
//!
//! The list's growth policy is not part of the serialized form; deserialized
//! lists use [`GrowthPolicy::default`](crate::GrowthPolicy::default).

// Crate imports
use crate::list::ArrayList;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Copy + Serialize> Serialize for ArrayList<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for ListVisitor<T>
where
    T: Deserialize<'de> + Copy,
{
    type Value = ArrayList<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("array or sequence of list elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = ArrayList::<T>::new().map_err(de::Error::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for ArrayList<T>
where
    T: Deserialize<'de> + Copy,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor::<T>(PhantomData))
    }
}
