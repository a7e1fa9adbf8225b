// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.4.2 Array Exotic Objects](https://tc39.es/ecma262/#sec-array-exotic-objects)
//!
//! The ordered, growable sequence of values behind `Value::Array`. Indexed
//! access and length live here; the prototype methods are in
//! [`array_prototype`](super::indexed_collections::array_objects::array_prototype).

use core::ops::RangeInclusive;

use crate::ecmascript::types::Value;

pub(crate) static ARRAY_INDEX_RANGE: RangeInclusive<i64> = 0..=(i64::pow(2, 32) - 2);

/// Most `undefined` slots a single out-of-bounds write may add. Elements are
/// stored densely, so a far write would otherwise allocate every hole.
pub(crate) const MAX_HOLE_FILL: usize = 1 << 20;

/// Owns its elements. Clones are deep: mutating a clone never shows through
/// the original.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    pub(crate) elements: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new array with the given elements.
    ///
    /// This is equal to the [CreateArrayFromList](https://tc39.es/ecma262/#sec-createarrayfromlist)
    /// abstract operation.
    pub fn from_slice(elements: &[Value]) -> Self {
        Self {
            elements: elements.to_vec(),
        }
    }

    pub fn length(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, or `undefined` when the index is out of range.
    pub fn get(&self, index: usize) -> Value {
        self.elements.get(index).cloned().unwrap_or_default()
    }

    /// Writes `value` at `index`. Writing past the end grows the array and
    /// fills the gap with `undefined`, as an indexed assignment does.
    ///
    /// A write past the last valid array index, or one that would leave a
    /// gap wider than [`MAX_HOLE_FILL`], is ignored.
    pub fn set(&mut self, index: usize, value: Value) {
        let len = self.elements.len();
        if index >= len {
            if !ARRAY_INDEX_RANGE.contains(&(index as i64)) {
                log::warn!("ignoring write to array index {index}");
                return;
            }
            if index - len > MAX_HOLE_FILL {
                log::warn!("ignoring write to array index {index}, {len} elements");
                return;
            }
            self.elements.resize(index + 1, Value::Undefined);
        }
        self.elements[index] = value;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.elements
    }
}

impl From<Vec<Value>> for Array {
    fn from(elements: Vec<Value>) -> Self {
        Self { elements }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
