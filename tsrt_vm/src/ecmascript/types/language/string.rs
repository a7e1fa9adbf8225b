// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::rc::Rc;

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
///
/// Immutable, shared UTF-8 text. All indices exposed to generated code count
/// Unicode code points, never bytes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct String(Rc<str>);

impl String {
    /// Longest text, in bytes, an operation that builds a string may produce.
    pub const MAX_LENGTH: usize = (1 << 29) - 24;

    pub fn new() -> Self {
        Self::from("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of code points.
    pub fn length(&self) -> usize {
        if self.0.is_ascii() {
            return self.0.len();
        }
        self.0.chars().count()
    }

    pub fn code_point_at_index(&self, index: usize) -> Option<char> {
        if self.0.is_ascii() {
            return self.0.as_bytes().get(index).map(|b| *b as char);
        }
        self.0.chars().nth(index)
    }

    /// Byte offset of the code point at `index`; indices at or past the end
    /// map to the byte length.
    pub(crate) fn byte_offset(&self, index: usize) -> usize {
        if self.0.is_ascii() {
            return index.min(self.0.len());
        }
        self.0
            .char_indices()
            .nth(index)
            .map_or(self.0.len(), |(offset, _)| offset)
    }

    /// Substring between two code point indices, `from <= to`.
    pub(crate) fn code_point_substring(&self, from: usize, to: usize) -> String {
        debug_assert!(from <= to);
        let start = self.byte_offset(from);
        let end = self.byte_offset(to);
        if start == 0 && end == self.0.len() {
            return self.clone();
        }
        String::from(&self.0[start..end])
    }

    /// Code point index of a byte offset that lies on a char boundary.
    pub(crate) fn code_point_index(&self, byte_offset: usize) -> usize {
        if self.0.is_ascii() {
            return byte_offset;
        }
        self.0[..byte_offset].chars().count()
    }
}

impl Default for String {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for String {
    fn from(value: &str) -> Self {
        Self(Rc::from(value))
    }
}

impl From<std::string::String> for String {
    fn from(value: std::string::String) -> Self {
        Self(Rc::from(value))
    }
}

impl From<char> for String {
    fn from(value: char) -> Self {
        let mut buffer = [0; 4];
        Self::from(&*value.encode_utf8(&mut buffer))
    }
}

impl AsRef<str> for String {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for String {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for String {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl std::fmt::Debug for String {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl std::fmt::Display for String {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
