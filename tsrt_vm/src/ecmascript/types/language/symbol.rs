// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::atomic::{AtomicU32, Ordering};

use super::String;

static NEXT_SYMBOL_ID: AtomicU32 = AtomicU32::new(1);

/// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
///
/// Every call to [`Symbol::new`] creates a distinct identity; two symbols
/// with the same description are still different values.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u32,
    description: Option<String>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(String::from),
        }
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }

    /// ### [20.4.3.3.1 SymbolDescriptiveString ( sym )](https://tc39.es/ecma262/#sec-symboldescriptivestring)
    pub fn descriptive_string(&self) -> String {
        let description = self.description.as_ref().map_or("", String::as_str);
        String::from(format!("Symbol({description})"))
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
