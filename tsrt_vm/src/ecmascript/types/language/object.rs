// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_OBJECT_ID: AtomicU32 = AtomicU32::new(1);

/// Placeholder for an ordinary object. It carries no properties, only an
/// identity so that two distinct objects never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrdinaryObject(u32);

impl OrdinaryObject {
    pub fn new() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for OrdinaryObject {
    fn default() -> Self {
        Self::new()
    }
}
