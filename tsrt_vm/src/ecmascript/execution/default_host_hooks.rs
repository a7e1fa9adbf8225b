// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::agent::HostHooks;

/// Host hooks writing to the process' standard output and error streams.
#[derive(Debug, Default)]
pub struct DefaultHostHooks;

impl HostHooks for DefaultHostHooks {
    fn print(&self, line: &str) {
        println!("{line}");
    }

    fn print_error(&self, line: &str) {
        eprintln!("{line}");
    }
}
