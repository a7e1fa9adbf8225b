// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod function;
mod number;
mod object;
mod string;
mod symbol;
mod value;

pub use function::{Callable, Function};
pub use number::Number;
pub use object::OrdinaryObject;
pub use string::String;
pub use symbol::Symbol;
pub use value::{Tag, Value};
