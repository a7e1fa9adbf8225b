// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dynamically-typed value runtime for code transpiled from TypeScript.
//!
//! The crate provides the polymorphic [`Value`](ecmascript::types::Value)
//! representation together with the abstract operations (coercions, the
//! `+` operator, loose equality) and the built-in method surface of the
//! Number, String, Boolean and Array kinds that generated code calls into.

pub mod ecmascript;

pub use ecmascript::{
    abstract_operations::{
        operators::add,
        testing_and_comparison::{is_loosely_equal, is_loosely_not_equal, is_strictly_equal},
        type_conversion::{to_boolean, to_number, to_primitive, to_string},
    },
    builtins::{
        Array, ArgumentsList,
        console::Console,
        global_object::{
            INFINITY, NAN, get_global, is_finite, is_nan, parse_float, parse_int, type_of,
        },
    },
    execution::{DefaultHostHooks, ExceptionType, HostHooks, JsError, JsResult, Options},
    types::{Function, Number, OrdinaryObject, String, Symbol, Tag, Value},
};
