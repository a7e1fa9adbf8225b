// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [20 Fundamental Objects](https://tc39.es/ecma262/#sec-fundamental-objects)
//!
//! Built-in method surface of the primitive kinds and of Array, plus the
//! machinery generated code uses to call those methods by name when the
//! receiver's kind is only known at runtime.

mod array;
pub mod console;
pub mod fundamental_objects;
pub mod global_object;
pub mod indexed_collections;
pub mod numbers_and_dates;
pub mod text_processing;

pub use array::Array;

use fundamental_objects::boolean_objects::boolean_prototype::BooleanPrototype;
use indexed_collections::array_objects::array_prototype::ArrayPrototype;
use numbers_and_dates::number_objects::number_prototype::NumberPrototype;
use text_processing::string_objects::string_prototype::StringPrototype;

use crate::ecmascript::{
    execution::{JsError, JsResult},
    types::Value,
};

/// Arguments of a call. Reading past the end yields `undefined`, as it does
/// for a JavaScript function called with fewer arguments than it declares.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsList<'a>(&'a [Value]);

impl<'a> ArgumentsList<'a> {
    pub fn get(&self, index: usize) -> Value {
        self.0.get(index).cloned().unwrap_or_default()
    }

    /// Like [`ArgumentsList::get`] but distinguishes a missing argument.
    pub fn get_if_present(&self, index: usize) -> Option<&'a Value> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Value> {
        self.0.iter()
    }

    /// Arguments from `index` onwards, for rest parameters.
    pub fn rest(&self, index: usize) -> &'a [Value] {
        self.0.get(index..).unwrap_or(&[])
    }
}

impl<'a> From<&'a [Value]> for ArgumentsList<'a> {
    fn from(value: &'a [Value]) -> Self {
        Self(value)
    }
}

pub type RegularFn = fn(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value>;
pub type MutatingFn = fn(this_value: &mut Value, arguments: ArgumentsList) -> JsResult<Value>;

#[derive(Clone, Copy)]
pub enum Behaviour {
    /// Reads the receiver.
    Regular(RegularFn),
    /// Mutates the receiver in place (Array mutators).
    Mutating(MutatingFn),
}

impl Behaviour {
    fn call(self, this_value: &mut Value, arguments: ArgumentsList) -> JsResult<Value> {
        match self {
            Behaviour::Regular(behaviour) => behaviour(this_value, arguments),
            Behaviour::Mutating(behaviour) => behaviour(this_value, arguments),
        }
    }
}

impl std::fmt::Debug for Behaviour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Behaviour::Regular(_) => f.write_str("Behaviour::Regular"),
            Behaviour::Mutating(_) => f.write_str("Behaviour::Mutating"),
        }
    }
}

pub trait Builtin {
    const NAME: &'static str;
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;
}

/// A prototype method table entry.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinMethod {
    pub name: &'static str,
    pub length: u8,
    pub behaviour: Behaviour,
}

impl BuiltinMethod {
    pub const fn of<T: Builtin>() -> Self {
        Self {
            name: T::NAME,
            length: T::LENGTH,
            behaviour: T::BEHAVIOUR,
        }
    }
}

fn prototype_methods(value: &Value) -> &'static [BuiltinMethod] {
    match value {
        Value::Boolean(_) => BooleanPrototype::METHODS,
        Value::Number(_) => NumberPrototype::METHODS,
        Value::String(_) => StringPrototype::METHODS,
        Value::Array(_) => ArrayPrototype::METHODS,
        Value::Undefined
        | Value::Null
        | Value::Symbol(_)
        | Value::Object(_)
        | Value::Function(_) => &[],
    }
}

fn cannot_read_property(value: &Value, key: &str) -> JsError {
    JsError::type_error(format!(
        "Cannot read properties of {} (reading '{key}')",
        value.to_string()
    ))
}

/// Parses a canonical array index: no sign, no leading zeros.
fn canonical_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

impl Value {
    /// Calls the built-in method `name` on this value, as generated code
    /// does for `receiver.name(...arguments)` when the receiver is untyped.
    pub fn invoke(&mut self, name: &str, arguments: &[Value]) -> JsResult<Value> {
        if self.is_nullish() {
            return Err(cannot_read_property(self, name));
        }
        let Some(method) = prototype_methods(self).iter().find(|m| m.name == name) else {
            log::debug!("no method {name} on a value of type {}", self.type_of());
            return Err(JsError::type_error(format!(
                "{}.{name} is not a function",
                self.type_of()
            )));
        };
        method.behaviour.call(self, ArgumentsList::from(arguments))
    }

    /// Reads the property `key`: `length` and integer indices of strings
    /// and arrays. Other keys read as `undefined`.
    pub fn get(&self, key: &str) -> JsResult<Value> {
        match self {
            Value::Undefined | Value::Null => Err(cannot_read_property(self, key)),
            Value::String(s) => Ok(if key == "length" {
                Value::from(s.length())
            } else if let Some(index) = canonical_index(key) {
                s.code_point_at_index(index)
                    .map_or(Value::Undefined, |c| Value::String(c.into()))
            } else {
                Value::Undefined
            }),
            Value::Array(array) => Ok(if key == "length" {
                Value::from(array.length())
            } else if let Some(index) = canonical_index(key) {
                array.get(index)
            } else {
                Value::Undefined
            }),
            Value::Function(function) => Ok(if key == "name" {
                Value::String(function.name().clone())
            } else {
                Value::Undefined
            }),
            Value::Symbol(symbol) => Ok(if key == "description" {
                symbol
                    .description()
                    .map_or(Value::Undefined, |d| Value::String(d.clone()))
            } else {
                Value::Undefined
            }),
            Value::Boolean(_) | Value::Number(_) | Value::Object(_) => Ok(Value::Undefined),
        }
    }

    /// Calls this value as a function.
    pub fn call(&self, arguments: &[Value]) -> JsResult<Value> {
        match self {
            Value::Function(function) => Ok(function.call(arguments)),
            _ => Err(JsError::type_error(format!(
                "{} is not a function",
                self.string_repr()
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::execution::ExceptionType;

    #[test]
    fn arguments_list_reads_undefined_past_end() {
        let values = [Value::from(1)];
        let arguments = ArgumentsList::from(&values[..]);
        assert_eq!(arguments.get(0), Value::from(1));
        assert_eq!(arguments.get(1), Value::Undefined);
        assert!(arguments.get_if_present(1).is_none());
        assert!(arguments.rest(5).is_empty());
    }

    #[test]
    fn unknown_method_is_type_error() {
        let mut value = Value::from(1);
        let error = value.invoke("frobnicate", &[]).unwrap_err();
        assert_eq!(error.kind(), ExceptionType::TypeError);
        assert_eq!(error.message(), "number.frobnicate is not a function");
    }

    #[test]
    fn property_of_undefined_is_type_error() {
        let error = Value::Undefined.get("length").unwrap_err();
        assert_eq!(
            error.message(),
            "Cannot read properties of undefined (reading 'length')"
        );
        let error = Value::Null.clone().invoke("toString", &[]).unwrap_err();
        assert_eq!(error.kind(), ExceptionType::TypeError);
    }

    #[test]
    fn length_and_index_properties() {
        let s = Value::from("héllo");
        assert_eq!(s.get("length").unwrap(), Value::from(5));
        assert_eq!(s.get("1").unwrap(), Value::from("é"));
        assert_eq!(s.get("01").unwrap(), Value::Undefined);
        assert_eq!(s.get("9").unwrap(), Value::Undefined);
        let array = Value::from(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(array.get("length").unwrap(), Value::from(2));
        assert_eq!(array.get("1").unwrap(), Value::from("b"));
        assert_eq!(Value::from(3).get("length").unwrap(), Value::Undefined);
    }

    #[test]
    fn calling_non_functions() {
        assert!(Value::from("f").call(&[]).is_err());
    }
}
