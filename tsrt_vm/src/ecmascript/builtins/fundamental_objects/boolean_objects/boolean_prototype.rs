// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builtins::{ArgumentsList, Behaviour, Builtin, BuiltinMethod},
    execution::{JsError, JsResult},
    types::{String, Value},
};

pub(crate) struct BooleanPrototype;

struct BooleanPrototypeToString;
impl Builtin for BooleanPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(BooleanPrototype::to_string);
}

struct BooleanPrototypeValueOf;
impl Builtin for BooleanPrototypeValueOf {
    const NAME: &'static str = "valueOf";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(BooleanPrototype::value_of);
}

impl BooleanPrototype {
    pub(crate) const METHODS: &'static [BuiltinMethod] = &[
        BuiltinMethod::of::<BooleanPrototypeToString>(),
        BuiltinMethod::of::<BooleanPrototypeValueOf>(),
    ];

    /// ### [20.3.3.2 Boolean.prototype.toString ( )](https://tc39.es/ecma262/#sec-boolean.prototype.tostring)
    fn to_string(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let b be ? ThisBooleanValue(this value).
        let b = this_boolean_value(this_value)?;
        // 2. If b is true, return "true"; else return "false".
        Ok(Value::String(boolean_to_string(b)))
    }

    /// ### [20.3.3.3 Boolean.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-boolean.prototype.valueof)
    fn value_of(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisBooleanValue(this value).
        this_boolean_value(this_value).map(Value::Boolean)
    }
}

/// The typed form of `Boolean.prototype.toString`.
pub fn boolean_to_string(b: bool) -> String {
    String::from(if b { "true" } else { "false" })
}

/// ### [20.3.3.3.1 ThisBooleanValue ( value )](https://tc39.es/ecma262/#sec-thisbooleanvalue)
fn this_boolean_value(value: &Value) -> JsResult<bool> {
    match value {
        // 1. If value is a Boolean, return value.
        Value::Boolean(b) => Ok(*b),
        // 3. Throw a TypeError exception.
        _ => Err(JsError::type_error("Not a Boolean")),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn to_string_and_value_of() {
        assert_eq!(boolean_to_string(true), "true");
        let mut value = Value::from(false);
        assert_eq!(value.invoke("toString", &[]).unwrap(), Value::from("false"));
        assert_eq!(value.invoke("valueOf", &[]).unwrap(), Value::from(false));
        assert!(value.invoke("toFixed", &[]).is_err());
    }
}
