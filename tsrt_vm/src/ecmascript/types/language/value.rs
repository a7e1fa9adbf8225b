// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::type_conversion::{to_boolean, to_number, to_string},
    builtins::Array,
};

use super::{Function, Number, OrdinaryObject, String, Symbol};

/// ### [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)
///
/// Only Array is mutable; it is owned by whichever binding holds the Value
/// and is mutated through `&mut`. Strings, Symbols and Functions are shared
/// immutable handles.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// ### [6.1.1 The Undefined Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-undefined-type)
    #[default]
    Undefined,

    /// ### [6.1.2 The Null Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-null-type)
    Null,

    /// ### [6.1.3 The Boolean Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-boolean-type)
    Boolean(bool),

    /// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
    String(String),

    /// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
    Symbol(Symbol),

    /// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
    Number(Number),

    /// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
    Object(OrdinaryObject),
    Array(Array),
    Function(Function),
}

/// Result of the `typeof` operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
    Symbol,
    Function,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Undefined => "undefined",
            Tag::Object => "object",
            Tag::Boolean => "boolean",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::Symbol => "symbol",
            Tag::Function => "function",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Value {
    pub const fn nan() -> Self {
        Self::Number(Number::NAN)
    }

    pub const fn pos_inf() -> Self {
        Self::Number(Number::POS_INF)
    }

    pub const fn neg_inf() -> Self {
        Self::Number(Number::NEG_INF)
    }

    pub fn from_str(str: &str) -> Self {
        Self::String(String::from(str))
    }

    pub fn from_f64(value: f64) -> Self {
        Self::Number(Number::from(value))
    }

    /// ### [13.5.3 The typeof Operator](https://tc39.es/ecma262/#sec-typeof-operator)
    ///
    /// Null reports as "object", mirroring the language.
    pub fn type_of(&self) -> Tag {
        match self {
            Value::Undefined => Tag::Undefined,
            Value::Null | Value::Object(_) | Value::Array(_) => Tag::Object,
            Value::Boolean(_) => Tag::Boolean,
            Value::String(_) => Tag::String,
            Value::Symbol(_) => Tag::Symbol,
            Value::Number(_) => Tag::Number,
            Value::Function(_) => Tag::Function,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_empty_string(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    pub fn to_number(&self) -> Number {
        to_number(self)
    }

    pub fn to_string(&self) -> String {
        to_string(self)
    }

    pub fn to_boolean(&self) -> bool {
        to_boolean(self)
    }

    /// Debug-ish rendering used when printing values with their internals:
    /// strings are quoted, arrays show their elements.
    pub fn string_repr(&self) -> std::string::String {
        match self {
            Value::String(s) => format!("{s:?}"),
            Value::Array(array) => {
                let elements = array
                    .iter()
                    .map(Value::string_repr)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{elements}]")
            }
            Value::Function(function) => format!("[Function: {}]", function.name()),
            _ => self.to_string().as_str().to_owned(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value.into())
    }
}

macro_rules! impl_value_from_integer {
    ($($int: ty),*) => {
        $(
            impl From<$int> for Value {
                fn from(value: $int) -> Self {
                    Value::Number(Number::from(value as f64))
                }
            }
        )*
    };
}

impl_value_from_integer!(i8, u8, i16, u16, i32, u32, i64, u64, usize);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<std::string::String> for Value {
    fn from(value: std::string::String) -> Self {
        Value::String(value.into())
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<OrdinaryObject> for Value {
    fn from(value: OrdinaryObject) -> Self {
        Value::Object(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(Array::from(value))
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

/// An absent value is `undefined`.
impl From<Option<Value>> for Value {
    fn from(value: Option<Value>) -> Self {
        value.unwrap_or_default()
    }
}

impl TryFrom<Value> for Number {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(()),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(()),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(()),
        }
    }
}

impl TryFrom<Value> for Array {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(array) => Ok(array),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn type_of_every_kind() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::from(None).type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Object(OrdinaryObject::new()).type_of(), "object");
        assert_eq!(Value::from(vec![Value::from(1)]).type_of(), "object");
        assert_eq!(Value::from(true).type_of(), "boolean");
        assert_eq!(Value::from(1.5).type_of(), "number");
        assert_eq!(Value::nan().type_of(), "number");
        assert_eq!(Value::from("a").type_of(), "string");
        assert_eq!(Value::from(Symbol::new(None)).type_of(), "symbol");
        let function = Function::new("noop", |_| Value::Undefined);
        assert_eq!(Value::from(function).type_of(), "function");
    }

    #[test]
    fn default_is_undefined() {
        assert!(Value::default().is_undefined());
    }

    #[test]
    fn string_repr_quotes_strings() {
        let value = Value::from(vec![Value::from("a"), Value::from(1), Value::Null]);
        assert_eq!(value.string_repr(), "[\"a\", 1, null]");
    }
}
