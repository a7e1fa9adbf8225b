// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        testing_and_comparison::{is_strictly_equal, same_value_zero},
        type_conversion::{resolve_relative_index, to_boolean, to_integer_or_infinity, to_string},
    },
    builtins::{Array, ArgumentsList, Behaviour, Builtin, BuiltinMethod},
    execution::{JsError, JsResult},
    types::{Function, String, Value},
};

pub(crate) struct ArrayPrototype;

struct ArrayPrototypeAt;
impl Builtin for ArrayPrototypeAt {
    const NAME: &'static str = "at";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayPrototype::at);
}
struct ArrayPrototypeConcat;
impl Builtin for ArrayPrototypeConcat {
    const NAME: &'static str = "concat";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayPrototype::concat);
}
struct ArrayPrototypeFilter;
impl Builtin for ArrayPrototypeFilter {
    const NAME: &'static str = "filter";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayPrototype::filter);
}
struct ArrayPrototypeForEach;
impl Builtin for ArrayPrototypeForEach {
    const NAME: &'static str = "forEach";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayPrototype::for_each);
}
struct ArrayPrototypeIncludes;
impl Builtin for ArrayPrototypeIncludes {
    const NAME: &'static str = "includes";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayPrototype::includes);
}
struct ArrayPrototypeIndexOf;
impl Builtin for ArrayPrototypeIndexOf {
    const NAME: &'static str = "indexOf";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayPrototype::index_of);
}
struct ArrayPrototypeJoin;
impl Builtin for ArrayPrototypeJoin {
    const NAME: &'static str = "join";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayPrototype::join);
}
struct ArrayPrototypeMap;
impl Builtin for ArrayPrototypeMap {
    const NAME: &'static str = "map";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayPrototype::map);
}
struct ArrayPrototypePop;
impl Builtin for ArrayPrototypePop {
    const NAME: &'static str = "pop";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Mutating(ArrayPrototype::pop);
}
struct ArrayPrototypePush;
impl Builtin for ArrayPrototypePush {
    const NAME: &'static str = "push";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Mutating(ArrayPrototype::push);
}
struct ArrayPrototypeRemove;
impl Builtin for ArrayPrototypeRemove {
    const NAME: &'static str = "remove";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Mutating(ArrayPrototype::remove);
}
struct ArrayPrototypeReverse;
impl Builtin for ArrayPrototypeReverse {
    const NAME: &'static str = "reverse";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Mutating(ArrayPrototype::reverse);
}
struct ArrayPrototypeShift;
impl Builtin for ArrayPrototypeShift {
    const NAME: &'static str = "shift";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Mutating(ArrayPrototype::shift);
}
struct ArrayPrototypeSlice;
impl Builtin for ArrayPrototypeSlice {
    const NAME: &'static str = "slice";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayPrototype::slice);
}
struct ArrayPrototypeSplice;
impl Builtin for ArrayPrototypeSplice {
    const NAME: &'static str = "splice";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Mutating(ArrayPrototype::splice);
}
struct ArrayPrototypeToString;
impl Builtin for ArrayPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayPrototype::to_string);
}
struct ArrayPrototypeUnshift;
impl Builtin for ArrayPrototypeUnshift {
    const NAME: &'static str = "unshift";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Mutating(ArrayPrototype::unshift);
}

/// Typed surface, called directly by generated code that knows it holds an
/// array.
impl Array {
    /// ### [23.1.3.1 Array.prototype.at ( index )](https://tc39.es/ecma262/#sec-array.prototype.at)
    ///
    /// Negative indices count back from the end.
    pub fn at(&self, index: i64) -> Value {
        let len = self.length() as i64;
        let k = if index < 0 { len.saturating_add(index) } else { index };
        if k < 0 || k >= len {
            return Value::Undefined;
        }
        self.get(k as usize)
    }

    /// ### [23.1.3.23 Array.prototype.push ( ...items )](https://tc39.es/ecma262/#sec-array.prototype.push)
    ///
    /// Returns the new length.
    pub fn push(&mut self, value: Value) -> usize {
        self.elements.push(value);
        self.elements.len()
    }

    /// ### [23.1.3.22 Array.prototype.pop ( )](https://tc39.es/ecma262/#sec-array.prototype.pop)
    pub fn pop(&mut self) -> Value {
        self.elements.pop().unwrap_or_default()
    }

    /// ### [23.1.3.27 Array.prototype.shift ( )](https://tc39.es/ecma262/#sec-array.prototype.shift)
    pub fn shift(&mut self) -> Value {
        if self.elements.is_empty() {
            return Value::Undefined;
        }
        self.elements.remove(0)
    }

    /// ### [23.1.3.36 Array.prototype.unshift ( ...items )](https://tc39.es/ecma262/#sec-array.prototype.unshift)
    ///
    /// Returns the new length.
    pub fn unshift(&mut self, value: Value) -> usize {
        self.elements.insert(0, value);
        self.elements.len()
    }

    /// Deletes the element at `index` and closes the gap. Out of range
    /// indices leave the array untouched.
    pub fn remove(&mut self, index: i64) {
        if let Ok(index) = usize::try_from(index) {
            if index < self.elements.len() {
                self.elements.remove(index);
            }
        }
    }

    /// ### [23.1.3.31 Array.prototype.splice ( start, deleteCount, ...items )](https://tc39.es/ecma262/#sec-array.prototype.splice)
    ///
    /// `start` is clamped to `0..=length` (a negative start means the
    /// beginning) and the deleted window to what remains after it. Returns
    /// the deleted elements.
    pub fn splice(
        &mut self,
        start: i64,
        delete_count: i64,
        items: impl IntoIterator<Item = Value>,
    ) -> Array {
        let len = self.elements.len();
        let start = start.clamp(0, len as i64) as usize;
        let delete_count = delete_count.clamp(0, (len - start) as i64) as usize;
        self.elements
            .splice(start..start + delete_count, items)
            .collect()
    }

    /// ### [23.1.3.15 Array.prototype.forEach ( callbackfn \[ , thisArg \] )](https://tc39.es/ecma262/#sec-array.prototype.foreach)
    pub fn for_each(&self, mut callback: impl FnMut(&Value, usize)) {
        for (index, value) in self.elements.iter().enumerate() {
            callback(value, index);
        }
    }

    /// ### [23.1.3.8 Array.prototype.filter ( callbackfn \[ , thisArg \] )](https://tc39.es/ecma262/#sec-array.prototype.filter)
    pub fn filter(&self, mut predicate: impl FnMut(&Value, usize) -> bool) -> Array {
        self.elements
            .iter()
            .enumerate()
            .filter(|(index, value)| predicate(*value, *index))
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// ### [23.1.3.21 Array.prototype.map ( callbackfn \[ , thisArg \] )](https://tc39.es/ecma262/#sec-array.prototype.map)
    pub fn map(&self, mut callback: impl FnMut(&Value, usize) -> Value) -> Array {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, value)| callback(value, index))
            .collect()
    }

    /// ### [23.1.3.18 Array.prototype.join ( separator )](https://tc39.es/ecma262/#sec-array.prototype.join)
    ///
    /// Undefined and null elements render as the empty string.
    pub fn join(&self, separator: &str) -> String {
        let mut r = std::string::String::new();
        for (k, element) in self.elements.iter().enumerate() {
            if k > 0 {
                r.push_str(separator);
            }
            if !element.is_nullish() {
                r.push_str(to_string(element).as_str());
            }
        }
        String::from(r)
    }

    /// ### [23.1.3.17 Array.prototype.indexOf ( searchElement \[ , fromIndex \] )](https://tc39.es/ecma262/#sec-array.prototype.indexof)
    ///
    /// Compares with strict equality, so NaN is never found.
    pub fn index_of(&self, search_element: &Value) -> Option<usize> {
        self.elements
            .iter()
            .position(|element| is_strictly_equal(search_element, element))
    }

    /// ### [23.1.3.16 Array.prototype.includes ( searchElement \[ , fromIndex \] )](https://tc39.es/ecma262/#sec-array.prototype.includes)
    ///
    /// Compares with SameValueZero, so NaN is found.
    pub fn includes(&self, search_element: &Value) -> bool {
        self.elements
            .iter()
            .any(|element| same_value_zero(search_element, element))
    }

    /// ### [23.1.3.28 Array.prototype.slice ( start, end )](https://tc39.es/ecma262/#sec-array.prototype.slice)
    pub fn slice(&self, start: i64, end: Option<i64>) -> Array {
        let len = self.elements.len();
        let k = resolve_relative_index(start, len);
        let end = end.map_or(len, |end| resolve_relative_index(end, len));
        if k >= end {
            return Array::new();
        }
        Array::from_slice(&self.elements[k..end])
    }

    /// ### [23.1.3.26 Array.prototype.reverse ( )](https://tc39.es/ecma262/#sec-array.prototype.reverse)
    pub fn reverse(&mut self) {
        self.elements.reverse();
    }

    /// ### [23.1.3.2 Array.prototype.concat ( ...items )](https://tc39.es/ecma262/#sec-array.prototype.concat)
    pub fn concat(&self, other: &Array) -> Array {
        let mut elements = Vec::with_capacity(self.length() + other.length());
        elements.extend_from_slice(&self.elements);
        elements.extend_from_slice(&other.elements);
        Array::from(elements)
    }

    /// ### [23.1.3.35 Array.prototype.toString ( )](https://tc39.es/ecma262/#sec-array.prototype.tostring)
    pub fn to_string(&self) -> String {
        self.join(",")
    }
}

fn this_array_value(value: &Value) -> JsResult<&Array> {
    match value {
        Value::Array(array) => Ok(array),
        _ => Err(JsError::type_error("this is not an Array")),
    }
}

fn this_array_value_mut(value: &mut Value) -> JsResult<&mut Array> {
    match value {
        Value::Array(array) => Ok(array),
        _ => Err(JsError::type_error("this is not an Array")),
    }
}

fn callback_function(arguments: ArgumentsList) -> JsResult<Function> {
    match arguments.get(0) {
        Value::Function(function) => Ok(function),
        other => Err(JsError::type_error(format!(
            "{} is not a function",
            other.string_repr()
        ))),
    }
}

/// Name-keyed behaviours reached through [`Value::invoke`].
impl ArrayPrototype {
    pub(crate) const METHODS: &'static [BuiltinMethod] = &[
        BuiltinMethod::of::<ArrayPrototypeAt>(),
        BuiltinMethod::of::<ArrayPrototypeConcat>(),
        BuiltinMethod::of::<ArrayPrototypeFilter>(),
        BuiltinMethod::of::<ArrayPrototypeForEach>(),
        BuiltinMethod::of::<ArrayPrototypeIncludes>(),
        BuiltinMethod::of::<ArrayPrototypeIndexOf>(),
        BuiltinMethod::of::<ArrayPrototypeJoin>(),
        BuiltinMethod::of::<ArrayPrototypeMap>(),
        BuiltinMethod::of::<ArrayPrototypePop>(),
        BuiltinMethod::of::<ArrayPrototypePush>(),
        BuiltinMethod::of::<ArrayPrototypeRemove>(),
        BuiltinMethod::of::<ArrayPrototypeReverse>(),
        BuiltinMethod::of::<ArrayPrototypeShift>(),
        BuiltinMethod::of::<ArrayPrototypeSlice>(),
        BuiltinMethod::of::<ArrayPrototypeSplice>(),
        BuiltinMethod::of::<ArrayPrototypeToString>(),
        BuiltinMethod::of::<ArrayPrototypeUnshift>(),
    ];

    fn at(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value(this_value)?;
        let index = to_integer_or_infinity(&arguments.get(0)).into_i64();
        Ok(array.at(index))
    }

    /// Array arguments are spread into the result, anything else is
    /// appended as a single element.
    fn concat(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value(this_value)?;
        let mut elements = array.as_slice().to_vec();
        for item in arguments.iter() {
            match item {
                Value::Array(item) => elements.extend_from_slice(item.as_slice()),
                item => elements.push(item.clone()),
            }
        }
        Ok(Value::from(elements))
    }

    fn filter(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value(this_value)?;
        let callback = callback_function(arguments)?;
        let result = array.filter(|value, index| {
            to_boolean(&callback.call(&[value.clone(), Value::from(index)]))
        });
        Ok(Value::Array(result))
    }

    fn for_each(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value(this_value)?;
        let callback = callback_function(arguments)?;
        array.for_each(|value, index| {
            callback.call(&[value.clone(), Value::from(index)]);
        });
        Ok(Value::Undefined)
    }

    fn includes(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value(this_value)?;
        Ok(Value::Boolean(array.includes(&arguments.get(0))))
    }

    fn index_of(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value(this_value)?;
        Ok(match array.index_of(&arguments.get(0)) {
            Some(index) => Value::from(index),
            None => Value::from(-1),
        })
    }

    fn join(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value(this_value)?;
        // 2. If separator is undefined, let sep be ",".
        let separator = arguments.get(0);
        let separator = if separator.is_undefined() {
            String::from(",")
        } else {
            to_string(&separator)
        };
        Ok(Value::String(array.join(separator.as_str())))
    }

    fn map(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value(this_value)?;
        let callback = callback_function(arguments)?;
        let result = array.map(|value, index| callback.call(&[value.clone(), Value::from(index)]));
        Ok(Value::Array(result))
    }

    fn pop(this_value: &mut Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(this_array_value_mut(this_value)?.pop())
    }

    fn push(this_value: &mut Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value_mut(this_value)?;
        array.elements.extend(arguments.iter().cloned());
        Ok(Value::from(array.length()))
    }

    fn remove(this_value: &mut Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value_mut(this_value)?;
        let index = to_integer_or_infinity(&arguments.get(0)).into_i64();
        array.remove(index);
        Ok(Value::Undefined)
    }

    fn reverse(this_value: &mut Value, _: ArgumentsList) -> JsResult<Value> {
        this_array_value_mut(this_value)?.reverse();
        Ok(this_value.clone())
    }

    fn shift(this_value: &mut Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(this_array_value_mut(this_value)?.shift())
    }

    fn slice(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value(this_value)?;
        let start = to_integer_or_infinity(&arguments.get(0)).into_i64();
        let end = arguments.get(1);
        let end = if end.is_undefined() {
            None
        } else {
            Some(to_integer_or_infinity(&end).into_i64())
        };
        Ok(Value::Array(array.slice(start, end)))
    }

    fn splice(this_value: &mut Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value_mut(this_value)?;
        if arguments.is_empty() {
            return Ok(Value::Array(Array::new()));
        }
        let start = to_integer_or_infinity(&arguments.get(0)).into_i64();
        // A missing deleteCount removes everything from start onwards.
        let delete_count = match arguments.get_if_present(1) {
            Some(delete_count) => to_integer_or_infinity(delete_count).into_i64(),
            None => i64::MAX,
        };
        let items = arguments.rest(2).iter().cloned();
        Ok(Value::Array(array.splice(start, delete_count, items)))
    }

    fn to_string(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::String(this_array_value(this_value)?.to_string()))
    }

    fn unshift(this_value: &mut Value, arguments: ArgumentsList) -> JsResult<Value> {
        let array = this_array_value_mut(this_value)?;
        array.elements.splice(0..0, arguments.iter().cloned());
        Ok(Value::from(array.length()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn numbers(values: &[i32]) -> Array {
        values.iter().map(|n| Value::from(*n)).collect()
    }

    #[test]
    fn at_counts_back_from_the_end() {
        let array = numbers(&[1, 2, 3]);
        assert_eq!(array.at(-1), Value::from(3));
        assert_eq!(array.at(0), Value::from(1));
        assert!(array.at(3).is_undefined());
        assert!(array.at(-4).is_undefined());
        assert!(array.at(i64::MIN).is_undefined());
    }

    #[test]
    fn push_pop_shift_unshift() {
        let mut array = Array::new();
        assert!(array.pop().is_undefined());
        assert!(array.shift().is_undefined());
        assert_eq!(array.push(Value::from(2)), 1);
        assert_eq!(array.unshift(Value::from(1)), 2);
        assert_eq!(array, numbers(&[1, 2]));
        assert_eq!(array.shift(), Value::from(1));
        assert_eq!(array.pop(), Value::from(2));
        assert!(array.is_empty());
    }

    #[test]
    fn remove_ignores_out_of_range() {
        let mut array = numbers(&[1, 2, 3]);
        array.remove(-1);
        array.remove(3);
        assert_eq!(array, numbers(&[1, 2, 3]));
        array.remove(1);
        assert_eq!(array, numbers(&[1, 3]));
    }

    #[test]
    fn splice_replaces_window() {
        let mut array = numbers(&[1, 2, 3, 4, 5]);
        let deleted = array.splice(1, 2, [Value::from(9), Value::from(9)]);
        assert_eq!(array, numbers(&[1, 9, 9, 4, 5]));
        assert_eq!(deleted, numbers(&[2, 3]));
    }

    #[test]
    fn splice_clamps() {
        let mut array = numbers(&[1, 2, 3]);
        let deleted = array.splice(-5, 1, std::iter::empty());
        assert_eq!(deleted, numbers(&[1]));
        let deleted = array.splice(10, 1, [Value::from(7)]);
        assert!(deleted.is_empty());
        assert_eq!(array, numbers(&[2, 3, 7]));
        let deleted = array.splice(1, 100, std::iter::empty());
        assert_eq!(deleted, numbers(&[3, 7]));
        let deleted = array.splice(0, -1, [Value::from(0)]);
        assert!(deleted.is_empty());
        assert_eq!(array, numbers(&[0, 2]));
    }

    #[test]
    fn iteration_helpers() {
        let array = numbers(&[1, 2, 3, 4]);
        let mut seen = Vec::new();
        array.for_each(|value, index| seen.push((value.clone(), index)));
        assert_eq!(seen[3], (Value::from(4), 3));
        let even = array.filter(|value, _| value.to_number().into_f64() % 2.0 == 0.0);
        assert_eq!(even, numbers(&[2, 4]));
        assert_eq!(array.length(), 4);
        let doubled = array.map(|value, _| Value::from(value.to_number().into_f64() * 2.0));
        assert_eq!(doubled, numbers(&[2, 4, 6, 8]));
    }

    #[test]
    fn join_renders_nullish_as_empty() {
        assert_eq!(Array::new().join(","), "");
        assert_eq!(numbers(&[1, 2, 3]).join("-"), "1-2-3");
        let array = Array::from(vec![Value::from("a"), Value::Undefined, Value::Null, Value::from(true)]);
        assert_eq!(array.join(","), "a,,,true");
        assert_eq!(array.to_string(), "a,,,true");
    }

    #[test]
    fn search() {
        let array = Array::from(vec![Value::from(1), Value::nan(), Value::from("1")]);
        assert_eq!(array.index_of(&Value::from("1")), Some(2));
        assert_eq!(array.index_of(&Value::nan()), None);
        assert!(array.includes(&Value::nan()));
        assert!(!array.includes(&Value::from(2)));
    }

    #[test]
    fn slice_reverse_concat() {
        let array = numbers(&[1, 2, 3, 4, 5]);
        assert_eq!(array.slice(1, Some(3)), numbers(&[2, 3]));
        assert_eq!(array.slice(-2, None), numbers(&[4, 5]));
        assert!(array.slice(3, Some(1)).is_empty());
        let mut reversed = array.clone();
        reversed.reverse();
        assert_eq!(reversed, numbers(&[5, 4, 3, 2, 1]));
        assert_eq!(numbers(&[1]).concat(&numbers(&[2])), numbers(&[1, 2]));
    }

    #[test]
    fn dynamic_mutators() {
        let mut value = Value::from(numbers(&[1, 2, 3, 4, 5]));
        let length = value
            .invoke("push", &[Value::from(6), Value::from(7)])
            .unwrap();
        assert_eq!(length, Value::from(7));
        let deleted = value
            .invoke("splice", &[Value::from(1), Value::from(2), Value::from(9)])
            .unwrap();
        assert_eq!(deleted, Value::from(numbers(&[2, 3])));
        assert_eq!(value, Value::from(numbers(&[1, 9, 4, 5, 6, 7])));
        value.invoke("splice", &[Value::from(3)]).unwrap();
        assert_eq!(value, Value::from(numbers(&[1, 9, 4])));
        value
            .invoke("unshift", &[Value::from(-1), Value::from(0)])
            .unwrap();
        assert_eq!(value, Value::from(numbers(&[-1, 0, 1, 9, 4])));
        assert_eq!(value.invoke("shift", &[]).unwrap(), Value::from(-1));
        assert_eq!(value.invoke("pop", &[]).unwrap(), Value::from(4));
    }

    #[test]
    fn dynamic_callbacks() {
        let mut value = Value::from(numbers(&[1, 2, 3]));
        let is_odd = Function::new("isOdd", |arguments| {
            Value::from(arguments.get(0).to_number().into_f64() % 2.0 == 1.0)
        });
        let odd = value.invoke("filter", &[Value::from(is_odd)]).unwrap();
        assert_eq!(odd, Value::from(numbers(&[1, 3])));
        let index_of_element = Function::new("index", |arguments| arguments.get(1));
        let indices = value
            .invoke("map", &[Value::from(index_of_element)])
            .unwrap();
        assert_eq!(indices, Value::from(numbers(&[0, 1, 2])));
        assert!(value.invoke("forEach", &[Value::from(1)]).is_err());
    }

    #[test]
    fn dynamic_readers() {
        let mut value = Value::from(numbers(&[1, 2]));
        assert_eq!(value.invoke("join", &[]).unwrap(), Value::from("1,2"));
        assert_eq!(
            value.invoke("join", &[Value::from(" + ")]).unwrap(),
            Value::from("1 + 2")
        );
        assert_eq!(value.invoke("at", &[Value::from(-1)]).unwrap(), Value::from(2));
        assert_eq!(
            value.invoke("indexOf", &[Value::from(5)]).unwrap(),
            Value::from(-1)
        );
        let concatenated = value
            .invoke("concat", &[Value::from(numbers(&[3])), Value::from("x")])
            .unwrap();
        assert_eq!(concatenated.to_string(), "1,2,3,x");
        assert_eq!(value.invoke("toString", &[]).unwrap(), Value::from("1,2"));
    }
}
