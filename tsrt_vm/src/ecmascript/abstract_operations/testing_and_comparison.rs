// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use crate::ecmascript::types::Value;

use super::type_conversion::{to_number, to_primitive};

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
pub fn is_callable(argument: &Value) -> bool {
    matches!(argument, Value::Function(_))
}

/// Are both values of the same language type? Arrays, plain objects and
/// functions count as distinct kinds here.
pub(crate) fn is_same_type(x: &Value, y: &Value) -> bool {
    std::mem::discriminant(x) == std::mem::discriminant(y)
}

/// ### [7.2.11 SameValueZero ( x, y )](https://tc39.es/ecma262/#sec-samevaluezero)
///
/// Like strict equality except that NaN equals NaN.
pub fn same_value_zero(x: &Value, y: &Value) -> bool {
    // 2. If x is a Number, then
    if let (Value::Number(x), Value::Number(y)) = (x, y) {
        // a. Return Number::sameValueZero(x, y).
        return (x.is_nan() && y.is_nan()) || x.into_f64() == y.into_f64();
    }
    is_strictly_equal(x, y)
}

/// ### [7.2.12 SameValueNonNumber ( x, y )](https://tc39.es/ecma262/#sec-samevaluenonnumber)
fn same_value_non_number(x: &Value, y: &Value) -> bool {
    debug_assert!(is_same_type(x, y));
    match (x, y) {
        // 2. If x is either null or undefined, return true.
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        // 4. If x is a String, then
        //    a. If x and y have the same length and the same code units in
        //       the same positions, return true; otherwise, return false.
        (Value::String(x), Value::String(y)) => x == y,
        // 5. If x is a Boolean, then
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        // Arrays are owned sequences, not references, so they compare by
        // their elements.
        (Value::Array(x), Value::Array(y)) => {
            x.length() == y.length()
                && x.iter().zip(y.iter()).all(|(x, y)| is_strictly_equal(x, y))
        }
        // 6. NOTE: All other ECMAScript language values are compared by
        //    identity.
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => x == y,
        (Value::Function(x), Value::Function(y)) => x == y,
        _ => false,
    }
}

/// ### [7.2.14 IsLooselyEqual ( x, y )](https://tc39.es/ecma262/#sec-islooselyequal)
///
/// Provides the semantics for the `==` operator.
pub fn is_loosely_equal(x: &Value, y: &Value) -> bool {
    // 1. If Type(x) is Type(y), then
    if is_same_type(x, y) {
        // a. Return IsStrictlyEqual(x, y).
        return is_strictly_equal(x, y);
    }

    // 2. If x is null and y is undefined, return true.
    // 3. If x is undefined and y is null, return true.
    if x.is_nullish() && y.is_nullish() {
        return true;
    }

    // 5. If x is a Number and y is a String, return ! IsLooselyEqual(x, ! ToNumber(y)).
    if x.is_number() && y.is_string() {
        return is_loosely_equal(x, &Value::Number(to_number(y)));
    }

    // 6. If x is a String and y is a Number, return ! IsLooselyEqual(! ToNumber(x), y).
    if x.is_string() && y.is_number() {
        return is_loosely_equal(&Value::Number(to_number(x)), y);
    }

    // 9. If x is a Boolean, return ! IsLooselyEqual(! ToNumber(x), y).
    if x.is_boolean() {
        return is_loosely_equal(&Value::Number(to_number(x)), y);
    }

    // 10. If y is a Boolean, return ! IsLooselyEqual(x, ! ToNumber(y)).
    if y.is_boolean() {
        return is_loosely_equal(x, &Value::Number(to_number(y)));
    }

    // 11. If x is either a String, a Number, or a Symbol and y is an Object,
    //     return ! IsLooselyEqual(x, ? ToPrimitive(y)).
    // 12. And the mirror. ToPrimitive returns objects unchanged, so the
    //     comparison after it would never succeed.
    let (px, py) = (to_primitive(x), to_primitive(y));
    if !is_same_type(&px, &py) {
        // 14. Return false.
        return false;
    }
    is_strictly_equal(&px, &py)
}

/// Negation of [`is_loosely_equal`]: the `!=` operator.
pub fn is_loosely_not_equal(x: &Value, y: &Value) -> bool {
    !is_loosely_equal(x, y)
}

/// ### [7.2.15 IsStrictlyEqual ( x, y )](https://tc39.es/ecma262/#sec-isstrictlyequal)
///
/// Provides the semantics for the `===` operator.
pub fn is_strictly_equal(x: &Value, y: &Value) -> bool {
    // 1. If Type(x) is not Type(y), return false.
    if !is_same_type(x, y) {
        return false;
    }

    // 2. If x is a Number, then
    if let (Value::Number(x), Value::Number(y)) = (x, y) {
        // a. Return Number::equal(x, y).
        return x.into_f64() == y.into_f64();
    }

    // 3. Return SameValueNonNumber(x, y).
    same_value_non_number(x, y)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::types::{Function, OrdinaryObject, Symbol};

    #[test]
    fn loose_equality_across_kinds() {
        assert!(is_loosely_equal(&Value::from(1), &Value::from("1")));
        assert!(is_loosely_equal(&Value::from("1"), &Value::from(1)));
        assert!(is_loosely_equal(&Value::from(true), &Value::from(1)));
        assert!(is_loosely_equal(&Value::from(0), &Value::from(false)));
        assert!(is_loosely_equal(&Value::from("0"), &Value::from(false)));
        assert!(is_loosely_equal(&Value::from(""), &Value::from(0)));
        assert!(is_loosely_equal(&Value::Null, &Value::Undefined));
        assert!(!is_loosely_equal(&Value::Null, &Value::from(0)));
        assert!(!is_loosely_equal(&Value::Undefined, &Value::from(false)));
        assert!(!is_loosely_equal(&Value::from("a"), &Value::from(true)));
    }

    #[test]
    fn loose_equality_within_a_kind() {
        assert!(!is_loosely_equal(&Value::nan(), &Value::nan()));
        assert!(is_loosely_equal(&Value::from(0), &Value::from(-0.0)));
        assert!(is_loosely_equal(&Value::from("ab"), &Value::from("ab")));
        assert!(!is_loosely_equal(&Value::from("ab"), &Value::from("Ab")));
        let a = Value::from(vec![Value::from(1), Value::from("x")]);
        let b = Value::from(vec![Value::from(1), Value::from("x")]);
        assert!(is_loosely_equal(&a, &b));
        assert!(!is_loosely_equal(&a, &Value::from(vec![Value::from(1)])));
        assert!(!is_loosely_equal(
            &Value::from(vec![Value::nan()]),
            &Value::from(vec![Value::nan()])
        ));
    }

    #[test]
    fn identity_kinds() {
        let symbol = Symbol::new(Some("s"));
        assert!(is_loosely_equal(
            &Value::from(symbol.clone()),
            &Value::from(symbol)
        ));
        assert!(!is_loosely_equal(
            &Value::from(Symbol::new(Some("s"))),
            &Value::from(Symbol::new(Some("s")))
        ));
        let object = OrdinaryObject::new();
        assert!(is_loosely_equal(&Value::from(object), &Value::from(object)));
        assert!(!is_loosely_equal(
            &Value::from(OrdinaryObject::new()),
            &Value::from(OrdinaryObject::new())
        ));
        let function = Value::from(Function::new("f", |_| Value::Undefined));
        assert!(is_loosely_equal(&function, &function.clone()));
        assert!(!is_loosely_equal(&function, &Value::from(OrdinaryObject::new())));
    }

    #[test]
    fn not_equal_is_negation() {
        let samples = [
            Value::Undefined,
            Value::Null,
            Value::from(0),
            Value::from("0"),
            Value::from(false),
            Value::nan(),
        ];
        for x in &samples {
            for y in &samples {
                assert_eq!(is_loosely_not_equal(x, y), !is_loosely_equal(x, y));
            }
        }
    }

    #[test]
    fn strict_equality_never_coerces() {
        assert!(!is_strictly_equal(&Value::from(1), &Value::from("1")));
        assert!(!is_strictly_equal(&Value::Null, &Value::Undefined));
        assert!(is_strictly_equal(&Value::from(-0.0), &Value::from(0)));
        assert!(!is_strictly_equal(&Value::nan(), &Value::nan()));
        assert!(same_value_zero(&Value::nan(), &Value::nan()));
        assert!(same_value_zero(&Value::from(-0.0), &Value::from(0)));
    }

    #[test]
    fn callable() {
        assert!(is_callable(&Value::from(Function::new("f", |_| Value::Undefined))));
        assert!(!is_callable(&Value::from("f")));
    }
}
