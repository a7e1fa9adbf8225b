// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tsrt_vm::{
    Array, Function, OrdinaryObject, Symbol, Value, add, is_loosely_equal, is_loosely_not_equal,
    to_boolean, to_number, to_string, type_of,
};

fn sample_values() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::from(true),
        Value::from(false),
        Value::from(0),
        Value::from(-0.0),
        Value::from(1.5),
        Value::nan(),
        Value::pos_inf(),
        Value::from(""),
        Value::from("0"),
        Value::from(" 12 "),
        Value::from("héllo"),
        Value::from(Symbol::new(Some("tag"))),
        Value::from(OrdinaryObject::new()),
        Value::from(vec![Value::from(1), Value::Null, Value::from("x")]),
        Value::from(Array::new()),
        Value::from(Function::new("f", |_| Value::Undefined)),
    ]
}

#[test]
fn string_truthiness_follows_length() {
    for text in ["", "0", "false", " ", "héllo"] {
        let value = Value::from(text);
        assert_eq!(to_boolean(&value), !text.is_empty(), "{text:?}");
    }
}

#[test]
fn number_truthiness() {
    for n in [0.0, -0.0, f64::NAN, 1.0, -1.0, f64::INFINITY, 1e-300] {
        let expected = n != 0.0 && !n.is_nan();
        assert_eq!(to_boolean(&Value::from(n)), expected, "{n}");
    }
}

#[test]
fn addition_prefers_strings() {
    assert_eq!(add(&Value::from("1"), &Value::from(2)), Value::from("12"));
    assert_eq!(add(&Value::from(1), &Value::from(2)), Value::from(3));
    assert_eq!(add(&Value::from(1), &Value::from("2")), Value::from("12"));
    assert_eq!(add(&Value::from(true), &Value::from(1)), Value::from(2));
    assert_eq!(add(&Value::Null, &Value::from(1)), Value::from(1));
    assert!(add(&Value::Undefined, &Value::from(1)).is_nan());
    assert_eq!(
        add(&Value::from(vec![Value::from(1)]), &Value::from("a")),
        Value::from("1a")
    );
}

#[test]
fn loose_equality_samples() {
    assert!(is_loosely_equal(&Value::from("123"), &Value::from(123)));
    assert!(is_loosely_equal(&Value::from(true), &Value::from(1)));
    assert!(is_loosely_equal(&Value::from(false), &Value::from(0)));
    assert!(is_loosely_equal(&Value::Null, &Value::Undefined));
    assert!(!is_loosely_equal(&Value::Null, &Value::from(0)));
    assert!(!is_loosely_equal(&Value::nan(), &Value::nan()));
    assert!(is_loosely_not_equal(&Value::from("a"), &Value::from(1)));
}

#[test]
fn to_string_is_idempotent() {
    for value in sample_values() {
        let once = to_string(&value);
        let twice = to_string(&Value::String(once.clone()));
        assert_eq!(once, twice);
    }
}

#[test]
fn coercions_are_total() {
    for value in sample_values() {
        let _ = to_number(&value);
        let _ = to_boolean(&value);
        let _ = to_string(&value);
        assert!(!type_of(&value).as_str().is_empty());
    }
}

#[test]
fn type_of_reports_object_for_null_and_arrays() {
    assert_eq!(type_of(&Value::Null), "object");
    assert_eq!(type_of(&Value::from(Array::new())), "object");
    assert_eq!(type_of(&Value::from(OrdinaryObject::new())), "object");
    assert_eq!(type_of(&Value::from(Symbol::new(None))), "symbol");
    assert_eq!(
        type_of(&Value::from(Function::new("f", |_| Value::Null))),
        "function"
    );
}
