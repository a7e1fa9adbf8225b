// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A hand-lowered sample program, written the way generated code drives the
//! runtime.

use tsrt_vm::{Console, JsResult, Value, add, get_global, is_loosely_equal, type_of};

/// `function test(x: number | string)` from the sample program.
fn test(console: &Console, x: &Value) {
    if type_of(x) == "string" {
        console.log(std::slice::from_ref(x));
    } else {
        console.log(&[add(x, &Value::from(1))]);
    }
}

pub fn run(console: &mut Console) -> JsResult<()> {
    console.time(None);

    test(console, &Value::from("hello"));
    test(console, &Value::from(41));
    test(console, &Value::Null);

    let a = Value::from("1");
    console.log(&[add(&a, &Value::from(2)), add(&Value::from(1), &Value::from(2))]);
    console.log(&[
        Value::from("123 == 123:"),
        Value::from(is_loosely_equal(&Value::from("123"), &Value::from(123))),
    ]);

    let mut list = Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]);
    list.invoke("push", &[Value::from(4), Value::from(5)])?;
    let removed = list.invoke("splice", &[Value::from(1), Value::from(2), Value::from("x")])?;
    console.log(&[list.clone(), removed]);
    console.log(&[list.invoke("join", &[Value::from(" | ")])?]);

    let mut pi = Value::from(std::f64::consts::PI);
    console.log(&[
        pi.invoke("toFixed", &[Value::from(2)])?,
        pi.invoke("toPrecision", &[Value::from(3)])?,
        pi.invoke("toExponential", &[Value::from(1)])?,
    ]);

    let mut greeting = Value::from("  Hello, World  ");
    let mut trimmed = greeting.invoke("trim", &[])?;
    console.log(&[
        trimmed.invoke("toUpperCase", &[])?,
        trimmed.invoke("slice", &[Value::from(-5)])?,
        trimmed.get("length")?,
    ]);

    let parse_int = get_global("parseInt");
    console.log(&[
        parse_int.call(&[Value::from("0x1f")])?,
        parse_int.call(&[Value::from("42px"), Value::from(10)])?,
        get_global("parseFloat").call(&[Value::from("3.5e1 apples")])?,
    ]);

    console.time_end(None)
}
