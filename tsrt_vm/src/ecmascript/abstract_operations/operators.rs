// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [13.15.4 ApplyStringOrNumericBinaryOperator ( lval, opText, rval )](https://tc39.es/ecma262/#sec-applystringornumericbinaryoperator)

use crate::ecmascript::types::{Number, String, Value};

use super::type_conversion::{to_number, to_primitive, to_string};

/// ### [13.8.1 The Addition Operator ( + )](https://tc39.es/ecma262/#sec-addition-operator-plus)
///
/// String concatenation wins over numeric addition: the string check happens
/// before either operand is coerced to a number.
pub fn add(lval: &Value, rval: &Value) -> Value {
    // 1. If opText is +, then
    // a. Let lprim be ? ToPrimitive(lval).
    let lprim = to_primitive(lval);
    // b. Let rprim be ? ToPrimitive(rval).
    let rprim = to_primitive(rval);
    // c. If lprim is a String or rprim is a String, then
    if lprim.is_string() || rprim.is_string() {
        // i. Let lstr be ? ToString(lprim).
        let lstr = to_string(&lprim);
        // ii. Let rstr be ? ToString(rprim).
        let rstr = to_string(&rprim);
        // iii. Return the string-concatenation of lstr and rstr.
        if lstr.is_empty() {
            return Value::String(rstr);
        }
        if rstr.is_empty() {
            return Value::String(lstr);
        }
        let mut result = std::string::String::with_capacity(lstr.as_str().len() + rstr.as_str().len());
        result.push_str(lstr.as_str());
        result.push_str(rstr.as_str());
        return Value::String(String::from(result));
    }
    // 3. Let lnum be ? ToNumeric(lval).
    let lnum = to_number(&lprim);
    // 4. Let rnum be ? ToNumeric(rval).
    let rnum = to_number(&rprim);
    // 8. Return operation(lnum, rnum).
    Value::Number(Number::from(lnum.into_f64() + rnum.into_f64()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn string_precedence() {
        assert_eq!(add(&Value::from("1"), &Value::from(2)), Value::from("12"));
        assert_eq!(add(&Value::from(1), &Value::from("2")), Value::from("12"));
        assert_eq!(add(&Value::from(1), &Value::from(2)), Value::from(3));
        assert_eq!(add(&Value::from("a"), &Value::Null), Value::from("anull"));
        assert_eq!(
            add(&Value::Undefined, &Value::from("")),
            Value::from("undefined")
        );
        assert_eq!(
            add(&Value::from(""), &Value::from(vec![Value::from(1), Value::from(2)])),
            Value::from("1,2")
        );
    }

    #[test]
    fn numeric_addition() {
        assert_eq!(add(&Value::from(true), &Value::from(1)), Value::from(2));
        assert_eq!(add(&Value::Null, &Value::from(1)), Value::from(1));
        assert!(add(&Value::Undefined, &Value::from(1)).is_nan());
        assert!(add(&Value::nan(), &Value::from(1)).is_nan());
        assert!(add(&Value::from(vec![]), &Value::from(1)).is_nan());
        assert_eq!(add(&Value::pos_inf(), &Value::from(1)), Value::pos_inf());
        assert!(add(&Value::pos_inf(), &Value::neg_inf()).is_nan());
    }
}
