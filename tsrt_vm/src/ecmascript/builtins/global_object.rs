// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [19 The Global Object](https://tc39.es/ecma262/#sec-global-object)
//!
//! The global value properties and the function properties generated code
//! reaches for without a receiver.

use crate::ecmascript::{
    abstract_operations::type_conversion::{
        is_trimmable_whitespace, to_int32, to_number, to_string,
    },
    builtins::ArgumentsList,
    types::{Function, Number, Tag, Value},
};

/// ### [19.1.3 NaN](https://tc39.es/ecma262/#sec-value-properties-of-the-global-object-nan)
pub const NAN: Number = Number::NAN;

/// ### [19.1.1 Infinity](https://tc39.es/ecma262/#sec-value-properties-of-the-global-object-infinity)
pub const INFINITY: Number = Number::POS_INF;

/// ### [19.2.2 isFinite ( number )](https://tc39.es/ecma262/#sec-isfinite-number)
pub fn is_finite(number: &Value) -> bool {
    // 1. Let num be ? ToNumber(number).
    // 2. If num is not finite, return false.
    // 3. Otherwise, return true.
    to_number(number).is_finite()
}

/// ### [19.2.3 isNaN ( number )](https://tc39.es/ecma262/#sec-isnan-number)
///
/// > NOTE: A reliable way for ECMAScript code to test if a value X is NaN
/// > is an expression of the form X !== X. The result will be true if and
/// > only if X is NaN.
pub fn is_nan(number: &Value) -> bool {
    // 1. Let num be ? ToNumber(number).
    // 2. If num is NaN, return true.
    // 3. Otherwise, return false.
    to_number(number).is_nan()
}

/// ### [19.2.4 parseFloat ( string )](https://tc39.es/ecma262/#sec-parsefloat-string)
///
/// This function produces a Number value dictated by interpretation of the
/// contents of the string argument as a decimal literal.
pub fn parse_float(string: &Value) -> Number {
    // 1. Let inputString be ? ToString(string).
    let input_string = to_string(string);

    // 2. Let trimmedString be ! TrimString(inputString, start).
    let trimmed_string = input_string
        .as_str()
        .trim_start_matches(is_trimmable_whitespace);

    // 3. Let trimmed be StringToCodePoints(trimmedString).
    // 4. Let trimmedPrefix be the longest prefix of trimmed that satisfies
    //    the syntax of a StrDecimalLiteral, which might be trimmed itself.
    //    If there is no such prefix, return NaN.
    // 5. Let parsedNumber be ParseText(trimmedPrefix, StrDecimalLiteral).
    // 6. Assert: parsedNumber is a Parse Node.
    // 7. Return the StringNumericValue of parsedNumber.
    if trimmed_string.starts_with("Infinity") || trimmed_string.starts_with("+Infinity") {
        return Number::POS_INF;
    }

    if trimmed_string.starts_with("-Infinity") {
        return Number::NEG_INF;
    }

    let Ok((f, len)) = fast_float::parse_partial::<f64, _>(trimmed_string) else {
        return Number::NAN;
    };
    if len == 0 {
        return Number::NAN;
    }

    // fast_float also accepts "inf", "nan" and other spellings that are not
    // StrDecimalLiterals; the valid ones were handled above.
    if !f.is_finite() {
        let prefix = &trimmed_string[..len];
        if prefix.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
            return Number::NAN;
        }
    }

    Number::from(f)
}

/// ### [19.2.5 parseInt ( string, radix )](https://tc39.es/ecma262/#sec-parseint-string-radix)
///
/// This function produces an integral Number dictated by interpretation of
/// the contents of string according to the specified radix. Leading white
/// space in string is ignored. If radix coerces to 0 (such as when it is
/// undefined), it is assumed to be 10 except when the number
/// representation begins with "0x" or "0X", in which case it is assumed to
/// be 16. If radix is 16, the number representation may optionally begin
/// with "0x" or "0X".
pub fn parse_int(string: &Value, radix: &Value) -> Number {
    // OPTIMIZATION: An integral Number in radix 10 parses to itself.
    if let (Value::Number(n), Value::Number(r)) = (string, radix) {
        let n = n.into_f64();
        if r.into_f64() == 10.0 && n.is_finite() && n.trunc() == n && n.abs() < 1e21 {
            return Number::from(n + 0.0);
        }
    }

    // 1. Let inputString be ? ToString(string).
    let input_string = to_string(string);

    // 2. Let S be ! TrimString(inputString, start).
    let s = input_string
        .as_str()
        .trim_start_matches(is_trimmable_whitespace);

    // 3. Let sign be 1.
    // 4. If S is not empty and the first code unit of S is the code unit
    //    0x002D (HYPHEN-MINUS), set sign to -1.
    // 5. If S is not empty and the first code unit of S is either the code
    //    unit 0x002B (PLUS SIGN) or the code unit 0x002D (HYPHEN-MINUS), set
    //    S to the substring of S from index 1.
    let (sign, mut s) = if let Some(s) = s.strip_prefix('-') {
        (-1.0, s)
    } else if let Some(s) = s.strip_prefix('+') {
        (1.0, s)
    } else {
        (1.0, s)
    };

    // 6. Let R be ℝ(? ToInt32(radix)).
    let r = to_int32(radix);

    // 7. Let stripPrefix be true.
    // 8. If R ≠ 0, then
    let (mut r, strip_prefix) = if r != 0 {
        // a. If R < 2 or R > 36, return NaN.
        if !(2..=36).contains(&r) {
            return Number::NAN;
        }
        // b. If R ≠ 16, set stripPrefix to false.
        (r as u32, r == 16)
    } else {
        // 9. Else,
        // a. Set R to 10.
        (10, true)
    };

    // 10. If stripPrefix is true, then
    if strip_prefix {
        // a. If the length of S is at least 2 and the first two code units
        //    of S are either "0x" or "0X", then
        if s.starts_with("0x") || s.starts_with("0X") {
            // i. Set S to the substring of S from index 2.
            s = &s[2..];
            // ii. Set R to 16.
            r = 16;
        }
    }

    // 11. If S contains a code unit that is not a radix-R digit, let end be
    //     the index within S of the first such code unit; otherwise, let end
    //     be the length of S.
    let end = s.find(|c: char| !c.is_digit(r)).unwrap_or(s.len());

    // 12. Let Z be the substring of S from 0 to end.
    let z = &s[..end];

    // 13. If Z is empty, return NaN.
    if z.is_empty() {
        return Number::NAN;
    }

    // 14. Let mathInt be the integer value that is represented by Z in
    //     radix-R notation, using the letters A through Z and a through z
    //     for digits with values 10 through 35.
    let math_int = match i128::from_str_radix(z, r) {
        Ok(math_int) => math_int as f64,
        // Too wide for i128; approximate as allowed for long digit strings.
        Err(_) => z.chars().fold(0.0, |acc, c| {
            acc * r as f64 + c.to_digit(r).map_or(0.0, f64::from)
        }),
    };

    // 15. If mathInt = 0, then
    // a. If sign = -1, return -0𝔽.
    // b. Return +0𝔽.
    // 16. Return 𝔽(sign × mathInt).
    Number::from(sign * math_int)
}

/// ### [13.5.3 The typeof Operator](https://tc39.es/ecma262/#sec-typeof-operator)
pub fn type_of(value: &Value) -> Tag {
    value.type_of()
}

type GlobalFn = fn(ArgumentsList) -> Value;

fn global_is_finite(arguments: ArgumentsList) -> Value {
    Value::Boolean(is_finite(&arguments.get(0)))
}

fn global_is_nan(arguments: ArgumentsList) -> Value {
    Value::Boolean(is_nan(&arguments.get(0)))
}

fn global_parse_float(arguments: ArgumentsList) -> Value {
    Value::Number(parse_float(&arguments.get(0)))
}

fn global_parse_int(arguments: ArgumentsList) -> Value {
    Value::Number(parse_int(&arguments.get(0), &arguments.get(1)))
}

const GLOBAL_FUNCTIONS: &[(&str, GlobalFn)] = &[
    ("isFinite", global_is_finite),
    ("isNaN", global_is_nan),
    ("parseFloat", global_parse_float),
    ("parseInt", global_parse_int),
];

/// Looks up a global binding by name, handing the function properties out as
/// [`Function`] values. Unknown names read as `undefined`.
pub fn get_global(name: &str) -> Value {
    match name {
        "NaN" => return Value::Number(NAN),
        "Infinity" => return Value::Number(INFINITY),
        "undefined" => return Value::Undefined,
        _ => {}
    }
    GLOBAL_FUNCTIONS
        .iter()
        .find(|(global_name, _)| *global_name == name)
        .map_or(Value::Undefined, |(global_name, behaviour)| {
            Value::Function(Function::new(global_name, *behaviour))
        })
}
