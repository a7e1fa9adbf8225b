// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The language implicitly performs automatic type conversion as needed. The
//! conversion operations here are polymorphic over every [`Value`] kind and
//! total: a conversion that has no sensible result produces NaN (or the
//! empty/false equivalent) rather than an error.
//!
//! Objects carry no properties in this runtime, so there is no user-visible
//! `valueOf`/`toString` to consult and ToPrimitive is the identity.

use num_traits::ToPrimitive;

use crate::ecmascript::types::{Number, String, Value};

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// Every value is already its own primitive form, so no hint is taken.
pub fn to_primitive(input: &Value) -> Value {
    input.clone()
}

/// ### [7.1.2 ToBoolean ( argument )](https://tc39.es/ecma262/#sec-toboolean)
pub fn to_boolean(argument: &Value) -> bool {
    match argument {
        // 1. If argument is a Boolean, return argument.
        Value::Boolean(bool) => *bool,
        // 2. If argument is one of undefined, null, +0𝔽, -0𝔽, NaN, 0ℤ, or
        //    the empty String, return false.
        Value::Undefined | Value::Null => false,
        Value::Number(number) => !number.is_falsy(),
        Value::String(string) => !string.is_empty(),
        // 4. Return true.
        Value::Symbol(_) | Value::Object(_) | Value::Array(_) | Value::Function(_) => true,
    }
}

/// ### [7.1.4 ToNumber ( argument )](https://tc39.es/ecma262/#sec-tonumber)
///
/// Null converts to +0, matching the language. Symbols and every object kind
/// convert to NaN instead of throwing.
pub fn to_number(argument: &Value) -> Number {
    match argument {
        Value::Number(number) => *number,
        Value::Undefined => Number::NAN,
        Value::Null => Number::ZERO,
        Value::Boolean(true) => Number::ONE,
        Value::Boolean(false) => Number::ZERO,
        Value::String(string) => string_to_number(string.as_str()),
        Value::Symbol(_) | Value::Object(_) | Value::Array(_) | Value::Function(_) => Number::NAN,
    }
}

/// Is `c` WhiteSpace or a LineTerminator? These are the characters the
/// language trims, which differ slightly from [`char::is_whitespace`].
pub(crate) fn is_trimmable_whitespace(c: char) -> bool {
    matches!(
        c,
        // WhiteSpace
        '\u{0009}' | '\u{000B}' | '\u{000C}' | '\u{FEFF}' |
        // Space_Separator (Zs)
        '\u{0020}' | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}' |
        '\u{202F}' | '\u{205F}' | '\u{3000}' |
        // LineTerminator
        '\u{000A}' | '\u{000D}' | '\u{2028}' | '\u{2029}'
    )
}

/// ### [7.1.4.1.1 StringToNumber ( str )](https://tc39.es/ecma262/#sec-stringtonumber)
pub fn string_to_number(str: &str) -> Number {
    let str = str.trim_matches(is_trimmable_whitespace);

    if str.is_empty() {
        return Number::ZERO;
    }

    match str {
        "Infinity" | "+Infinity" => return Number::POS_INF,
        "-Infinity" => return Number::NEG_INF,
        _ => {}
    }

    // NonDecimalIntegerLiteral; these take no sign.
    let non_decimal = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| str.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = non_decimal {
        return parse_non_decimal_digits(digits, radix);
    }

    // StrUnsignedDecimalLiteral must start with a digit or a dot after the
    // optional sign. This keeps the float parser from accepting its own
    // spellings of infinity and NaN.
    let unsigned = str.strip_prefix(['+', '-']).unwrap_or(str);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Number::NAN;
    }

    match fast_float::parse::<f64, _>(str) {
        Ok(value) => Number::from(value),
        Err(_) => Number::NAN,
    }
}

fn parse_non_decimal_digits(digits: &str, radix: u32) -> Number {
    if digits.is_empty() {
        return Number::NAN;
    }
    let radix_f64 = radix as f64;
    let mut value = 0.0f64;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return Number::NAN;
        };
        value = value * radix_f64 + digit as f64;
    }
    Number::from(value)
}

/// The result of ToIntegerOrInfinity: an integral f64 or one of the
/// infinities, never NaN or -0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct IntegerOrInfinity(f64);

impl IntegerOrInfinity {
    pub const ZERO: IntegerOrInfinity = IntegerOrInfinity(0.0);

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn is_pos_infinity(self) -> bool {
        self.0 == f64::INFINITY
    }

    pub fn is_neg_infinity(self) -> bool {
        self.0 == f64::NEG_INFINITY
    }

    /// Saturates the infinities to the `i64` range.
    pub fn into_i64(self) -> i64 {
        self.0.to_i64().unwrap_or(if self.0 > 0.0 { i64::MAX } else { i64::MIN })
    }

    pub fn into_f64(self) -> f64 {
        self.0
    }
}

impl From<Number> for IntegerOrInfinity {
    /// ### [7.1.5 ToIntegerOrInfinity ( argument )](https://tc39.es/ecma262/#sec-tointegerorinfinity)
    fn from(number: Number) -> Self {
        let number = number.into_f64();
        // 2. If number is one of NaN, +0𝔽, or -0𝔽, return 0.
        if number.is_nan() || number == 0.0 {
            return Self::ZERO;
        }
        // 3. If number is +∞𝔽, return +∞.
        // 4. If number is -∞𝔽, return -∞.
        // 5. Return truncate(ℝ(number)).
        let integer = number.trunc();
        // Truncating -0.5 gives -0.
        if integer == 0.0 {
            return Self::ZERO;
        }
        Self(integer)
    }
}

/// ### [7.1.5 ToIntegerOrInfinity ( argument )](https://tc39.es/ecma262/#sec-tointegerorinfinity)
pub fn to_integer_or_infinity(argument: &Value) -> IntegerOrInfinity {
    IntegerOrInfinity::from(to_number(argument))
}

/// ### [7.1.6 ToInt32 ( argument )](https://tc39.es/ecma262/#sec-toint32)
pub fn to_int32(argument: &Value) -> i32 {
    to_int32_number(to_number(argument))
}

pub(crate) fn to_int32_number(number: Number) -> i32 {
    let number = number.into_f64();
    // 2. If number is not finite or number is either +0𝔽 or -0𝔽, return +0𝔽.
    if !number.is_finite() || number == 0.0 {
        return 0;
    }
    // 3. Let int be truncate(ℝ(number)).
    // 4. Let int32bit be int modulo 2**32.
    let int32bit = number.trunc().rem_euclid(4294967296.0);
    // 5. If int32bit ≥ 2**31, return 𝔽(int32bit - 2**32); otherwise return
    //    𝔽(int32bit).
    int32bit as u32 as i32
}

/// ### [7.1.7 ToUint32 ( argument )](https://tc39.es/ecma262/#sec-touint32)
pub fn to_uint32(argument: &Value) -> u32 {
    // Both conversions share the modulo 2**32 step and differ only in how
    // the top bit is read.
    to_int32(argument) as u32
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
///
/// Unlike the language this never throws: a Symbol converts to its
/// descriptive string, functions to a fixed placeholder source text.
pub fn to_string(argument: &Value) -> String {
    match argument {
        Value::String(string) => string.clone(),
        Value::Undefined => String::from("undefined"),
        Value::Null => String::from("null"),
        Value::Boolean(true) => String::from("true"),
        Value::Boolean(false) => String::from("false"),
        Value::Number(number) => Number::to_string_radix_10(*number),
        Value::Symbol(symbol) => symbol.descriptive_string(),
        Value::Object(_) => String::from("[object Object]"),
        Value::Array(array) => array.join(","),
        Value::Function(_) => String::from("function () { [native code] }"),
    }
}

/// Resolves a relative index against `len` the way `slice`, `at` and
/// friends do: negative values count from the end and the result is
/// clamped to `0..=len`.
pub(crate) fn resolve_relative_index(relative: i64, len: usize) -> usize {
    if relative < 0 {
        let from_end = relative.unsigned_abs();
        (len as u64).saturating_sub(from_end) as usize
    } else {
        (relative as u64).min(len as u64) as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::types::{Function, OrdinaryObject, Symbol};

    #[test]
    fn to_boolean_falsy_values() {
        assert!(!to_boolean(&Value::Undefined));
        assert!(!to_boolean(&Value::Null));
        assert!(!to_boolean(&Value::from(0)));
        assert!(!to_boolean(&Value::from(-0.0)));
        assert!(!to_boolean(&Value::nan()));
        assert!(!to_boolean(&Value::from("")));
        assert!(!to_boolean(&Value::from(false)));
    }

    #[test]
    fn to_boolean_truthy_values() {
        assert!(to_boolean(&Value::from("0")));
        assert!(to_boolean(&Value::from("false")));
        assert!(to_boolean(&Value::from(-1)));
        assert!(to_boolean(&Value::pos_inf()));
        assert!(to_boolean(&Value::from(Vec::new())));
        assert!(to_boolean(&Value::from(OrdinaryObject::new())));
        assert!(to_boolean(&Value::from(Symbol::new(None))));
    }

    #[test]
    fn to_number_per_kind() {
        assert!(to_number(&Value::Undefined).is_nan());
        assert!(to_number(&Value::Null).is_pos_zero());
        assert_eq!(to_number(&Value::from(true)), Number::ONE);
        assert_eq!(to_number(&Value::from(false)), Number::ZERO);
        assert!(to_number(&Value::from(vec![Value::from(1)])).is_nan());
        assert!(to_number(&Value::from(OrdinaryObject::new())).is_nan());
        let function = Function::new("f", |_| Value::Undefined);
        assert!(to_number(&Value::from(function)).is_nan());
    }

    #[test]
    fn string_to_number_grammar() {
        assert_eq!(string_to_number("42").into_f64(), 42.0);
        assert_eq!(string_to_number("  -1.5e3\n").into_f64(), -1500.0);
        assert_eq!(string_to_number(".5").into_f64(), 0.5);
        assert_eq!(string_to_number("5.").into_f64(), 5.0);
        assert!(string_to_number("").is_pos_zero());
        assert!(string_to_number(" \t ").is_pos_zero());
        assert_eq!(string_to_number("0x1F").into_f64(), 31.0);
        assert_eq!(string_to_number("0o17").into_f64(), 15.0);
        assert_eq!(string_to_number("0b101").into_f64(), 5.0);
        assert_eq!(string_to_number("-Infinity"), Number::NEG_INF);
        assert_eq!(string_to_number("+Infinity"), Number::POS_INF);
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("NaN").is_nan());
        assert!(string_to_number("infinity").is_nan());
        assert!(string_to_number("12px").is_nan());
        assert!(string_to_number("-0x10").is_nan());
        assert!(string_to_number("0x").is_nan());
        assert!(string_to_number("1_000").is_nan());
    }

    #[test]
    fn to_string_per_kind() {
        assert_eq!(to_string(&Value::Undefined), "undefined");
        assert_eq!(to_string(&Value::Null), "null");
        assert_eq!(to_string(&Value::from(true)), "true");
        assert_eq!(to_string(&Value::from(1.5)), "1.5");
        assert_eq!(to_string(&Value::from(-0.0)), "0");
        assert_eq!(to_string(&Value::from(OrdinaryObject::new())), "[object Object]");
        assert_eq!(to_string(&Value::from(Symbol::new(Some("id")))), "Symbol(id)");
        let array = Value::from(vec![
            Value::from(1),
            Value::Null,
            Value::from("a"),
            Value::Undefined,
        ]);
        assert_eq!(to_string(&array), "1,,a,");
        let function = Function::new("f", |_| Value::Undefined);
        assert_eq!(
            to_string(&Value::from(function)),
            "function () { [native code] }"
        );
    }

    #[test]
    fn to_string_is_idempotent() {
        for value in [
            Value::from(0.1),
            Value::Null,
            Value::from("x"),
            Value::from(vec![Value::from(true)]),
        ] {
            let once = to_string(&value);
            assert_eq!(to_string(&Value::from(once.clone())), once);
        }
    }

    #[test]
    fn integer_or_infinity() {
        assert_eq!(to_integer_or_infinity(&Value::nan()), IntegerOrInfinity::ZERO);
        assert_eq!(to_integer_or_infinity(&Value::from(-2.7)).into_i64(), -2);
        assert_eq!(to_integer_or_infinity(&Value::from("3.9")).into_i64(), 3);
        assert!(to_integer_or_infinity(&Value::neg_inf()).is_neg_infinity());
        assert_eq!(to_integer_or_infinity(&Value::pos_inf()).into_i64(), i64::MAX);
        assert!(to_integer_or_infinity(&Value::from(-0.5)).into_f64().is_sign_positive());
    }

    #[test]
    fn int32_wraps() {
        assert_eq!(to_int32(&Value::from(4294967297.0)), 1);
        assert_eq!(to_int32(&Value::from(2147483648.0)), -2147483648);
        assert_eq!(to_int32(&Value::from(-1.9)), -1);
        assert_eq!(to_int32(&Value::nan()), 0);
        assert_eq!(to_int32(&Value::pos_inf()), 0);
    }

    #[test]
    fn uint32_wraps() {
        assert_eq!(to_uint32(&Value::from(-1)), u32::MAX);
        assert_eq!(to_uint32(&Value::from(4294967297.0)), 1);
        assert_eq!(to_uint32(&Value::from("7.9")), 7);
        assert_eq!(to_uint32(&Value::nan()), 0);
        assert_eq!(to_uint32(&Value::neg_inf()), 0);
    }

    #[test]
    fn relative_index() {
        assert_eq!(resolve_relative_index(-3, 5), 2);
        assert_eq!(resolve_relative_index(-10, 5), 0);
        assert_eq!(resolve_relative_index(7, 5), 5);
        assert_eq!(resolve_relative_index(i64::MIN, 5), 0);
    }
}
