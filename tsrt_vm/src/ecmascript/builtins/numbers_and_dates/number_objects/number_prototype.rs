// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Number formatting never throws here: out of range digit counts and radixes
//! are clamped or replaced by a default instead of raising a RangeError.

use crate::ecmascript::{
    abstract_operations::type_conversion::to_integer_or_infinity,
    builtins::{ArgumentsList, Behaviour, Builtin, BuiltinMethod},
    execution::{JsError, JsResult},
    types::{Number, String, Value},
};

pub(crate) struct NumberPrototype;

struct NumberPrototypeToExponential;
impl Builtin for NumberPrototypeToExponential {
    const NAME: &'static str = "toExponential";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::to_exponential);
}

struct NumberPrototypeToFixed;
impl Builtin for NumberPrototypeToFixed {
    const NAME: &'static str = "toFixed";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::to_fixed);
}

struct NumberPrototypeToLocaleString;
impl Builtin for NumberPrototypeToLocaleString {
    const NAME: &'static str = "toLocaleString";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::to_locale_string);
}

struct NumberPrototypeToPrecision;
impl Builtin for NumberPrototypeToPrecision {
    const NAME: &'static str = "toPrecision";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::to_precision);
}

struct NumberPrototypeToString;
impl Builtin for NumberPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::to_string);
}

struct NumberPrototypeValueOf;
impl Builtin for NumberPrototypeValueOf {
    const NAME: &'static str = "valueOf";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::value_of);
}

impl Number {
    /// ### [21.1.3.3 Number.prototype.toFixed ( fractionDigits )](https://tc39.es/ecma262/#sec-number.prototype.tofixed)
    ///
    /// `fraction_digits` is clamped to `0..=20`. Non-finite values and
    /// magnitudes of 10^21 or more fall back to [`Number::to_string_radix_10`].
    pub fn to_fixed(self, fraction_digits: i64) -> String {
        let f = fraction_digits.clamp(0, 20) as u8;
        // 6. If x is not finite, return Number::toString(x, 10).
        if !self.is_finite() {
            return Number::to_string_radix_10(self);
        }
        // 7. Set x to ℝ(x).
        let mut x = self.into_f64();
        // 10. If x ≥ 10**21, then let m be ! ToString(𝔽(x)).
        if x.abs() >= 1e21 {
            return Number::to_string_radix_10(self);
        }
        // This gets rid of -0.0
        if x == 0.0 {
            x = 0.0;
        }
        let mut buffer = ryu_js::Buffer::new();
        String::from(buffer.format_to_fixed(x, f))
    }

    /// ### [21.1.3.2 Number.prototype.toExponential ( fractionDigits )](https://tc39.es/ecma262/#sec-number.prototype.toexponential)
    ///
    /// Without `fraction_digits` as many digits as necessary to represent the
    /// value uniquely are used. A count outside `0..=20` means 20.
    pub fn to_exponential(self, fraction_digits: Option<i64>) -> String {
        // 4. If x is not finite, return Number::toString(x, 10).
        if !self.is_finite() {
            return Number::to_string_radix_10(self);
        }
        // 6. Set x to ℝ(x).
        let mut x = self.into_f64();
        // This gets rid of -0.0
        if x == 0.0 {
            x = 0.0;
        }
        match fraction_digits {
            None => f64_to_exponential(x),
            Some(f) => {
                let f = if (0..=20).contains(&f) { f as usize } else { 20 };
                f64_to_exponential_with_precision(x, f)
            }
        }
    }

    /// ### [21.1.3.5 Number.prototype.toPrecision ( precision )](https://tc39.es/ecma262/#sec-number.prototype.toprecision)
    ///
    /// A missing precision, or one outside `1..=21`, gives the plain
    /// `toString` result.
    ///
    /// Copied from Boa JS engine. Source https://github.com/boa-dev/boa/blob/6f1d7d11ce49040eafe54e5ff2da379be4d998c2/core/engine/src/builtins/number/mod.rs#L412
    ///
    /// Copyright (c) 2019 Jason Williams
    pub fn to_precision(self, precision: Option<i64>) -> String {
        // 2. If precision is undefined, return ! ToString(x).
        let Some(precision) = precision.filter(|p| (1..=21).contains(p)) else {
            return Number::to_string_radix_10(self);
        };
        // 4. If x is not finite, return Number::toString(x, 10).
        if !self.is_finite() {
            return Number::to_string_radix_10(self);
        }
        let precision = precision as u8;

        // 6. Set x to ℝ(x).
        let mut x_f64 = self.into_f64();

        // 7. Let s be the empty String.
        let mut s = std::string::String::new();
        let mut m: std::string::String;
        let mut e: i32;

        // 8. If x < 0, then
        if x_f64 < 0. {
            // a. Set s to the code unit 0x002D (HYPHEN-MINUS).
            s.push('-');
            // b. Set x to -x.
            x_f64 = -x_f64;
        }

        // 9. If x = 0, then
        if x_f64 == 0. {
            // a. Let m be the String value consisting of p occurrences of the
            // code unit 0x0030 (DIGIT ZERO).
            m = "0".repeat(precision as usize);
            // b. Let e be 0.
            e = 0;
        } else {
            // 10. Else,

            // Due to f64 limitations, this part differs a bit from the
            // ECMAScript algorithm, but has the same effect. It manipulates
            // the string constructed by `format`: digits with an optional
            // dot between two of them.
            m = format!("{x_f64:.100}");

            // a: getting an exponent
            e = flt_str_to_exp(&m);

            // b: getting relevant digits only
            if e < 0 {
                m = m.split_off((1 - e) as usize);
            } else if let Some(n) = m.find('.') {
                m.remove(n);
            }

            // impl: having exactly `precision` digits in `suffix`
            if round_to_precision(&mut m, precision as usize) {
                e += 1;
            }

            // c. If e < -6 or e ≥ p, then
            // Note: This is switching to scientific notation.
            if e < -6 || e >= precision as i32 {
                // ii. If p ≠ 1, then
                //     3. Set m to the string-concatenation of a, ".", and b.
                if precision > 1 {
                    m.insert(1, '.');
                }

                m.push('e');

                // iii. If e > 0, then
                //      1. Let c be the code unit 0x002B (PLUS SIGN).
                if e >= precision as i32 {
                    m.push('+');
                }

                // v. Let d be the String value consisting of the digits of
                // the decimal representation of e.
                m.push_str(&e.to_string());

                return String::from(s + &m);
            }
        }

        // 11. If e = p - 1, return the string-concatenation of s and m.
        let e_inc = e + 1;
        if e_inc == precision as i32 {
            return String::from(s + &m);
        }

        // 12. If e ≥ 0, then
        if e >= 0 {
            // a. Set m to the string-concatenation of the first e + 1 code
            // units of m, the code unit 0x002E (FULL STOP), and the remaining
            // p - (e + 1) code units of m.
            m.insert(e_inc as usize, '.');
        } else {
            // 13. Else,
            // a. Set m to the string-concatenation of the code unit 0x0030
            // (DIGIT ZERO), the code unit 0x002E (FULL STOP), -(e + 1)
            // occurrences of the code unit 0x0030 (DIGIT ZERO), and the String
            // m.
            s.push('0');
            s.push('.');
            s.push_str(&"0".repeat(-e_inc as usize));
        }

        // 14. Return the string-concatenation of s and m.
        String::from(s + &m)
    }

    /// ### [21.1.3.6 Number.prototype.toString ( \[ radix \] )](https://tc39.es/ecma262/#sec-number.prototype.tostring)
    ///
    /// A radix outside `2..=36` is treated as 10.
    pub fn to_string_radix(self, radix: Option<i64>) -> String {
        match radix {
            Some(radix) if (2..=36).contains(&radix) && radix != 10 => {
                Number::to_string_radix_n(self, radix as u32)
            }
            _ => Number::to_string_radix_10(self),
        }
    }

    /// ### [21.1.3.7 Number.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-number.prototype.valueof)
    pub fn value_of(self) -> Number {
        self
    }
}

/// round_to_precision - used in to_precision
///
/// This procedure has two roles:
/// - If there are enough or more than enough digits in the
///   string to show the required precision, the number
///   represented by these digits is rounded using string
///   manipulation.
/// - Else, zeroes are appended to the string.
/// - Additionally, sometimes the exponent was wrongly computed and
///   while up-rounding we find that we need an extra digit. When this
///   happens, we return true so that the calling context can adjust
///   the exponent. The string is kept at an exact length of precision.
///
/// When this procedure returns, digits is exactly precision long.
///
/// Copied from Boa JS engine. Source https://github.com/boa-dev/boa/blob/6f1d7d11ce49040eafe54e5ff2da379be4d998c2/core/engine/src/builtins/number/mod.rs#L351
///
/// Copyright (c) 2019 Jason Williams
fn round_to_precision(digits: &mut std::string::String, precision: usize) -> bool {
    if digits.len() <= precision {
        digits.push_str(&"0".repeat(precision - digits.len()));
        return false;
    }
    let to_round = digits.split_off(precision);
    let Some(last) = digits.pop() else {
        // Zero precision never reaches here.
        return false;
    };
    let mut digit = last as u8;
    if to_round.chars().next().is_some_and(|first| first > '4') {
        digit += 1;
    }

    if digit as char != ':' {
        digits.push(digit as char);
        return false;
    }

    // ':' is '9' + 1
    // need to propagate the increment backward
    let mut replacement = std::string::String::from("0");
    let mut propagated = false;
    for c in digits.chars().rev() {
        let d = match (c, propagated) {
            ('0'..='8', false) => (c as u8 + 1) as char,
            (_, false) => '0',
            (_, true) => c,
        };
        replacement.push(d);
        if d != '0' {
            propagated = true;
        }
    }
    digits.clear();
    let replacement = if propagated {
        replacement.as_str()
    } else {
        digits.push('1');
        &replacement.as_str()[1..]
    };
    for c in replacement.chars().rev() {
        digits.push(c);
    }
    !propagated
}

/// Copied from Boa JS engine. Source https://github.com/boa-dev/boa/blob/6f1d7d11ce49040eafe54e5ff2da379be4d998c2/core/engine/src/builtins/number/mod.rs#L318
///
/// Copyright (c) 2019 Jason Williams
fn flt_str_to_exp(flt: &str) -> i32 {
    let mut non_zero_encountered = false;
    let mut dot_encountered = false;
    for (i, c) in flt.chars().enumerate() {
        if c == '.' {
            if non_zero_encountered {
                return (i as i32) - 1;
            }
            dot_encountered = true;
        } else if c != '0' {
            if dot_encountered {
                return 1 - (i as i32);
            }
            non_zero_encountered = true;
        }
    }
    (flt.len() as i32) - 1
}

fn f64_to_exponential(x: f64) -> String {
    match x.abs() {
        x_abs if x_abs >= 1.0 || x_abs == 0.0 => {
            String::from(format!("{x:e}").replace('e', "e+"))
        }
        _ => String::from(format!("{x:e}")),
    }
}

/// Formats `x` with `f` fraction digits in exponential notation.
///
/// The float formatter rounds exact ties to even, while the language picks
/// the larger digit, so the exact decimal expansion is rounded by hand.
fn f64_to_exponential_with_precision(x: f64, f: usize) -> String {
    // 767 significant digits cover every finite f64 exactly.
    let exact = format!("{:.770e}", x.abs());
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let mut digits: std::string::String = mantissa.chars().filter(|c| *c != '.').collect();
    if round_to_precision(&mut digits, f + 1) {
        exponent += 1;
    }

    let mut res = std::string::String::with_capacity(f + 8);
    if x < 0.0 {
        res.push('-');
    }
    res.push_str(&digits[..1]);
    if f > 0 {
        res.push('.');
        res.push_str(&digits[1..]);
    }
    res.push('e');
    res.push(if exponent < 0 { '-' } else { '+' });
    res.push_str(&exponent.unsigned_abs().to_string());
    String::from(res)
}

/// ### [21.1.3.7.1 ThisNumberValue ( value )](https://tc39.es/ecma262/#sec-thisnumbervalue)
#[inline(always)]
fn this_number_value(value: &Value) -> JsResult<Number> {
    // 1. If value is a Number, return value.
    match value {
        Value::Number(number) => Ok(*number),
        // 3. Throw a TypeError exception.
        _ => Err(JsError::type_error("Not a Number")),
    }
}

/// Reads an optional integer argument; `undefined` means absent.
fn optional_integer(argument: Value) -> Option<i64> {
    if argument.is_undefined() {
        None
    } else {
        Some(to_integer_or_infinity(&argument).into_i64())
    }
}

impl NumberPrototype {
    pub(crate) const METHODS: &'static [BuiltinMethod] = &[
        BuiltinMethod::of::<NumberPrototypeToExponential>(),
        BuiltinMethod::of::<NumberPrototypeToFixed>(),
        BuiltinMethod::of::<NumberPrototypeToLocaleString>(),
        BuiltinMethod::of::<NumberPrototypeToPrecision>(),
        BuiltinMethod::of::<NumberPrototypeToString>(),
        BuiltinMethod::of::<NumberPrototypeValueOf>(),
    ];

    fn to_exponential(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let x be ? ThisNumberValue(this value).
        let x = this_number_value(this_value)?;
        // 2. Let f be ? ToIntegerOrInfinity(fractionDigits).
        let f = optional_integer(arguments.get(0));
        Ok(Value::String(x.to_exponential(f)))
    }

    /// ### [21.1.3.3 Number.prototype.toFixed ( fractionDigits )](https://tc39.es/ecma262/#sec-number.prototype.tofixed)
    ///
    /// > NOTE 2: The output of toFixed may be more precise than toString for
    /// > some values because toString only prints enough significant digits to
    /// > distinguish the number from adjacent Number values.
    fn to_fixed(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let x = this_number_value(this_value)?;
        // 2. Let f be ? ToIntegerOrInfinity(fractionDigits).
        // 3. Assert: If fractionDigits is undefined, then f is 0.
        let f = to_integer_or_infinity(&arguments.get(0)).into_i64();
        Ok(Value::String(x.to_fixed(f)))
    }

    /// ### [21.1.3.4 Number.prototype.toLocaleString ( \[ reserved1 \[ , reserved2 \] \] )](https://tc39.es/ecma262/#sec-number.prototype.tolocalestring)
    fn to_locale_string(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        Self::to_string(this_value, ArgumentsList::default())
    }

    fn to_precision(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let x = this_number_value(this_value)?;
        let p = optional_integer(arguments.get(0));
        Ok(Value::String(x.to_precision(p)))
    }

    fn to_string(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let x = this_number_value(this_value)?;
        // 2. If radix is undefined, let radixMV be 10.
        let radix = optional_integer(arguments.get(0));
        Ok(Value::String(x.to_string_radix(radix)))
    }

    fn value_of(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisNumberValue(this value).
        this_number_value(this_value).map(Value::Number)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn n(value: f64) -> Number {
        Number::from(value)
    }

    #[test]
    fn to_fixed() {
        assert_eq!(n(3.14159).to_fixed(2), "3.14");
        assert_eq!(n(1.0).to_fixed(0), "1");
        assert_eq!(n(1.0).to_fixed(-5), "1");
        assert_eq!(n(0.5).to_fixed(3), "0.500");
        assert_eq!(n(-0.0).to_fixed(1), "0.0");
        assert_eq!(n(1.0).to_fixed(25), "1.00000000000000000000");
        assert_eq!(n(1e21).to_fixed(2), "1e+21");
        assert_eq!(Number::NAN.to_fixed(2), "NaN");
        assert_eq!(Number::NEG_INF.to_fixed(2), "-Infinity");
    }

    #[test]
    fn to_exponential() {
        assert_eq!(n(123456.0).to_exponential(Some(2)), "1.23e+5");
        assert_eq!(n(123456.0).to_exponential(None), "1.23456e+5");
        assert_eq!(n(0.00015).to_exponential(None), "1.5e-4");
        assert_eq!(n(0.00015).to_exponential(Some(1)), "1.5e-4");
        assert_eq!(n(0.0).to_exponential(None), "0e+0");
        assert_eq!(n(1.0).to_exponential(Some(-1)), "1.00000000000000000000e+0");
        assert_eq!(Number::POS_INF.to_exponential(Some(2)), "Infinity");
        assert_eq!(n(-9.99).to_exponential(Some(1)), "-1.0e+1");
        assert_eq!(n(0.0).to_exponential(Some(2)), "0.00e+0");
    }

    #[test]
    fn to_exponential_rounds_ties_up() {
        assert_eq!(n(1.25).to_exponential(Some(1)), "1.3e+0");
        assert_eq!(n(12.5).to_exponential(Some(1)), "1.3e+1");
        assert_eq!(n(-1.25).to_exponential(Some(1)), "-1.3e+0");
        assert_eq!(n(0.125).to_exponential(Some(1)), "1.3e-1");
        // 1.35 is stored slightly above the tie.
        assert_eq!(n(1.35).to_exponential(Some(1)), "1.4e+0");
    }

    #[test]
    fn to_precision() {
        assert_eq!(n(123.456).to_precision(Some(4)), "123.5");
        assert_eq!(n(0.000123).to_precision(Some(2)), "0.00012");
        assert_eq!(n(123456.0).to_precision(Some(2)), "1.2e+5");
        assert_eq!(n(1e-7).to_precision(Some(1)), "1e-7");
        assert_eq!(n(0.0).to_precision(Some(3)), "0.00");
        assert_eq!(n(-1.5).to_precision(Some(3)), "-1.50");
        assert_eq!(n(99.99).to_precision(Some(3)), "100");
        assert_eq!(n(1.5).to_precision(None), "1.5");
        assert_eq!(n(1.5).to_precision(Some(0)), "1.5");
        assert_eq!(n(1.5).to_precision(Some(22)), "1.5");
        assert_eq!(Number::NAN.to_precision(Some(3)), "NaN");
    }

    #[test]
    fn to_string_radix() {
        assert_eq!(n(255.0).to_string_radix(Some(16)), "ff");
        assert_eq!(n(255.0).to_string_radix(Some(1)), "255");
        assert_eq!(n(255.0).to_string_radix(Some(37)), "255");
        assert_eq!(n(255.0).to_string_radix(None), "255");
        assert_eq!(n(-8.5).to_string_radix(Some(2)), "-1000.1");
    }

    #[test]
    fn dynamic_methods() {
        let mut value = Value::from(3.14159);
        assert_eq!(
            value.invoke("toFixed", &[Value::from(2)]).unwrap(),
            Value::from("3.14")
        );
        assert_eq!(value.invoke("toFixed", &[]).unwrap(), Value::from("3"));
        assert_eq!(
            value.invoke("toPrecision", &[]).unwrap(),
            Value::from("3.14159")
        );
        assert_eq!(
            Value::from(10).invoke("toString", &[Value::from(2)]).unwrap(),
            Value::from("1010")
        );
        assert_eq!(value.invoke("valueOf", &[]).unwrap(), value);
    }
}
