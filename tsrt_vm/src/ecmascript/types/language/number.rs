// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod radix;

use super::String;
use radix::{fraction_to_radix_string, integer_to_radix_string};

/// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
///
/// Always a double-precision float; integers are not stored separately.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Number(f64);

impl Number {
    pub const NAN: Number = Number(f64::NAN);
    pub const POS_INF: Number = Number(f64::INFINITY);
    pub const NEG_INF: Number = Number(f64::NEG_INFINITY);
    pub const ZERO: Number = Number(0.0);
    pub const ONE: Number = Number(1.0);

    pub const fn from_f64(value: f64) -> Self {
        Self(value)
    }

    pub const fn into_f64(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn is_pos_zero(self) -> bool {
        self.0 == 0.0 && self.0.is_sign_positive()
    }

    pub fn is_neg_zero(self) -> bool {
        self.0 == 0.0 && self.0.is_sign_negative()
    }

    /// Is ±0 or NaN, the two Number values that convert to false.
    pub fn is_falsy(self) -> bool {
        self.0 == 0.0 || self.0.is_nan()
    }

    /// ### [6.1.6.1.20 Number::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-number-tostring)
    ///
    /// Shortest round-tripping decimal representation, switching to
    /// exponential notation outside of `[1e-7, 1e21)`.
    pub fn to_string_radix_10(x: Self) -> String {
        let mut buffer = ryu_js::Buffer::new();
        String::from(buffer.format(x.0))
    }

    /// ### [6.1.6.1.20 Number::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-number-tostring)
    ///
    /// `radix` must be in the inclusive range 2 to 36.
    pub fn to_string_radix_n(x: Self, radix: u32) -> String {
        debug_assert!((2..=36).contains(&radix));
        if radix == 10 || !x.is_finite() {
            return Self::to_string_radix_10(x);
        }
        let value = x.0;
        if value == 0.0 {
            return String::from("0");
        }
        let magnitude = value.abs();
        let mut integer = magnitude.trunc();
        let (fraction, carry) = fraction_to_radix_string(magnitude, magnitude - integer, radix);
        if carry {
            integer += 1.0;
        }
        let mut result = std::string::String::new();
        if value < 0.0 {
            result.push('-');
        }
        result.push_str(&integer_to_radix_string(integer, radix));
        if !fraction.is_empty() {
            result.push('.');
            result.push_str(&fraction);
        }
        String::from(result)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.0
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Number::to_string_radix_10(*self).as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn radix_10_formatting() {
        assert_eq!(Number::to_string_radix_10(1.0.into()), "1");
        assert_eq!(Number::to_string_radix_10(1.5.into()), "1.5");
        assert_eq!(Number::to_string_radix_10((-0.0).into()), "0");
        assert_eq!(Number::to_string_radix_10(1e21.into()), "1e+21");
        assert_eq!(Number::to_string_radix_10(Number::NAN), "NaN");
        assert_eq!(Number::to_string_radix_10(Number::POS_INF), "Infinity");
        assert_eq!(Number::to_string_radix_10(Number::NEG_INF), "-Infinity");
    }

    #[test]
    fn radix_n_formatting() {
        assert_eq!(Number::to_string_radix_n(255.0.into(), 16), "ff");
        assert_eq!(Number::to_string_radix_n(255.0.into(), 2), "11111111");
        assert_eq!(Number::to_string_radix_n((-255.0).into(), 36), "-73");
        assert_eq!(Number::to_string_radix_n(0.5.into(), 2), "0.1");
        assert_eq!(Number::to_string_radix_n(0.0.into(), 7), "0");
        assert_eq!(Number::to_string_radix_n(Number::NAN, 2), "NaN");
    }
}
