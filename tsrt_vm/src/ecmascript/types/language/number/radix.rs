// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// A macro which matches a radix and on a match defines a constant called
/// RADIX to the appropriate lexical number format.
macro_rules! with_radix {
    ($radix:ident, $expr:expr) => {
        match $radix {
            2 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(2);
                $expr
            }
            3 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(3);
                $expr
            }
            4 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(4);
                $expr
            }
            5 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(5);
                $expr
            }
            6 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(6);
                $expr
            }
            7 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(7);
                $expr
            }
            8 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(8);
                $expr
            }
            9 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(9);
                $expr
            }
            10 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(10);
                $expr
            }
            11 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(11);
                $expr
            }
            12 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(12);
                $expr
            }
            13 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(13);
                $expr
            }
            14 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(14);
                $expr
            }
            15 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(15);
                $expr
            }
            16 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(16);
                $expr
            }
            17 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(17);
                $expr
            }
            18 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(18);
                $expr
            }
            19 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(19);
                $expr
            }
            20 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(20);
                $expr
            }
            21 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(21);
                $expr
            }
            22 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(22);
                $expr
            }
            23 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(23);
                $expr
            }
            24 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(24);
                $expr
            }
            25 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(25);
                $expr
            }
            26 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(26);
                $expr
            }
            27 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(27);
                $expr
            }
            28 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(28);
                $expr
            }
            29 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(29);
                $expr
            }
            30 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(30);
                $expr
            }
            31 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(31);
                $expr
            }
            32 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(32);
                $expr
            }
            33 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(33);
                $expr
            }
            34 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(34);
                $expr
            }
            35 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(35);
                $expr
            }
            36 => {
                const RADIX: u128 = lexical::NumberFormatBuilder::from_radix(36);
                $expr
            }
            _ => unreachable!(),
        }
    };
}

/// Formats the integral part of a finite number in the given radix.
///
/// Values below 2^53 go through lexical's integer writer; anything larger is
/// produced digit by digit since it no longer fits an exact integer type.
pub(crate) fn integer_to_radix_string(integer: f64, radix: u32) -> std::string::String {
    debug_assert!(integer.is_finite() && integer >= 0.0 && integer.trunc() == integer);
    if integer < 9007199254740992.0 {
        let integer = integer as u64;
        let mut string = with_radix!(radix, {
            lexical::to_string_with_options::<u64, RADIX>(
                integer,
                &lexical::WriteIntegerOptions::new(),
            )
        });
        string.make_ascii_lowercase();
        return string;
    }
    let radix_f64 = radix as f64;
    let mut digits = Vec::new();
    let mut integer = integer;
    while integer >= 1.0 {
        let remainder = integer % radix_f64;
        digits.push(digit_char(remainder as u32));
        integer = (integer - remainder) / radix_f64;
    }
    digits.iter().rev().collect()
}

/// Formats the fractional part (in `[0, 1)`) of a number whose full value is
/// `value`, emitting only as many digits as needed to distinguish `value`
/// from its neighbouring doubles. The returned flag is set when rounding
/// carried into the integral part.
pub(crate) fn fraction_to_radix_string(
    value: f64,
    fraction: f64,
    radix: u32,
) -> (std::string::String, bool) {
    let radix_f64 = radix as f64;
    // Half the distance to the next double; digits below it carry no
    // information.
    let next = f64::from_bits(value.to_bits() + 1);
    let mut delta = (0.5 * (next - value)).max(f64::from_bits(1));
    let mut fraction = fraction;
    let mut digits: Vec<u32> = Vec::new();
    let mut carry = false;
    if fraction >= delta {
        loop {
            fraction *= radix_f64;
            delta *= radix_f64;
            let digit = fraction as u32;
            digits.push(digit);
            fraction -= digit as f64;
            let rounds_up = fraction > 0.5 || (fraction == 0.5 && (digit & 1) == 1);
            if rounds_up && fraction + delta > 1.0 {
                carry = true;
                while let Some(last) = digits.pop() {
                    if last + 1 < radix {
                        digits.push(last + 1);
                        carry = false;
                        break;
                    }
                }
                break;
            }
            if fraction < delta {
                break;
            }
        }
    }
    (digits.into_iter().map(digit_char).collect(), carry)
}

fn digit_char(digit: u32) -> char {
    char::from_digit(digit, 36).unwrap_or('0')
}
