// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Positions taken and returned by these methods count Unicode code points;
//! a string never exposes its UTF-8 byte offsets.

use std::str::FromStr;

use unicode_normalization::{
    IsNormalized, UnicodeNormalization, is_nfc_quick, is_nfd_quick, is_nfkc_quick, is_nfkd_quick,
};

use crate::ecmascript::{
    abstract_operations::type_conversion::{
        is_trimmable_whitespace, resolve_relative_index, to_integer_or_infinity, to_string,
        to_uint32,
    },
    builtins::{Array, ArgumentsList, Behaviour, Builtin, BuiltinMethod},
    execution::{JsError, JsResult},
    types::{Number, String, Value},
};

pub(crate) struct StringPrototype;

struct StringPrototypeAt;
impl Builtin for StringPrototypeAt {
    const NAME: &'static str = "at";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::at);
}
struct StringPrototypeCharAt;
impl Builtin for StringPrototypeCharAt {
    const NAME: &'static str = "charAt";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::char_at);
}
struct StringPrototypeCharCodeAt;
impl Builtin for StringPrototypeCharCodeAt {
    const NAME: &'static str = "charCodeAt";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::char_code_at);
}
struct StringPrototypeCodePointAt;
impl Builtin for StringPrototypeCodePointAt {
    const NAME: &'static str = "codePointAt";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::code_point_at);
}
struct StringPrototypeConcat;
impl Builtin for StringPrototypeConcat {
    const NAME: &'static str = "concat";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::concat);
}
struct StringPrototypeEndsWith;
impl Builtin for StringPrototypeEndsWith {
    const NAME: &'static str = "endsWith";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::ends_with);
}
struct StringPrototypeIncludes;
impl Builtin for StringPrototypeIncludes {
    const NAME: &'static str = "includes";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::includes);
}
struct StringPrototypeIndexOf;
impl Builtin for StringPrototypeIndexOf {
    const NAME: &'static str = "indexOf";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::index_of);
}
struct StringPrototypeNormalize;
impl Builtin for StringPrototypeNormalize {
    const NAME: &'static str = "normalize";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::normalize);
}
struct StringPrototypeRepeat;
impl Builtin for StringPrototypeRepeat {
    const NAME: &'static str = "repeat";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::repeat);
}
struct StringPrototypeSlice;
impl Builtin for StringPrototypeSlice {
    const NAME: &'static str = "slice";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::slice);
}
struct StringPrototypeSplit;
impl Builtin for StringPrototypeSplit {
    const NAME: &'static str = "split";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::split);
}
struct StringPrototypeStartsWith;
impl Builtin for StringPrototypeStartsWith {
    const NAME: &'static str = "startsWith";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::starts_with);
}
struct StringPrototypeSubstring;
impl Builtin for StringPrototypeSubstring {
    const NAME: &'static str = "substring";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::substring);
}
struct StringPrototypeToLowerCase;
impl Builtin for StringPrototypeToLowerCase {
    const NAME: &'static str = "toLowerCase";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::to_lower_case);
}
struct StringPrototypeToString;
impl Builtin for StringPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::value_of);
}
struct StringPrototypeToUpperCase;
impl Builtin for StringPrototypeToUpperCase {
    const NAME: &'static str = "toUpperCase";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::to_upper_case);
}
struct StringPrototypeTrim;
impl Builtin for StringPrototypeTrim {
    const NAME: &'static str = "trim";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::trim);
}
struct StringPrototypeTrimEnd;
impl Builtin for StringPrototypeTrimEnd {
    const NAME: &'static str = "trimEnd";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::trim_end);
}
struct StringPrototypeTrimStart;
impl Builtin for StringPrototypeTrimStart {
    const NAME: &'static str = "trimStart";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::trim_start);
}
struct StringPrototypeValueOf;
impl Builtin for StringPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::value_of);
}

/// Resolves a code point position, returning `None` when it falls outside
/// the string.
fn position_in(s: &String, pos: i64) -> Option<usize> {
    usize::try_from(pos).ok().filter(|pos| *pos < s.length())
}

impl String {
    /// ### [22.1.3.1 String.prototype.at ( index )](https://tc39.es/ecma262/#sec-string.prototype.at)
    pub fn at(&self, index: i64) -> Value {
        let len = self.length() as i64;
        let k = if index < 0 { len.saturating_add(index) } else { index };
        if k < 0 || k >= len {
            return Value::Undefined;
        }
        self.code_point_at_index(k as usize)
            .map_or(Value::Undefined, |c| Value::String(String::from(c)))
    }

    /// ### [22.1.3.2 String.prototype.charAt ( pos )](https://tc39.es/ecma262/#sec-string.prototype.charat)
    ///
    /// The empty string when `pos` is out of range.
    pub fn char_at(&self, pos: i64) -> String {
        position_in(self, pos)
            .and_then(|pos| self.code_point_at_index(pos))
            .map_or_else(String::new, String::from)
    }

    /// ### [22.1.3.3 String.prototype.charCodeAt ( pos )](https://tc39.es/ecma262/#sec-string.prototype.charcodeat)
    ///
    /// The full code point value at `pos`, NaN when out of range.
    pub fn char_code_at(&self, pos: i64) -> Number {
        self.code_point_at(pos)
            .map_or(Number::NAN, |c| Number::from(c as f64))
    }

    /// ### [22.1.3.4 String.prototype.codePointAt ( pos )](https://tc39.es/ecma262/#sec-string.prototype.codepointat)
    pub fn code_point_at(&self, pos: i64) -> Option<u32> {
        position_in(self, pos)
            .and_then(|pos| self.code_point_at_index(pos))
            .map(u32::from)
    }

    /// ### [22.1.3.5 String.prototype.concat ( ...args )](https://tc39.es/ecma262/#sec-string.prototype.concat)
    ///
    /// Every argument goes through ToString.
    pub fn concat(&self, args: &[Value]) -> String {
        if args.is_empty() {
            return self.clone();
        }
        let mut r = std::string::String::from(self.as_str());
        for next in args {
            r.push_str(to_string(next).as_str());
        }
        String::from(r)
    }

    /// ### [22.1.3.7 String.prototype.endsWith ( searchString \[ , endPosition \] )](https://tc39.es/ecma262/#sec-string.prototype.endswith)
    pub fn ends_with(&self, search_string: &str) -> bool {
        self.as_str().ends_with(search_string)
    }

    /// ### [22.1.3.8 String.prototype.includes ( searchString \[ , position \] )](https://tc39.es/ecma262/#sec-string.prototype.includes)
    pub fn includes(&self, search_string: &str) -> bool {
        self.as_str().contains(search_string)
    }

    /// ### [22.1.3.9 String.prototype.indexOf ( searchString \[ , position \] )](https://tc39.es/ecma262/#sec-string.prototype.indexof)
    ///
    /// Searches from code point `position` onwards (clamped to the string).
    pub fn index_of(&self, search_string: &str, position: i64) -> Option<usize> {
        let start = position.clamp(0, self.length() as i64) as usize;
        let byte_start = self.byte_offset(start);
        self.as_str()[byte_start..]
            .find(search_string)
            .map(|found| self.code_point_index(byte_start + found))
    }

    /// ### [22.1.3.15 String.prototype.normalize ( \[ form \] )](https://tc39.es/ecma262/#sec-string.prototype.normalize)
    ///
    /// `None` means NFC. An unrecognised form leaves the text unchanged.
    pub fn normalize(&self, form: Option<&str>) -> String {
        let form = match form.map(NormalizeForm::from_str) {
            None => NormalizeForm::Nfc,
            Some(Ok(form)) => form,
            Some(Err(())) => {
                log::debug!("unknown normalization form {form:?}");
                return self.clone();
            }
        };
        match unicode_normalize(self.as_str(), form) {
            None => self.clone(),
            Some(ns) => String::from(ns),
        }
    }

    /// ### [22.1.3.18 String.prototype.repeat ( count )](https://tc39.es/ecma262/#sec-string.prototype.repeat)
    ///
    /// A negative count repeats zero times. Returns `None` when the result
    /// would exceed [`String::MAX_LENGTH`].
    pub fn repeat(&self, count: i64) -> Option<String> {
        if count <= 0 || self.is_empty() {
            return Some(String::new());
        }
        if count == 1 {
            return Some(self.clone());
        }
        let count = usize::try_from(count).ok()?;
        self.as_str()
            .len()
            .checked_mul(count)
            .filter(|len| *len <= String::MAX_LENGTH)?;
        Some(String::from(self.as_str().repeat(count)))
    }

    /// ### [22.1.3.22 String.prototype.slice ( start, end )](https://tc39.es/ecma262/#sec-string.prototype.slice)
    ///
    /// Negative positions count back from the end.
    pub fn slice(&self, start: i64, end: Option<i64>) -> String {
        let len = self.length();
        // 5. If intStart = -∞, let from be 0.
        // 6. Else if intStart < 0, let from be max(len + intStart, 0).
        // 7. Else, let from be min(intStart, len).
        let from = resolve_relative_index(start, len);
        // 8. If end is undefined, let intEnd be len.
        let to = end.map_or(len, |end| resolve_relative_index(end, len));
        // 12. If from ≥ to, return the empty String.
        if from >= to {
            return String::new();
        }
        // 13. Return the substring of S from from to to.
        self.code_point_substring(from, to)
    }

    /// ### [22.1.3.23 String.prototype.split ( separator, limit )](https://tc39.es/ecma262/#sec-string.prototype.split)
    ///
    /// An empty separator splits into code points; no separator yields the
    /// whole string as the only element.
    pub fn split(&self, separator: Option<&str>) -> Array {
        let Some(separator) = separator else {
            return Array::from(vec![Value::String(self.clone())]);
        };
        if separator.is_empty() {
            return self
                .as_str()
                .chars()
                .map(|c| Value::String(String::from(c)))
                .collect();
        }
        self.as_str()
            .split(separator)
            .map(|part| Value::String(String::from(part)))
            .collect()
    }

    /// ### [22.1.3.24 String.prototype.startsWith ( searchString \[ , position \] )](https://tc39.es/ecma262/#sec-string.prototype.startswith)
    pub fn starts_with(&self, search_string: &str) -> bool {
        self.as_str().starts_with(search_string)
    }

    /// ### [22.1.3.25 String.prototype.substring ( start, end )](https://tc39.es/ecma262/#sec-string.prototype.substring)
    ///
    /// Negative positions clamp to 0 and the bounds are swapped when
    /// `start > end`.
    pub fn substring(&self, start: i64, end: Option<i64>) -> String {
        let len = self.length() as i64;
        // 6. Let finalStart be the result of clamping intStart between 0 and len.
        let final_start = start.clamp(0, len) as usize;
        // 7. Let finalEnd be the result of clamping intEnd between 0 and len.
        let final_end = end.unwrap_or(len).clamp(0, len) as usize;
        // 8. Let from be min(finalStart, finalEnd).
        let from = final_start.min(final_end);
        // 9. Let to be max(finalStart, finalEnd).
        let to = final_start.max(final_end);
        // 10. Return the substring of S from from to to.
        self.code_point_substring(from, to)
    }

    /// ### [22.1.3.28 String.prototype.toLowerCase ( )](https://tc39.es/ecma262/#sec-string.prototype.tolowercase)
    pub fn to_lower_case(&self) -> String {
        String::from(self.as_str().to_lowercase())
    }

    /// ### [22.1.3.30 String.prototype.toUpperCase ( )](https://tc39.es/ecma262/#sec-string.prototype.touppercase)
    pub fn to_upper_case(&self) -> String {
        String::from(self.as_str().to_uppercase())
    }

    /// ### [22.1.3.32 String.prototype.trim ( )](https://tc39.es/ecma262/#sec-string.prototype.trim)
    pub fn trim(&self) -> String {
        self.trim_string(TrimWhere::StartAndEnd)
    }

    /// ### [22.1.3.33 String.prototype.trimEnd ( )](https://tc39.es/ecma262/#sec-string.prototype.trimend)
    pub fn trim_end(&self) -> String {
        self.trim_string(TrimWhere::End)
    }

    /// ### [22.1.3.34 String.prototype.trimStart ( )](https://tc39.es/ecma262/#sec-string.prototype.trimstart)
    pub fn trim_start(&self) -> String {
        self.trim_string(TrimWhere::Start)
    }

    /// ### [22.1.3.32.1 TrimString ( string, where )](https://tc39.es/ecma262/#sec-trimstring)
    fn trim_string(&self, trim_where: TrimWhere) -> String {
        let s_str = self.as_str();
        let t = match trim_where {
            TrimWhere::Start => s_str.trim_start_matches(is_trimmable_whitespace),
            TrimWhere::End => s_str.trim_end_matches(is_trimmable_whitespace),
            TrimWhere::StartAndEnd => s_str.trim_matches(is_trimmable_whitespace),
        };
        if t.len() == s_str.len() {
            self.clone()
        } else {
            String::from(t)
        }
    }
}

/// ### [22.1.3.35.1 ThisStringValue ( value )](https://tc39.es/ecma262/#sec-thisstringvalue)
fn this_string_value(value: &Value) -> JsResult<&String> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(JsError::type_error("Not a String")),
    }
}

fn integer_argument(argument: Value) -> i64 {
    to_integer_or_infinity(&argument).into_i64()
}

fn optional_integer_argument(argument: Value) -> Option<i64> {
    if argument.is_undefined() {
        None
    } else {
        Some(integer_argument(argument))
    }
}

impl StringPrototype {
    pub(crate) const METHODS: &'static [BuiltinMethod] = &[
        BuiltinMethod::of::<StringPrototypeAt>(),
        BuiltinMethod::of::<StringPrototypeCharAt>(),
        BuiltinMethod::of::<StringPrototypeCharCodeAt>(),
        BuiltinMethod::of::<StringPrototypeCodePointAt>(),
        BuiltinMethod::of::<StringPrototypeConcat>(),
        BuiltinMethod::of::<StringPrototypeEndsWith>(),
        BuiltinMethod::of::<StringPrototypeIncludes>(),
        BuiltinMethod::of::<StringPrototypeIndexOf>(),
        BuiltinMethod::of::<StringPrototypeNormalize>(),
        BuiltinMethod::of::<StringPrototypeRepeat>(),
        BuiltinMethod::of::<StringPrototypeSlice>(),
        BuiltinMethod::of::<StringPrototypeSplit>(),
        BuiltinMethod::of::<StringPrototypeStartsWith>(),
        BuiltinMethod::of::<StringPrototypeSubstring>(),
        BuiltinMethod::of::<StringPrototypeToLowerCase>(),
        BuiltinMethod::of::<StringPrototypeToString>(),
        BuiltinMethod::of::<StringPrototypeToUpperCase>(),
        BuiltinMethod::of::<StringPrototypeTrim>(),
        BuiltinMethod::of::<StringPrototypeTrimEnd>(),
        BuiltinMethod::of::<StringPrototypeTrimStart>(),
        BuiltinMethod::of::<StringPrototypeValueOf>(),
    ];

    fn at(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        Ok(s.at(integer_argument(arguments.get(0))))
    }

    fn char_at(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        Ok(Value::String(s.char_at(integer_argument(arguments.get(0)))))
    }

    fn char_code_at(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        Ok(Value::Number(s.char_code_at(integer_argument(arguments.get(0)))))
    }

    fn code_point_at(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        Ok(s.code_point_at(integer_argument(arguments.get(0)))
            .map_or(Value::Undefined, Value::from))
    }

    fn concat(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        Ok(Value::String(s.concat(arguments.rest(0))))
    }

    fn ends_with(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        let search_str = to_string(&arguments.get(0));
        Ok(Value::Boolean(s.ends_with(search_str.as_str())))
    }

    fn includes(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        let search_str = to_string(&arguments.get(0));
        Ok(Value::Boolean(s.includes(search_str.as_str())))
    }

    fn index_of(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        let search_str = to_string(&arguments.get(0));
        let pos = integer_argument(arguments.get(1));
        Ok(match s.index_of(search_str.as_str(), pos) {
            Some(index) => Value::from(index),
            None => Value::from(-1),
        })
    }

    fn normalize(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        // 3. If form is undefined, let f be "NFC".
        let form = arguments.get(0);
        let f = if form.is_undefined() {
            None
        } else {
            // 4. Else, let f be ? ToString(form).
            Some(to_string(&form))
        };
        Ok(Value::String(s.normalize(f.as_ref().map(String::as_str))))
    }

    fn repeat(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        // 3. Let n be ? ToIntegerOrInfinity(count).
        let n = to_integer_or_infinity(&arguments.get(0));
        // 4. If n < 0 or n = +∞, throw a RangeError exception.
        if n.is_pos_infinity() || n.into_i64() < 0 {
            return Err(JsError::range_error(format!(
                "Invalid count value: {}",
                Number::from(n.into_f64())
            )));
        }
        match s.repeat(n.into_i64()) {
            Some(repeated) => Ok(Value::String(repeated)),
            None => Err(JsError::range_error("Invalid string length")),
        }
    }

    fn slice(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        let start = integer_argument(arguments.get(0));
        let end = optional_integer_argument(arguments.get(1));
        Ok(Value::String(s.slice(start, end)))
    }

    /// `limit` goes through ToUint32 and truncates the result when given.
    fn split(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        let separator = arguments.get(0);
        let separator = if separator.is_undefined() {
            None
        } else {
            Some(to_string(&separator))
        };
        let mut parts = s.split(separator.as_ref().map(String::as_str));
        // 3. If limit is undefined, let lim be 2**32 - 1; else let lim be
        //    ℝ(? ToUint32(limit)).
        let limit = arguments.get(1);
        if !limit.is_undefined() {
            parts.elements.truncate(to_uint32(&limit) as usize);
        }
        Ok(Value::Array(parts))
    }

    fn starts_with(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        let search_str = to_string(&arguments.get(0));
        Ok(Value::Boolean(s.starts_with(search_str.as_str())))
    }

    fn substring(this_value: &Value, arguments: ArgumentsList) -> JsResult<Value> {
        let s = this_string_value(this_value)?;
        let start = integer_argument(arguments.get(0));
        let end = optional_integer_argument(arguments.get(1));
        Ok(Value::String(s.substring(start, end)))
    }

    fn to_lower_case(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::String(this_string_value(this_value)?.to_lower_case()))
    }

    fn to_upper_case(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::String(this_string_value(this_value)?.to_upper_case()))
    }

    fn trim(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::String(this_string_value(this_value)?.trim()))
    }

    fn trim_end(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::String(this_string_value(this_value)?.trim_end()))
    }

    fn trim_start(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::String(this_string_value(this_value)?.trim_start()))
    }

    /// ### [22.1.3.35 String.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-string.prototype.valueof)
    ///
    /// Also backs `toString`, which has identical steps.
    fn value_of(this_value: &Value, _: ArgumentsList) -> JsResult<Value> {
        this_string_value(this_value).map(|s| Value::String(s.clone()))
    }
}

enum TrimWhere {
    Start,
    End,
    StartAndEnd,
}

enum NormalizeForm {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl FromStr for NormalizeForm {
    type Err = ();

    fn from_str(input: &str) -> Result<NormalizeForm, Self::Err> {
        match input {
            "NFC" => Ok(NormalizeForm::Nfc),
            "NFD" => Ok(NormalizeForm::Nfd),
            "NFKC" => Ok(NormalizeForm::Nfkc),
            "NFKD" => Ok(NormalizeForm::Nfkd),
            _ => Err(()),
        }
    }
}

/// `None` when `s` is already in form `f`.
fn unicode_normalize(s: &str, f: NormalizeForm) -> Option<std::string::String> {
    match f {
        NormalizeForm::Nfc => match is_nfc_quick(s.chars()) {
            IsNormalized::Yes => None,
            _ => Some(s.nfc().collect::<std::string::String>()),
        },
        NormalizeForm::Nfd => match is_nfd_quick(s.chars()) {
            IsNormalized::Yes => None,
            _ => Some(s.nfd().collect::<std::string::String>()),
        },
        NormalizeForm::Nfkc => match is_nfkc_quick(s.chars()) {
            IsNormalized::Yes => None,
            _ => Some(s.nfkc().collect::<std::string::String>()),
        },
        NormalizeForm::Nfkd => match is_nfkd_quick(s.chars()) {
            IsNormalized::Yes => None,
            _ => Some(s.nfkd().collect::<std::string::String>()),
        },
    }
}
