// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-facing pieces of the runtime: options, host hooks and the error type
//! used at the dynamic boundary.
//!
//! The value core itself never fails; coercion failure is signalled with NaN.
//! A [`JsError`] is only produced when generated code asks the runtime to do
//! something that has no meaning at all, such as calling a method that does
//! not exist on the receiver, or to build a string too long to hold.

use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Options {
    /// Separator placed between the stringified arguments of a console call.
    pub separator: Cow<'static, str>,
    /// Print values with their internal representation instead of their
    /// ToString result.
    pub print_internals: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: Cow::Borrowed(" "),
            print_internals: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    RangeError,
    ReferenceError,
    TypeError,
}

impl ExceptionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ExceptionType::RangeError => "RangeError",
            ExceptionType::ReferenceError => "ReferenceError",
            ExceptionType::TypeError => "TypeError",
        }
    }
}

pub type JsResult<T> = std::result::Result<T, JsError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsError {
    kind: ExceptionType,
    message: Cow<'static, str>,
}

impl JsError {
    pub fn new(kind: ExceptionType, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn type_error(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ExceptionType::TypeError, message)
    }

    pub(crate) fn range_error(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ExceptionType::RangeError, message)
    }

    pub(crate) fn reference_error(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ExceptionType::ReferenceError, message)
    }

    pub fn kind(&self) -> ExceptionType {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for JsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for JsError {}

/// Output channel of the runtime.
///
/// Everything the console prints has already been converted with ToString
/// and joined into a single line; the hooks only decide where the line goes.
pub trait HostHooks: std::fmt::Debug {
    fn print(&self, line: &str);

    fn print_error(&self, line: &str) {
        self.print(line);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_display() {
        let error = JsError::type_error("x.foo is not a function");
        assert_eq!(error.kind(), ExceptionType::TypeError);
        assert_eq!(error.to_string(), "TypeError: x.foo is not a function");
    }

    #[test]
    fn default_options() {
        let options = Options::default();
        assert_eq!(options.separator, " ");
        assert!(!options.print_internals);
    }
}
