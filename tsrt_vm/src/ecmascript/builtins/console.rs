// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `console` namespace: a logging sink and a label-keyed stopwatch.
//!
//! Lines are assembled here and handed to the [`HostHooks`]; where they end
//! up is the host's business.

use std::time::Instant;

use ahash::AHashMap;

use crate::ecmascript::{
    abstract_operations::type_conversion::to_string,
    execution::{HostHooks, JsError, JsResult, Options},
    types::Value,
};

const DEFAULT_LABEL: &str = "default";

pub struct Console<'h> {
    options: Options,
    host_hooks: &'h dyn HostHooks,
    timers: AHashMap<std::string::String, Instant>,
}

impl std::fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("options", &self.options)
            .field("host_hooks", &self.host_hooks)
            .field("timers", &self.timers.len())
            .finish()
    }
}

impl<'h> Console<'h> {
    pub fn new(options: Options, host_hooks: &'h dyn HostHooks) -> Self {
        Self {
            options,
            host_hooks,
            timers: AHashMap::default(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Stringifies and joins the arguments of a console call into one line.
    pub fn format(&self, arguments: &[Value]) -> std::string::String {
        let mut line = std::string::String::new();
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                line.push_str(&self.options.separator);
            }
            if self.options.print_internals {
                line.push_str(&argument.string_repr());
            } else {
                line.push_str(to_string(argument).as_str());
            }
        }
        line
    }

    pub fn log(&self, arguments: &[Value]) {
        self.host_hooks.print(&self.format(arguments));
    }

    pub fn info(&self, arguments: &[Value]) {
        self.log(arguments);
    }

    pub fn debug(&self, arguments: &[Value]) {
        self.log(arguments);
    }

    pub fn warn(&self, arguments: &[Value]) {
        self.host_hooks.print_error(&self.format(arguments));
    }

    pub fn error(&self, arguments: &[Value]) {
        self.host_hooks.print_error(&self.format(arguments));
    }

    /// Starts the timer `label`, restarting it if it is already running.
    pub fn time(&mut self, label: Option<&Value>) {
        let label = timer_label(label);
        log::trace!("console.time({label})");
        self.timers.insert(label, Instant::now());
    }

    /// Stops the timer `label` and prints `label: <elapsed>ms`.
    pub fn time_end(&mut self, label: Option<&Value>) -> JsResult<()> {
        let label = timer_label(label);
        let Some(start) = self.timers.remove(&label) else {
            let message = format!("Timer '{label}' does not exist");
            self.host_hooks.print_error(&message);
            return Err(JsError::reference_error(message));
        };
        let elapsed = start.elapsed();
        log::trace!("console.timeEnd({label}) after {elapsed:?}");
        self.host_hooks.print(&format!(
            "{label}: {:.3}ms",
            elapsed.as_secs_f64() * 1000.0
        ));
        Ok(())
    }
}

fn timer_label(label: Option<&Value>) -> std::string::String {
    match label {
        None | Some(Value::Undefined) => DEFAULT_LABEL.to_owned(),
        Some(label) => to_string(label).as_str().to_owned(),
    }
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;
    use std::cell::RefCell;

    use super::*;
    use crate::ecmascript::execution::ExceptionType;

    #[derive(Debug, Default)]
    struct RecordingHostHooks {
        out: RefCell<Vec<std::string::String>>,
        err: RefCell<Vec<std::string::String>>,
    }

    impl HostHooks for RecordingHostHooks {
        fn print(&self, line: &str) {
            self.out.borrow_mut().push(line.to_owned());
        }

        fn print_error(&self, line: &str) {
            self.err.borrow_mut().push(line.to_owned());
        }
    }

    #[test]
    fn log_joins_stringified_arguments() {
        let hooks = RecordingHostHooks::default();
        let console = Console::new(Options::default(), &hooks);
        console.log(&[
            Value::from("a"),
            Value::from(1.5),
            Value::Null,
            Value::from(vec![Value::from(1), Value::from(2)]),
        ]);
        console.log(&[]);
        assert_eq!(*hooks.out.borrow(), vec!["a 1.5 null 1,2", ""]);
    }

    #[test]
    fn separator_and_internals() {
        let hooks = RecordingHostHooks::default();
        let options = Options {
            separator: Cow::Borrowed(", "),
            print_internals: true,
        };
        let console = Console::new(options, &hooks);
        console.error(&[Value::from("a"), Value::from(1)]);
        assert!(hooks.out.borrow().is_empty());
        assert_eq!(hooks.err.borrow().len(), 1);
        assert!(hooks.err.borrow()[0].contains(", "));
    }

    #[test]
    fn timers() {
        let hooks = RecordingHostHooks::default();
        let mut console = Console::new(Options::default(), &hooks);
        console.time(None);
        console.time(Some(&Value::from("load")));
        console.time_end(Some(&Value::from("load"))).unwrap();
        console.time_end(None).unwrap();
        let out = hooks.out.borrow();
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("load: ") && out[0].ends_with("ms"));
        assert!(out[1].starts_with("default: "));
    }

    #[test]
    fn time_end_unknown_label() {
        let hooks = RecordingHostHooks::default();
        let mut console = Console::new(Options::default(), &hooks);
        let error = console.time_end(Some(&Value::from(7))).unwrap_err();
        assert_eq!(error.kind(), ExceptionType::ReferenceError);
        assert_eq!(error.message(), "Timer '7' does not exist");
        assert_eq!(*hooks.err.borrow(), vec!["Timer '7' does not exist"]);
        // A finished timer cannot be ended twice.
        console.time(Some(&Value::from(7)));
        console.time_end(Some(&Value::from(7))).unwrap();
        assert!(console.time_end(Some(&Value::from(7))).is_err());
    }
}
