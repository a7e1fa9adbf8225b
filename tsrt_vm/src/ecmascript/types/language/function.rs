// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::rc::Rc;

use crate::ecmascript::builtins::ArgumentsList;

use super::{String, Value};

/// The single capability of a function value: being called with a list of
/// arguments and producing one value. Whatever state an implementation
/// captures is opaque to the runtime.
pub trait Callable {
    fn call(&self, arguments: ArgumentsList) -> Value;
}

impl<F> Callable for F
where
    F: Fn(ArgumentsList) -> Value,
{
    fn call(&self, arguments: ArgumentsList) -> Value {
        self(arguments)
    }
}

/// ### [10.3 Built-in Function Objects](https://tc39.es/ecma262/#sec-built-in-function-objects)
///
/// Cloning shares the underlying callable; equality is identity.
#[derive(Clone)]
pub struct Function {
    name: String,
    behaviour: Rc<dyn Callable>,
}

impl Function {
    pub fn new<F>(name: &str, behaviour: F) -> Self
    where
        F: Fn(ArgumentsList) -> Value + 'static,
    {
        Self::from_callable(name, behaviour)
    }

    pub fn from_callable(name: &str, behaviour: impl Callable + 'static) -> Self {
        Self {
            name: String::from(name),
            behaviour: Rc::new(behaviour),
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn call(&self, arguments: &[Value]) -> Value {
        self.behaviour.call(ArgumentsList::from(arguments))
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.behaviour, &other.behaviour)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn call_and_identity() {
        let double = Function::new("double", |arguments| {
            Value::from(arguments.get(0).to_number().into_f64() * 2.0)
        });
        assert_eq!(double.call(&[Value::from(21)]), Value::from(42));
        assert!(double.call(&[]).is_nan());
        assert_eq!(double, double.clone());
        let other = Function::new("double", |_| Value::Undefined);
        assert_ne!(double, other);
    }
}
