//! Functions implemented in Rust.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use super::Callable;
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::Value;

/// Signature of a native function body.
pub type NativeFn = fn(&[Value]) -> EvalResult;

/// A named Rust function exposed to Lox code.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    name: &'static str,
    arity: usize,
    function: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, arity: usize, function: NativeFn) -> Self {
        NativeFunction {
            name,
            arity,
            function,
        }
    }
}

impl Callable for NativeFunction {
    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self, _interpreter: &mut Interpreter, arguments: Vec<Value>) -> EvalResult {
        (self.function)(&arguments)
    }

    fn name(&self) -> &str {
        self.name
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<native fn>")
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// `clock()`: seconds since the Unix epoch.
pub fn clock() -> NativeFunction {
    NativeFunction::new("clock", 0, |_| {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64());
        Ok(Value::Number(seconds))
    })
}
