//! Callable values: lambdas, named functions and natives.
//!
//! The caller owns argument checking. By the time [`Callable::call`] runs,
//! the interpreter has already confirmed `arguments.len() == arity()`.

mod function;
mod lambda;
mod native;

use std::fmt;

use lox_ir::{Stmt, Token};

use crate::environment::{Environment, SharedEnv};
use crate::errors::{EvalResult, Flow};
use crate::interpreter::Interpreter;
use crate::Value;

pub use function::LoxFunction;
pub use lambda::LambdaClosure;
pub use native::{clock, NativeFn, NativeFunction};

/// Something that can be invoked with a fixed number of arguments.
///
/// `Display` is the value's text form (`<lambda>`, `<fn name>`, ...).
pub trait Callable: fmt::Debug + fmt::Display {
    /// Number of arguments the callable expects.
    fn arity(&self) -> usize;

    /// Run the callable. `arguments.len()` equals [`Callable::arity`].
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> EvalResult;

    /// Name recorded in call-stack frames.
    fn name(&self) -> &str;
}

/// Shared activation for user-defined callables.
///
/// Binds each parameter in a fresh child of `closure`, runs `body` there and
/// catches a `return`. A body that finishes without returning yields `nil`.
/// The child environment outlives the call only if a closure created inside
/// the body captured it.
pub(crate) fn invoke_body(
    interpreter: &mut Interpreter,
    closure: &SharedEnv,
    params: &[Token],
    body: &[Stmt],
    arguments: Vec<Value>,
) -> EvalResult {
    let environment = Environment::child_of(closure);
    {
        let mut scope = environment.borrow_mut();
        for (param, argument) in params.iter().zip(arguments) {
            scope.define(param.lexeme.as_str(), argument);
        }
    }

    match interpreter.execute_block(body, environment)? {
        Flow::Return(value) => Ok(value),
        Flow::Normal => Ok(Value::Nil),
    }
}

#[cfg(test)]
mod tests;
