//! Anonymous function closures.

use std::fmt;
use std::rc::Rc;

use lox_ir::ast::Lambda;

use super::{invoke_body, Callable};
use crate::environment::SharedEnv;
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::Value;

/// A lambda expression paired with the environment it was evaluated in.
///
/// Each evaluation of a lambda node builds a new closure, so the same node
/// run twice (say, once per loop iteration) captures two environments.
pub struct LambdaClosure {
    declaration: Rc<Lambda>,
    closure: SharedEnv,
}

impl LambdaClosure {
    pub fn new(declaration: Rc<Lambda>, closure: SharedEnv) -> Self {
        LambdaClosure {
            declaration,
            closure,
        }
    }

    /// The environment captured at creation.
    pub fn closure(&self) -> &SharedEnv {
        &self.closure
    }
}

impl Callable for LambdaClosure {
    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> EvalResult {
        invoke_body(
            interpreter,
            &self.closure,
            &self.declaration.params,
            &self.declaration.body,
            arguments,
        )
    }

    fn name(&self) -> &str {
        "<lambda>"
    }
}

impl fmt::Display for LambdaClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<lambda>")
    }
}

impl fmt::Debug for LambdaClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaClosure")
            .field("arity", &self.arity())
            .field("closure", &self.closure)
            .finish()
    }
}
