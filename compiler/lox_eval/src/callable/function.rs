//! Named function declarations.

use std::fmt;
use std::rc::Rc;

use lox_ir::ast::Function;

use super::{invoke_body, Callable};
use crate::environment::SharedEnv;
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::Value;

/// A `fun` declaration paired with the environment it was declared in.
pub struct LoxFunction {
    declaration: Rc<Function>,
    closure: SharedEnv,
}

impl LoxFunction {
    pub fn new(declaration: Rc<Function>, closure: SharedEnv) -> Self {
        LoxFunction {
            declaration,
            closure,
        }
    }
}

impl Callable for LoxFunction {
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
        &self.declaration.name.lexeme
    }
}

impl fmt::Display for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.declaration.name.lexeme)
    }
}

impl fmt::Debug for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoxFunction")
            .field("name", &self.declaration.name.lexeme)
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}
