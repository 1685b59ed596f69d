//! Tree-walking interpreter.
//!
//! The interpreter is a visitor over both node families: expressions
//! evaluate to a [`Value`], statements execute to a [`Flow`]. Scoping is a
//! chain of [`Environment`]s; `environment` always points at the innermost
//! scope of the code currently running.
//!
//! # Non-local return
//!
//! `return` produces `Flow::Return(value)`. Blocks and loops stop at the
//! first statement that does not finish `Normal` and hand the flow to their
//! caller. Only a call boundary ([`crate::callable`]) turns the flow back
//! into a value, so a `return` never escapes the function that ran it.

mod builder;
mod expr;
mod scope_guard;
mod stmt;

use std::rc::Rc;

use lox_ir::{Expr, Stmt};
use lox_stack::ensure_sufficient_stack;

use crate::diagnostics::{CallFrame, CallStack};
use crate::environment::{Environment, SharedEnv};
use crate::errors::{EvalError, EvalResult, ExecResult, Flow};
use crate::print_handler::SharedPrintHandler;
use crate::{Callable, Value};

pub use builder::InterpreterBuilder;

/// Interpreter state.
pub struct Interpreter {
    /// Outermost scope; natives and top-level declarations live here.
    globals: SharedEnv,
    /// Innermost scope of the running code.
    environment: SharedEnv,
    print_handler: SharedPrintHandler,
    call_stack: CallStack,
}

impl Interpreter {
    /// An interpreter with default configuration: stdout printing, natives
    /// defined, default call depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Run a program top to bottom.
    ///
    /// A `return` at top level ends the program early.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for statement in statements {
            if let Flow::Return(_) = self.execute(statement)? {
                tracing::debug!("top-level return ended the program");
                break;
            }
        }
        Ok(())
    }

    /// Evaluate one expression in the current environment.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| expr.accept(self))
    }

    /// Execute one statement in the current environment.
    pub fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        ensure_sufficient_stack(|| stmt.accept(self))
    }

    /// Run `statements` in order with `environment` as the current scope.
    ///
    /// Stops at the first statement that returns. The previous scope is
    /// restored on every exit path, including errors.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: SharedEnv) -> ExecResult {
        let mut scoped = self.enter_scope(environment);
        for statement in statements {
            match scoped.execute(statement)? {
                Flow::Normal => {}
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    /// Invoke `function`, tracking the call frame.
    ///
    /// `arguments.len()` must already match the arity.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = function.name(), arity = function.arity(), line = line)
    )]
    pub fn call_value(
        &mut self,
        function: &Rc<dyn Callable>,
        arguments: Vec<Value>,
        line: u32,
    ) -> EvalResult {
        debug_assert_eq!(arguments.len(), function.arity());
        let frame = CallFrame {
            name: function.name().to_string(),
            line,
        };
        if let Err(err) = self.call_stack.push(frame) {
            return Err(self.call_stack.attach_backtrace(err));
        }
        let result = function
            .call(self, arguments)
            .map_err(|err| self.call_stack.attach_backtrace(err));
        self.call_stack.pop();
        result
    }

    /// Define `name` in the global scope.
    pub fn define_global(&mut self, name: impl Into<String>, value: Value) {
        self.globals.borrow_mut().define(name, value);
    }

    pub fn globals(&self) -> &SharedEnv {
        &self.globals
    }

    /// The innermost scope of the running code.
    pub fn environment(&self) -> &SharedEnv {
        &self.environment
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// A fresh scope nested in the current one.
    fn child_scope(&self) -> SharedEnv {
        Environment::child_of(&self.environment)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
