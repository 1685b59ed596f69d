//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::callable::clock;
use crate::diagnostics::{CallStack, DEFAULT_MAX_CALL_DEPTH};
use crate::environment::{Environment, LocalScope, SharedEnv};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Value;

/// Builder for creating Interpreter instances.
///
/// Defaults: output to stdout, natives defined in the global scope, call
/// depth bounded by [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
    natives: bool,
    globals: Option<SharedEnv>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            natives: true,
            globals: None,
        }
    }

    /// Set the destination for `print` output.
    ///
    /// Keep a clone of the handler to read captured output afterwards.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit nested calls. `None` removes the limit.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Whether to define native functions (`clock`) in the global scope.
    #[must_use]
    pub fn with_natives(mut self, natives: bool) -> Self {
        self.natives = natives;
        self
    }

    /// Use an existing global scope instead of a fresh one.
    ///
    /// Lets a host run several programs against shared state.
    #[must_use]
    pub fn globals(mut self, globals: SharedEnv) -> Self {
        self.globals = Some(globals);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let globals = self
            .globals
            .unwrap_or_else(|| LocalScope::new(Environment::new()));

        if self.natives {
            let native = clock();
            tracing::debug!(name = "clock", "defining native function");
            globals.borrow_mut().define("clock", Value::callable(native));
        }

        Interpreter {
            environment: globals.clone(),
            globals,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack: CallStack::new(self.max_call_depth),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
