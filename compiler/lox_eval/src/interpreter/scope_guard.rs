//! RAII environment switching for block execution.
//!
//! [`ScopedInterpreter`] installs a new current environment and puts the
//! previous one back when dropped, so an early `?` return or a `return`
//! flow cannot leave the interpreter pointing into a finished scope.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::SharedEnv;

/// Guard that restores the previous environment on drop.
///
/// Derefs to the interpreter, so code inside the scope runs through it.
pub(super) struct ScopedInterpreter<'a> {
    interpreter: &'a mut Interpreter,
    previous: Option<SharedEnv>,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.interpreter.environment = previous;
        }
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Make `environment` current until the returned guard is dropped.
    pub(super) fn enter_scope(&mut self, environment: SharedEnv) -> ScopedInterpreter<'_> {
        tracing::trace!(depth = environment.borrow().depth(), "entering scope");
        let previous = std::mem::replace(&mut self.environment, environment);
        ScopedInterpreter {
            interpreter: self,
            previous: Some(previous),
        }
    }
}
