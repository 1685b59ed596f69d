//! Lox Eval - tree-walking evaluator for the Lox interpreter.
//!
//! # Architecture
//!
//! - `Interpreter`: implements both visitors from `lox_ir`; expressions
//!   evaluate to a `Value`, statements execute to a `Flow`
//! - `Environment`: one scope of bindings chained to its enclosing scope,
//!   shared through `LocalScope` handles so closures can keep it alive
//! - `Callable`: the call contract shared by `LambdaClosure`,
//!   `LoxFunction` and `NativeFunction`
//! - `CallStack`: bounds recursion and records backtraces for errors that
//!   escape a call
//! - `PrintHandler`: where `print` output goes
//!
//! Runtime failures are `EvalError`s. A `return` is never an error: it
//! travels as `Flow::Return` until the enclosing call boundary.

pub mod callable;
mod diagnostics;
mod environment;
pub mod errors;
pub mod interpreter;
mod print_handler;
mod value;

use std::sync::Once;

pub use callable::{clock, Callable, LambdaClosure, LoxFunction, NativeFn, NativeFunction};
pub use diagnostics::{CallFrame, CallStack, DEFAULT_MAX_CALL_DEPTH};
pub use environment::{Environment, LocalScope, SharedEnv};
pub use errors::{
    BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult, ExecResult, Flow,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use value::Value;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=lox_eval=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
