//! Runtime errors and statement control flow.
//!
//! `EvalErrorKind` gives every runtime failure a typed category; the factory
//! functions below are the public way to build one, so the source line is
//! always taken from the offending token.
//!
//! A `return` is not an error. Statements report it through [`Flow`], which
//! every statement-executing step checks and passes upward until a call
//! boundary turns it back into a value.

use std::fmt;

use lox_ir::Token;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Result of executing a statement.
pub type ExecResult = Result<Flow, EvalError>;

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    /// Fell through; continue with the next statement.
    Normal,
    /// A `return` ran; unwind to the nearest call boundary with this value.
    Return(Value),
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },

    #[error("Operand must be a number.")]
    OperandMustBeNumber,

    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,

    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings,

    #[error("Unknown operator '{lexeme}'.")]
    InvalidOperator { lexeme: String },

    #[error("Can only call functions and classes, not {type_name}.")]
    NotCallable { type_name: &'static str },

    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch { expected: usize, got: usize },

    #[error("Stack overflow: call depth limit of {depth} exceeded.")]
    StackOverflow { depth: usize },

    #[error("{feature} are not supported by this interpreter.")]
    NotImplemented { feature: &'static str },
}

/// One frame of a captured backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub name: String,
    /// Line of the call site.
    pub line: u32,
}

/// Call chain at the point an error left a callable, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    pub frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            writeln!(f, "  in {} called at [line {}]", frame.name, frame.line)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source line of the token that caused the error.
    pub line: Option<u32>,
    /// Call chain, filled in when the error escapes a call.
    pub trace: Option<EvalBacktrace>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            line: None,
            trace: None,
        }
    }

    fn at(kind: EvalErrorKind, token: &Token) -> Self {
        EvalError::new(kind).with_line(token.line)
    }

    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.trace = Some(backtrace);
        self
    }

    /// Message plus location, in the form shown to users:
    ///
    /// ```text
    /// Operands must be numbers.
    /// [line 3]
    /// ```
    pub fn report(&self) -> String {
        let mut out = self.kind.to_string();
        if let Some(line) = self.line {
            out.push_str(&format!("\n[line {line}]"));
        }
        if let Some(backtrace) = self.trace.as_ref().filter(|b| !b.is_empty()) {
            out.push('\n');
            out.push_str(backtrace.to_string().trim_end());
        }
        out
    }
}

impl PartialEq for EvalError {
    /// Errors compare by category and location; backtraces are diagnostic only.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.line == other.line
    }
}

// Variable errors

pub fn undefined_variable(name: &Token) -> EvalError {
    EvalError::at(
        EvalErrorKind::UndefinedVariable {
            name: name.lexeme.clone(),
        },
        name,
    )
}

// Operator errors

pub fn operand_must_be_number(operator: &Token) -> EvalError {
    EvalError::at(EvalErrorKind::OperandMustBeNumber, operator)
}

pub fn operands_must_be_numbers(operator: &Token) -> EvalError {
    EvalError::at(EvalErrorKind::OperandsMustBeNumbers, operator)
}

pub fn operands_must_be_numbers_or_strings(operator: &Token) -> EvalError {
    EvalError::at(EvalErrorKind::OperandsMustBeNumbersOrStrings, operator)
}

pub fn invalid_operator(operator: &Token) -> EvalError {
    EvalError::at(
        EvalErrorKind::InvalidOperator {
            lexeme: operator.lexeme.clone(),
        },
        operator,
    )
}

// Call errors

pub fn not_callable(type_name: &'static str, paren: &Token) -> EvalError {
    EvalError::at(EvalErrorKind::NotCallable { type_name }, paren)
}

pub fn wrong_arg_count(expected: usize, got: usize, paren: &Token) -> EvalError {
    EvalError::at(EvalErrorKind::ArityMismatch { expected, got }, paren)
}

pub fn recursion_limit_exceeded(depth: usize, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { depth }).with_line(line)
}

// Unsupported constructs

pub fn classes_not_supported(token: &Token) -> EvalError {
    EvalError::at(EvalErrorKind::NotImplemented { feature: "classes" }, token)
}

pub fn properties_not_supported(token: &Token) -> EvalError {
    EvalError::at(
        EvalErrorKind::NotImplemented {
            feature: "property accesses",
        },
        token,
    )
}

#[cfg(test)]
mod tests;
