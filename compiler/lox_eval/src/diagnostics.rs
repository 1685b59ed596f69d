//! Call-frame tracking.
//!
//! Every callable invocation pushes a [`CallFrame`] onto the interpreter's
//! [`CallStack`] and pops it on return. The stack bounds recursion depth and
//! is snapshotted into an [`EvalBacktrace`] when an error escapes a call.

use crate::errors::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// Default limit on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// A single live call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Callee name (`<lambda>` for anonymous functions).
    pub name: String,
    /// Line of the call site.
    pub line: u32,
}

/// Live call stack for the interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `None` means unbounded.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, refusing once the depth limit is reached.
    ///
    /// On overflow the frame is not pushed.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max, frame.line));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Snapshot the stack, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        EvalBacktrace {
            frames: self
                .frames
                .iter()
                .rev()
                .map(|frame| BacktraceFrame {
                    name: frame.name.clone(),
                    line: frame.line,
                })
                .collect(),
        }
    }

    /// Attach a snapshot to `err` unless it already carries one.
    ///
    /// The first frame to see an error records the deepest chain; outer
    /// frames leave it alone.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if err.trace.is_some() || self.frames.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        CallStack::new(Some(DEFAULT_MAX_CALL_DEPTH))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;

    fn frame(name: &str, line: u32) -> CallFrame {
        CallFrame {
            name: name.to_string(),
            line,
        }
    }

    #[test]
    fn push_and_pop_track_depth() {
        let mut stack = CallStack::new(None);
        stack.push(frame("a", 1)).unwrap();
        stack.push(frame("b", 2)).unwrap();
        assert_eq!(stack.depth(), 2);
        stack.pop();
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn push_past_limit_fails_without_pushing() {
        let mut stack = CallStack::new(Some(1));
        stack.push(frame("a", 1)).unwrap();
        let err = stack.push(frame("b", 7)).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 1 });
        assert_eq!(err.line, Some(7));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn capture_is_innermost_first() {
        let mut stack = CallStack::new(None);
        stack.push(frame("outer", 10)).unwrap();
        stack.push(frame("inner", 4)).unwrap();
        let names: Vec<_> = stack
            .capture()
            .frames
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["inner", "outer"]);
    }

    #[test]
    fn attach_keeps_existing_backtrace() {
        let mut stack = CallStack::new(None);
        stack.push(frame("inner", 1)).unwrap();
        let err = stack.attach_backtrace(EvalError::new(EvalErrorKind::OperandMustBeNumber));

        stack.pop();
        stack.push(frame("other", 2)).unwrap();
        let err = stack.attach_backtrace(err);
        assert_eq!(err.trace.unwrap().frames[0].name, "inner");
    }

    #[test]
    fn default_is_bounded() {
        assert_eq!(CallStack::default().max_depth(), Some(DEFAULT_MAX_CALL_DEPTH));
    }
}
