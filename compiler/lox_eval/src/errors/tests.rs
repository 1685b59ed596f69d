use super::*;
use lox_ir::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn factories_take_line_from_token() {
    let name = Token::identifier("missing").at_line(12);
    let err = undefined_variable(&name);
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "missing".to_string()
        }
    );
    assert_eq!(err.line, Some(12));
    assert_eq!(err.to_string(), "Undefined variable 'missing'.");
}

#[test]
fn arity_message() {
    let paren = Token::symbol(TokenKind::RightParen, ")").at_line(4);
    let err = wrong_arg_count(2, 3, &paren);
    assert_eq!(err.to_string(), "Expected 2 arguments but got 3.");
    assert_eq!(err.report(), "Expected 2 arguments but got 3.\n[line 4]");
}

#[test]
fn report_includes_backtrace() {
    let err = recursion_limit_exceeded(8, 3).with_backtrace(EvalBacktrace {
        frames: vec![
            BacktraceFrame {
                name: "inner".to_string(),
                line: 3,
            },
            BacktraceFrame {
                name: "outer".to_string(),
                line: 9,
            },
        ],
    });
    assert_eq!(
        err.report(),
        "Stack overflow: call depth limit of 8 exceeded.\n[line 3]\n  \
         in inner called at [line 3]\n  in outer called at [line 9]"
    );
}

#[test]
fn report_without_line_is_just_the_message() {
    let err = EvalError::new(EvalErrorKind::OperandsMustBeNumbers);
    assert_eq!(err.report(), "Operands must be numbers.");
}

#[test]
fn equality_ignores_backtrace() {
    let plain = recursion_limit_exceeded(1, 1);
    let traced = recursion_limit_exceeded(1, 1).with_backtrace(EvalBacktrace::default());
    assert_eq!(plain, traced);
}

#[test]
fn unsupported_construct_messages() {
    let token = Token::symbol(TokenKind::This, "this");
    assert_eq!(
        classes_not_supported(&token).to_string(),
        "classes are not supported by this interpreter."
    );
    assert_eq!(
        properties_not_supported(&token).to_string(),
        "property accesses are not supported by this interpreter."
    );
}
