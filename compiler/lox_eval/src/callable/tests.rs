#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::rc::Rc;

use super::*;
use crate::environment::LocalScope;
use crate::print_handler::silent_handler;
use lox_ir::ast::{Function, Lambda};
use lox_ir::{Expr, TokenKind};
use pretty_assertions::assert_eq;

fn interpreter() -> Interpreter {
    Interpreter::builder().print_handler(silent_handler()).build()
}

fn identity_lambda() -> Rc<Lambda> {
    Rc::new(Lambda {
        params: vec![Token::identifier("x")],
        body: vec![Stmt::return_value(
            Token::symbol(TokenKind::Return, "return"),
            Some(Expr::variable(Token::identifier("x"))),
        )],
    })
}

#[test]
fn lambda_closure_reports_arity_and_name() {
    let closure = LambdaClosure::new(identity_lambda(), LocalScope::new(Environment::new()));
    assert_eq!(closure.arity(), 1);
    assert_eq!(closure.name(), "<lambda>");
    assert_eq!(closure.to_string(), "<lambda>");
}

#[test]
fn lambda_closure_binds_arguments() {
    let mut interpreter = interpreter();
    let closure = LambdaClosure::new(identity_lambda(), interpreter.globals().clone());
    let result = closure
        .call(&mut interpreter, vec![Value::string("echo")])
        .unwrap();
    assert_eq!(result, Value::string("echo"));
}

#[test]
fn parameters_do_not_leak_into_closure_scope() {
    let mut interpreter = interpreter();
    let captured = interpreter.globals().clone();
    let closure = LambdaClosure::new(identity_lambda(), captured.clone());
    closure.call(&mut interpreter, vec![Value::Nil]).unwrap();
    assert!(!captured.borrow().contains_local("x"));
    assert!(closure.closure().ptr_eq(&captured));
}

#[test]
fn body_without_return_yields_nil() {
    let mut interpreter = interpreter();
    let lambda = Rc::new(Lambda {
        params: vec![],
        body: vec![],
    });
    let closure = LambdaClosure::new(lambda, interpreter.globals().clone());
    assert_eq!(closure.call(&mut interpreter, vec![]).unwrap(), Value::Nil);
}

#[test]
fn lox_function_display_uses_its_name() {
    let declaration = Rc::new(Function {
        name: Token::identifier("area"),
        params: vec![Token::identifier("w"), Token::identifier("h")],
        body: vec![],
    });
    let function = LoxFunction::new(declaration, LocalScope::new(Environment::new()));
    assert_eq!(function.to_string(), "<fn area>");
    assert_eq!(function.name(), "area");
    assert_eq!(function.arity(), 2);
}

#[test]
fn clock_returns_seconds() {
    let mut interpreter = interpreter();
    let native = clock();
    assert_eq!(native.arity(), 0);
    assert_eq!(native.name(), "clock");
    let Value::Number(seconds) = native.call(&mut interpreter, vec![]).unwrap() else {
        panic!("clock should return a number");
    };
    assert!(seconds > 0.0);
}
