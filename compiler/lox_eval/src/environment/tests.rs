#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn name(n: &str) -> Token {
    Token::identifier(n)
}

#[test]
fn define_then_get() {
    let mut env = Environment::new();
    env.define("x", Value::Number(42.0));
    assert_eq!(env.get(&name("x")).unwrap(), Value::Number(42.0));
}

#[test]
fn get_unbound_is_undefined_variable() {
    let env = Environment::new();
    let err = env.get(&name("nope").at_line(5)).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "nope".to_string()
        }
    );
    assert_eq!(err.line, Some(5));
}

#[test]
fn redefine_overwrites_in_same_scope() {
    let mut env = Environment::new();
    env.define("x", Value::Number(1.0));
    env.define("x", Value::string("two"));
    assert_eq!(env.lookup("x"), Some(Value::string("two")));
}

#[test]
fn child_sees_parent_bindings() {
    let parent = SharedEnv::default();
    parent.borrow_mut().define("x", Value::Number(1.0));

    let child = Environment::child_of(&parent);
    assert_eq!(child.borrow().lookup("x"), Some(Value::Number(1.0)));
    assert_eq!(child.borrow().depth(), 2);
}

#[test]
fn child_definition_shadows_parent() {
    let parent = SharedEnv::default();
    parent.borrow_mut().define("x", Value::Number(1.0));

    let child = Environment::child_of(&parent);
    child.borrow_mut().define("x", Value::Number(2.0));

    assert_eq!(child.borrow().lookup("x"), Some(Value::Number(2.0)));
    assert_eq!(parent.borrow().lookup("x"), Some(Value::Number(1.0)));
}

#[test]
fn assign_updates_nearest_enclosing_binding() {
    let parent = SharedEnv::default();
    parent.borrow_mut().define("x", Value::Number(1.0));
    let child = Environment::child_of(&parent);

    child
        .borrow_mut()
        .assign(&name("x"), Value::Number(5.0))
        .unwrap();

    assert!(!child.borrow().contains_local("x"));
    assert_eq!(parent.borrow().lookup("x"), Some(Value::Number(5.0)));
}

#[test]
fn assign_never_creates_a_binding() {
    let env = SharedEnv::default();
    let err = env
        .borrow_mut()
        .assign(&name("ghost"), Value::Nil)
        .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UndefinedVariable { .. }));
    assert!(!env.borrow().contains_local("ghost"));
}

#[test]
fn siblings_share_a_mutable_parent() {
    let parent = SharedEnv::default();
    parent.borrow_mut().define("count", Value::Number(0.0));
    let a = Environment::child_of(&parent);
    let b = Environment::child_of(&parent);

    a.borrow_mut()
        .assign(&name("count"), Value::Number(3.0))
        .unwrap();

    assert_eq!(b.borrow().lookup("count"), Some(Value::Number(3.0)));
}

#[test]
fn child_keeps_parent_alive() {
    let child = {
        let parent = SharedEnv::default();
        parent.borrow_mut().define("kept", Value::Bool(true));
        Environment::child_of(&parent)
    };
    assert_eq!(child.borrow().lookup("kept"), Some(Value::Bool(true)));
}

#[test]
fn local_scope_clone_shares_allocation() {
    let a = LocalScope::new(1);
    let b = a.clone();
    *a.borrow_mut() = 7;
    assert_eq!(*b.borrow(), 7);
    assert!(a.ptr_eq(&b));
    assert_eq!(a.handle_count(), 2);
    assert!(!a.ptr_eq(&LocalScope::new(7)));
}

#[test]
fn debug_lists_names_sorted() {
    let mut env = Environment::new();
    env.define("b", Value::Nil);
    env.define("a", Value::Nil);
    assert_eq!(
        format!("{env:?}"),
        "Environment { names: [\"a\", \"b\"], depth: 1 }"
    );
}
