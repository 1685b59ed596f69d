use super::*;
use crate::callable::{clock, NativeFunction};
use pretty_assertions::assert_eq;

#[test]
fn truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
}

#[test]
fn display_forms() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Number(3.0).to_string(), "3");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(Value::callable(clock()).to_string(), "<native fn>");
}

#[test]
fn equality_is_by_type_then_value() {
    assert_eq!(Value::Nil, Value::Nil);
    assert_eq!(Value::string("a"), Value::string("a"));
    assert_ne!(Value::Number(1.0), Value::string("1"));
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}

#[test]
fn callables_are_equal_only_to_themselves() {
    let native = Value::callable(NativeFunction::new("id", 1, |args| Ok(args[0].clone())));
    let same = native.clone();
    let other = Value::callable(NativeFunction::new("id", 1, |args| Ok(args[0].clone())));
    assert_eq!(native, same);
    assert_ne!(native, other);
}

#[test]
fn type_names() {
    assert_eq!(Value::Nil.type_name(), "nil");
    assert_eq!(Value::Bool(true).type_name(), "boolean");
    assert_eq!(Value::Number(1.0).type_name(), "number");
    assert_eq!(Value::string("s").type_name(), "string");
    assert_eq!(Value::callable(clock()).type_name(), "function");
}

#[test]
fn from_literal() {
    assert_eq!(
        Value::from(&LiteralValue::Number(4.0)),
        Value::Number(4.0)
    );
    assert_eq!(
        Value::from(&LiteralValue::String("s".to_string())),
        Value::string("s")
    );
    assert_eq!(Value::from(&LiteralValue::Bool(false)), Value::Bool(false));
}
