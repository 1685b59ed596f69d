//! Expression evaluation.

use std::rc::Rc;

use lox_ir::ast::{
    Assign, Binary, Call, Get, Grouping, Lambda, Literal, Logical, Set, This, Unary, Variable,
};
use lox_ir::{ExprVisitor, Token, TokenKind};

use super::Interpreter;
use crate::callable::LambdaClosure;
use crate::errors::{
    invalid_operator, not_callable, operand_must_be_number, operands_must_be_numbers,
    operands_must_be_numbers_or_strings, properties_not_supported, wrong_arg_count, EvalResult,
};
use crate::Value;

impl ExprVisitor for Interpreter {
    type Output = EvalResult;

    fn visit_assign_expr(&mut self, expr: &Assign) -> EvalResult {
        let value = self.evaluate(&expr.value)?;
        self.environment
            .borrow_mut()
            .assign(&expr.name, value.clone())?;
        Ok(value)
    }

    fn visit_binary_expr(&mut self, expr: &Binary) -> EvalResult {
        let left = self.evaluate(&expr.left)?;
        let right = self.evaluate(&expr.right)?;
        binary_op(&expr.operator, left, right)
    }

    fn visit_call_expr(&mut self, expr: &Call) -> EvalResult {
        let callee = self.evaluate(&expr.callee)?;
        let arguments = expr
            .arguments
            .iter()
            .map(|argument| self.evaluate(argument))
            .collect::<Result<Vec<_>, _>>()?;

        let function = match callee {
            Value::Callable(function) => function,
            other => return Err(not_callable(other.type_name(), &expr.paren)),
        };
        if arguments.len() != function.arity() {
            return Err(wrong_arg_count(
                function.arity(),
                arguments.len(),
                &expr.paren,
            ));
        }
        self.call_value(&function, arguments, expr.paren.line)
    }

    fn visit_get_expr(&mut self, expr: &Get) -> EvalResult {
        Err(properties_not_supported(&expr.name))
    }

    fn visit_grouping_expr(&mut self, expr: &Grouping) -> EvalResult {
        self.evaluate(&expr.expression)
    }

    fn visit_literal_expr(&mut self, expr: &Literal) -> EvalResult {
        Ok(expr.value.as_ref().map_or(Value::Nil, Value::from))
    }

    fn visit_logical_expr(&mut self, expr: &Logical) -> EvalResult {
        let left = self.evaluate(&expr.left)?;
        let short_circuits = match expr.operator.kind {
            TokenKind::Or => left.is_truthy(),
            TokenKind::And => !left.is_truthy(),
            _ => return Err(invalid_operator(&expr.operator)),
        };
        if short_circuits {
            Ok(left)
        } else {
            self.evaluate(&expr.right)
        }
    }

    fn visit_set_expr(&mut self, expr: &Set) -> EvalResult {
        Err(properties_not_supported(&expr.name))
    }

    fn visit_this_expr(&mut self, expr: &This) -> EvalResult {
        Err(properties_not_supported(&expr.keyword))
    }

    fn visit_unary_expr(&mut self, expr: &Unary) -> EvalResult {
        let right = self.evaluate(&expr.right)?;
        match expr.operator.kind {
            TokenKind::Minus => right
                .as_number()
                .map(|n| Value::Number(-n))
                .ok_or_else(|| operand_must_be_number(&expr.operator)),
            TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
            _ => Err(invalid_operator(&expr.operator)),
        }
    }

    fn visit_variable_expr(&mut self, expr: &Variable) -> EvalResult {
        self.environment.borrow().get(&expr.name)
    }

    fn visit_lambda_expr(&mut self, expr: &Rc<Lambda>) -> EvalResult {
        tracing::trace!(arity = expr.params.len(), "creating lambda closure");
        let closure = LambdaClosure::new(Rc::clone(expr), self.environment.clone());
        Ok(Value::Callable(Rc::new(closure)))
    }
}

/// Apply a binary operator to evaluated operands.
fn binary_op(operator: &Token, left: Value, right: Value) -> EvalResult {
    match operator.kind {
        TokenKind::EqualEqual => return Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => return Ok(Value::Bool(left != right)),
        TokenKind::Plus => {
            return match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::string(format!("{a}{b}"))),
                _ => Err(operands_must_be_numbers_or_strings(operator)),
            };
        }
        _ => {}
    }

    let (Value::Number(a), Value::Number(b)) = (&left, &right) else {
        return match operator.kind {
            TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::Less
            | TokenKind::LessEqual => Err(operands_must_be_numbers(operator)),
            _ => Err(invalid_operator(operator)),
        };
    };
    let (a, b) = (*a, *b);
    match operator.kind {
        TokenKind::Minus => Ok(Value::Number(a - b)),
        TokenKind::Star => Ok(Value::Number(a * b)),
        TokenKind::Slash => Ok(Value::Number(a / b)),
        TokenKind::Greater => Ok(Value::Bool(a > b)),
        TokenKind::GreaterEqual => Ok(Value::Bool(a >= b)),
        TokenKind::Less => Ok(Value::Bool(a < b)),
        TokenKind::LessEqual => Ok(Value::Bool(a <= b)),
        _ => Err(invalid_operator(operator)),
    }
}
