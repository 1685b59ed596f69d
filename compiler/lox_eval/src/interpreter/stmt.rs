//! Statement execution.

use std::rc::Rc;

use lox_ir::ast::{Block, Class, Expression, Function, If, Print, Return, Var, While};
use lox_ir::StmtVisitor;

use super::Interpreter;
use crate::callable::LoxFunction;
use crate::errors::{classes_not_supported, ExecResult, Flow};
use crate::Value;

impl StmtVisitor for Interpreter {
    type Output = ExecResult;

    fn visit_block_stmt(&mut self, stmt: &Block) -> ExecResult {
        let scope = self.child_scope();
        self.execute_block(&stmt.statements, scope)
    }

    fn visit_class_stmt(&mut self, stmt: &Class) -> ExecResult {
        Err(classes_not_supported(&stmt.name))
    }

    fn visit_expression_stmt(&mut self, stmt: &Expression) -> ExecResult {
        self.evaluate(&stmt.expression)?;
        Ok(Flow::Normal)
    }

    fn visit_function_stmt(&mut self, stmt: &Rc<Function>) -> ExecResult {
        tracing::trace!(name = %stmt.name.lexeme, "declaring function");
        let function = LoxFunction::new(Rc::clone(stmt), self.environment.clone());
        self.environment
            .borrow_mut()
            .define(stmt.name.lexeme.as_str(), Value::callable(function));
        Ok(Flow::Normal)
    }

    fn visit_if_stmt(&mut self, stmt: &If) -> ExecResult {
        if self.evaluate(&stmt.condition)?.is_truthy() {
            self.execute(&stmt.then_branch)
        } else if let Some(else_branch) = &stmt.else_branch {
            self.execute(else_branch)
        } else {
            Ok(Flow::Normal)
        }
    }

    fn visit_print_stmt(&mut self, stmt: &Print) -> ExecResult {
        let value = self.evaluate(&stmt.expression)?;
        self.print_handler.println(&value.to_string());
        Ok(Flow::Normal)
    }

    fn visit_return_stmt(&mut self, stmt: &Return) -> ExecResult {
        let value = match &stmt.value {
            Some(expr) => self.evaluate(expr)?,
            None => Value::Nil,
        };
        Ok(Flow::Return(value))
    }

    fn visit_var_stmt(&mut self, stmt: &Var) -> ExecResult {
        let value = match &stmt.initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Value::Nil,
        };
        self.environment
            .borrow_mut()
            .define(stmt.name.lexeme.as_str(), value);
        Ok(Flow::Normal)
    }

    fn visit_while_stmt(&mut self, stmt: &While) -> ExecResult {
        while self.evaluate(&stmt.condition)?.is_truthy() {
            if let flow @ Flow::Return(_) = self.execute(&stmt.body)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }
}
