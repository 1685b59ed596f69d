//! Visitor dispatch over the syntax tree.
//!
//! Every operation over the tree (printing, evaluation, resolution, analysis)
//! implements [`ExprVisitor`] and/or [`StmtVisitor`]. Nodes route themselves to
//! the matching handler through [`Expr::accept`] and [`Stmt::accept`].
//!
//! # Design
//!
//! The traits have one required method per variant and no default bodies.
//! A visitor that misses a variant does not compile. New operations are added
//! without touching the node definitions; a new variant touches every visitor.
//!
//! # Example
//!
//! ```text
//! struct CountVariables(usize);
//!
//! impl ExprVisitor for CountVariables {
//!     type Output = ();
//!     fn visit_variable_expr(&mut self, _expr: &Variable) {
//!         self.0 += 1;
//!     }
//!     // ... one handler for each other variant ...
//! }
//! ```

use std::rc::Rc;

use crate::ast::{
    Assign, Binary, Block, Call, Class, Expr, Expression, Function, Get, Grouping, If, Lambda,
    Literal, Logical, Print, Return, Set, Stmt, This, Unary, Var, Variable, While,
};

/// Operation over expression nodes.
pub trait ExprVisitor {
    type Output;

    fn visit_assign_expr(&mut self, expr: &Assign) -> Self::Output;
    fn visit_binary_expr(&mut self, expr: &Binary) -> Self::Output;
    fn visit_call_expr(&mut self, expr: &Call) -> Self::Output;
    fn visit_get_expr(&mut self, expr: &Get) -> Self::Output;
    fn visit_grouping_expr(&mut self, expr: &Grouping) -> Self::Output;
    fn visit_literal_expr(&mut self, expr: &Literal) -> Self::Output;
    fn visit_logical_expr(&mut self, expr: &Logical) -> Self::Output;
    fn visit_set_expr(&mut self, expr: &Set) -> Self::Output;
    fn visit_this_expr(&mut self, expr: &This) -> Self::Output;
    fn visit_unary_expr(&mut self, expr: &Unary) -> Self::Output;
    fn visit_variable_expr(&mut self, expr: &Variable) -> Self::Output;
    /// Receives the shared handle so a closure can keep the declaration.
    fn visit_lambda_expr(&mut self, expr: &Rc<Lambda>) -> Self::Output;
}

/// Operation over statement nodes.
pub trait StmtVisitor {
    type Output;

    fn visit_block_stmt(&mut self, stmt: &Block) -> Self::Output;
    fn visit_class_stmt(&mut self, stmt: &Class) -> Self::Output;
    fn visit_expression_stmt(&mut self, stmt: &Expression) -> Self::Output;
    /// Receives the shared handle so a function value can keep the declaration.
    fn visit_function_stmt(&mut self, stmt: &Rc<Function>) -> Self::Output;
    fn visit_if_stmt(&mut self, stmt: &If) -> Self::Output;
    fn visit_print_stmt(&mut self, stmt: &Print) -> Self::Output;
    fn visit_return_stmt(&mut self, stmt: &Return) -> Self::Output;
    fn visit_var_stmt(&mut self, stmt: &Var) -> Self::Output;
    fn visit_while_stmt(&mut self, stmt: &While) -> Self::Output;
}

impl Expr {
    /// Dispatch to the handler of `visitor` matching this node's variant.
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Assign(expr) => visitor.visit_assign_expr(expr),
            Expr::Binary(expr) => visitor.visit_binary_expr(expr),
            Expr::Call(expr) => visitor.visit_call_expr(expr),
            Expr::Get(expr) => visitor.visit_get_expr(expr),
            Expr::Grouping(expr) => visitor.visit_grouping_expr(expr),
            Expr::Literal(expr) => visitor.visit_literal_expr(expr),
            Expr::Logical(expr) => visitor.visit_logical_expr(expr),
            Expr::Set(expr) => visitor.visit_set_expr(expr),
            Expr::This(expr) => visitor.visit_this_expr(expr),
            Expr::Unary(expr) => visitor.visit_unary_expr(expr),
            Expr::Variable(expr) => visitor.visit_variable_expr(expr),
            Expr::Lambda(expr) => visitor.visit_lambda_expr(expr),
        }
    }
}

impl Stmt {
    /// Dispatch to the handler of `visitor` matching this node's variant.
    pub fn accept<V: StmtVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Block(stmt) => visitor.visit_block_stmt(stmt),
            Stmt::Class(stmt) => visitor.visit_class_stmt(stmt),
            Stmt::Expression(stmt) => visitor.visit_expression_stmt(stmt),
            Stmt::Function(stmt) => visitor.visit_function_stmt(stmt),
            Stmt::If(stmt) => visitor.visit_if_stmt(stmt),
            Stmt::Print(stmt) => visitor.visit_print_stmt(stmt),
            Stmt::Return(stmt) => visitor.visit_return_stmt(stmt),
            Stmt::Var(stmt) => visitor.visit_var_stmt(stmt),
            Stmt::While(stmt) => visitor.visit_while_stmt(stmt),
        }
    }
}
