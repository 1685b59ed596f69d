//! Fully parenthesized rendering of syntax trees.
//!
//! Every compound node prints as a prefix S-expression, `(head child...)`,
//! so nesting can be recovered from the text alone. Used for debugging and
//! tracing; performs no I/O.
//!
//! ```text
//! -(3)            =>  (- (group 3))
//! var x = nil;    =>  (var x = nil)
//! f(1, 2)         =>  (call f 1 2)
//! ```

use std::rc::Rc;

use lox_stack::ensure_sufficient_stack;

use crate::ast::{
    Assign, Binary, Block, Call, Class, Expr, Expression, Function, Get, Grouping, If, Lambda,
    Literal, Logical, Print, Return, Set, Stmt, This, Unary, Var, Variable, While,
};
use crate::visitor::{ExprVisitor, StmtVisitor};
use crate::Token;

/// Either kind of tree the printer accepts.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Node::Expr(expr)
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        Node::Stmt(stmt)
    }
}

/// One piece of a parenthesized form.
enum Part<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    /// Rendered as its lexeme, never its literal value.
    Token(&'a Token),
    Text(String),
}

/// Renders expressions and statements as S-expressions.
#[derive(Copy, Clone, Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    /// Render `node` and everything below it.
    pub fn print<'a>(&mut self, node: impl Into<Node<'a>>) -> String {
        match node.into() {
            Node::Expr(expr) => self.expr(expr),
            Node::Stmt(stmt) => self.stmt(stmt),
        }
    }

    fn expr(&mut self, expr: &Expr) -> String {
        ensure_sufficient_stack(|| expr.accept(self))
    }

    fn stmt(&mut self, stmt: &Stmt) -> String {
        ensure_sufficient_stack(|| stmt.accept(self))
    }

    fn parenthesize(&mut self, head: &str, parts: &[Part<'_>]) -> String {
        let mut out = String::new();
        out.push('(');
        out.push_str(head);
        for part in parts {
            out.push(' ');
            match part {
                Part::Expr(expr) => out.push_str(&self.expr(expr)),
                Part::Stmt(stmt) => out.push_str(&self.stmt(stmt)),
                Part::Token(token) => out.push_str(&token.lexeme),
                Part::Text(text) => out.push_str(text),
            }
        }
        out.push(')');
        out
    }

    /// `(kind name params... (body stmts...))`
    fn function(
        &mut self,
        kind: &str,
        name: Option<&Token>,
        params: &[Token],
        body: &[Stmt],
    ) -> String {
        let mut parts: Vec<Part<'_>> = Vec::with_capacity(params.len() + 2);
        if let Some(name) = name {
            parts.push(Part::Token(name));
        }
        parts.extend(params.iter().map(Part::Token));
        let body_parts: Vec<Part<'_>> = body.iter().map(Part::Stmt).collect();
        parts.push(Part::Text(self.parenthesize("body", &body_parts)));
        self.parenthesize(kind, &parts)
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_assign_expr(&mut self, expr: &Assign) -> String {
        self.parenthesize(
            "=",
            &[Part::Text(expr.name.lexeme.clone()), Part::Expr(&expr.value)],
        )
    }

    fn visit_binary_expr(&mut self, expr: &Binary) -> String {
        self.parenthesize(
            &expr.operator.lexeme,
            &[Part::Expr(&expr.left), Part::Expr(&expr.right)],
        )
    }

    fn visit_call_expr(&mut self, expr: &Call) -> String {
        let mut parts = Vec::with_capacity(expr.arguments.len() + 1);
        parts.push(Part::Expr(&expr.callee));
        parts.extend(expr.arguments.iter().map(Part::Expr));
        self.parenthesize("call", &parts)
    }

    fn visit_get_expr(&mut self, expr: &Get) -> String {
        self.parenthesize(".", &[Part::Expr(&expr.object), Part::Token(&expr.name)])
    }

    fn visit_grouping_expr(&mut self, expr: &Grouping) -> String {
        self.parenthesize("group", &[Part::Expr(&expr.expression)])
    }

    fn visit_literal_expr(&mut self, expr: &Literal) -> String {
        match &expr.value {
            Some(value) => value.to_string(),
            None => "nil".to_string(),
        }
    }

    fn visit_logical_expr(&mut self, expr: &Logical) -> String {
        self.parenthesize(
            &expr.operator.lexeme,
            &[Part::Expr(&expr.left), Part::Expr(&expr.right)],
        )
    }

    fn visit_set_expr(&mut self, expr: &Set) -> String {
        let target = self.parenthesize(".", &[Part::Expr(&expr.object), Part::Token(&expr.name)]);
        self.parenthesize("=", &[Part::Text(target), Part::Expr(&expr.value)])
    }

    fn visit_this_expr(&mut self, expr: &This) -> String {
        expr.keyword.lexeme.clone()
    }

    fn visit_unary_expr(&mut self, expr: &Unary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[Part::Expr(&expr.right)])
    }

    fn visit_variable_expr(&mut self, expr: &Variable) -> String {
        expr.name.lexeme.clone()
    }

    fn visit_lambda_expr(&mut self, expr: &Rc<Lambda>) -> String {
        self.function("lambda", None, &expr.params, &expr.body)
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_block_stmt(&mut self, stmt: &Block) -> String {
        let parts: Vec<Part<'_>> = stmt.statements.iter().map(Part::Stmt).collect();
        self.parenthesize("block", &parts)
    }

    fn visit_class_stmt(&mut self, stmt: &Class) -> String {
        let mut parts = Vec::with_capacity(stmt.methods.len() + 1);
        parts.push(Part::Token(&stmt.name));
        for method in &stmt.methods {
            parts.push(Part::Text(self.function(
                "method",
                Some(&method.name),
                &method.params,
                &method.body,
            )));
        }
        self.parenthesize("class", &parts)
    }

    fn visit_expression_stmt(&mut self, stmt: &Expression) -> String {
        self.parenthesize(";", &[Part::Expr(&stmt.expression)])
    }

    fn visit_function_stmt(&mut self, stmt: &Rc<Function>) -> String {
        self.function("fun", Some(&stmt.name), &stmt.params, &stmt.body)
    }

    fn visit_if_stmt(&mut self, stmt: &If) -> String {
        match &stmt.else_branch {
            None => self.parenthesize(
                "if",
                &[Part::Expr(&stmt.condition), Part::Stmt(&stmt.then_branch)],
            ),
            Some(else_branch) => self.parenthesize(
                "if-else",
                &[
                    Part::Expr(&stmt.condition),
                    Part::Stmt(&stmt.then_branch),
                    Part::Stmt(else_branch),
                ],
            ),
        }
    }

    fn visit_print_stmt(&mut self, stmt: &Print) -> String {
        self.parenthesize("print", &[Part::Expr(&stmt.expression)])
    }

    fn visit_return_stmt(&mut self, stmt: &Return) -> String {
        let value = match &stmt.value {
            Some(value) => Part::Expr(value),
            None => Part::Text("nil".to_string()),
        };
        self.parenthesize("return", &[value])
    }

    fn visit_var_stmt(&mut self, stmt: &Var) -> String {
        match &stmt.initializer {
            None => self.parenthesize("var", &[Part::Token(&stmt.name)]),
            Some(initializer) => self.parenthesize(
                "var",
                &[
                    Part::Token(&stmt.name),
                    Part::Text("=".to_string()),
                    Part::Expr(initializer),
                ],
            ),
        }
    }

    fn visit_while_stmt(&mut self, stmt: &While) -> String {
        self.parenthesize(
            "while",
            &[Part::Expr(&stmt.condition), Part::Stmt(&stmt.body)],
        )
    }
}
