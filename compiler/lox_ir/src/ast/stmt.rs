//! Statement nodes.

use std::rc::Rc;

use super::Expr;
use crate::Token;

/// Statement node. Executed for its effect.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Block(Block),
    Class(Class),
    Expression(Expression),
    Function(Rc<Function>),
    If(If),
    Print(Print),
    Return(Return),
    Var(Var),
    While(While),
}

/// `{ statements... }`
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// `class name { methods... }`
#[derive(Clone, Debug, PartialEq)]
pub struct Class {
    pub name: Token,
    pub methods: Vec<Rc<Function>>,
}

/// An expression evaluated for its side effects.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub expression: Expr,
}

/// Named function declaration; also the shape of a class method.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct If {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Print {
    pub expression: Expr,
}

/// `return value?;`
#[derive(Clone, Debug, PartialEq)]
pub struct Return {
    /// The `return` keyword; locates errors.
    pub keyword: Token,
    pub value: Option<Expr>,
}

/// `var name (= initializer)?;`
#[derive(Clone, Debug, PartialEq)]
pub struct Var {
    pub name: Token,
    pub initializer: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct While {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

impl Stmt {
    pub fn block(statements: Vec<Stmt>) -> Self {
        Stmt::Block(Block { statements })
    }

    pub fn class(name: Token, methods: Vec<Function>) -> Self {
        Stmt::Class(Class {
            name,
            methods: methods.into_iter().map(Rc::new).collect(),
        })
    }

    pub fn expression(expression: Expr) -> Self {
        Stmt::Expression(Expression { expression })
    }

    pub fn function(name: Token, params: Vec<Token>, body: Vec<Stmt>) -> Self {
        Stmt::Function(Rc::new(Function { name, params, body }))
    }

    pub fn if_then(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If(If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        })
    }

    pub fn print(expression: Expr) -> Self {
        Stmt::Print(Print { expression })
    }

    pub fn return_value(keyword: Token, value: Option<Expr>) -> Self {
        Stmt::Return(Return { keyword, value })
    }

    pub fn var(name: Token, initializer: Option<Expr>) -> Self {
        Stmt::Var(Var { name, initializer })
    }

    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Stmt::While(While {
            condition,
            body: Box::new(body),
        })
    }
}
