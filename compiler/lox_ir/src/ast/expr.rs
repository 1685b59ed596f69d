//! Expression nodes.
//!
//! Each variant wraps its own struct so visitor handlers receive exactly the
//! fields of the node they handle.

use std::rc::Rc;

use super::Stmt;
use crate::{LiteralValue, Token};

/// Expression node. Evaluates to a value.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Assign(Assign),
    Binary(Binary),
    Call(Call),
    Get(Get),
    Grouping(Grouping),
    Literal(Literal),
    Logical(Logical),
    Set(Set),
    This(This),
    Unary(Unary),
    Variable(Variable),
    Lambda(Rc<Lambda>),
}

/// `name = value`
#[derive(Clone, Debug, PartialEq)]
pub struct Assign {
    pub name: Token,
    pub value: Box<Expr>,
}

/// `left operator right` for arithmetic, comparison and equality.
#[derive(Clone, Debug, PartialEq)]
pub struct Binary {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// `callee(arguments...)`
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub callee: Box<Expr>,
    /// Closing parenthesis; locates call errors.
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

/// `object.name`
#[derive(Clone, Debug, PartialEq)]
pub struct Get {
    pub object: Box<Expr>,
    pub name: Token,
}

/// `( expression )`
#[derive(Clone, Debug, PartialEq)]
pub struct Grouping {
    pub expression: Box<Expr>,
}

/// A literal; `None` is `nil`.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    pub value: Option<LiteralValue>,
}

/// `left and right`, `left or right`
#[derive(Clone, Debug, PartialEq)]
pub struct Logical {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// `object.name = value`
#[derive(Clone, Debug, PartialEq)]
pub struct Set {
    pub object: Box<Expr>,
    pub name: Token,
    pub value: Box<Expr>,
}

/// `this`
#[derive(Clone, Debug, PartialEq)]
pub struct This {
    pub keyword: Token,
}

/// `operator right`
#[derive(Clone, Debug, PartialEq)]
pub struct Unary {
    pub operator: Token,
    pub right: Box<Expr>,
}

/// A variable reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Token,
}

/// Anonymous function: `fun (params) { body }`.
///
/// Held behind `Rc` in [`Expr::Lambda`] so every closure created from this
/// node shares the declaration instead of copying the body.
#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl Expr {
    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign(Assign {
            name,
            value: Box::new(value),
        })
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn call(callee: Expr, paren: Token, arguments: Vec<Expr>) -> Self {
        Expr::Call(Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    pub fn get(object: Expr, name: Token) -> Self {
        Expr::Get(Get {
            object: Box::new(object),
            name,
        })
    }

    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping(Grouping {
            expression: Box::new(expression),
        })
    }

    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Expr::Literal(Literal {
            value: Some(value.into()),
        })
    }

    pub fn nil() -> Self {
        Expr::Literal(Literal { value: None })
    }

    pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Logical(Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn set(object: Expr, name: Token, value: Expr) -> Self {
        Expr::Set(Set {
            object: Box::new(object),
            name,
            value: Box::new(value),
        })
    }

    pub fn this(keyword: Token) -> Self {
        Expr::This(This { keyword })
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary(Unary {
            operator,
            right: Box::new(right),
        })
    }

    pub fn variable(name: Token) -> Self {
        Expr::Variable(Variable { name })
    }

    pub fn lambda(params: Vec<Token>, body: Vec<Stmt>) -> Self {
        Expr::Lambda(Rc::new(Lambda { params, body }))
    }
}
