//! Syntax tree node families.
//!
//! Two closed sets: [`Expr`] produces a value, [`Stmt`] produces an effect.
//! Every node owns its children. Trees are built once by the parser (or a
//! host) and never mutated afterwards; execution state lives elsewhere.

mod expr;
mod stmt;

pub use expr::{
    Assign, Binary, Call, Expr, Get, Grouping, Lambda, Literal, Logical, Set, This, Unary,
    Variable,
};
pub use stmt::{Block, Class, Expression, Function, If, Print, Return, Stmt, Var, While};
