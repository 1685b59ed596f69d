//! Lox IR - tokens and syntax trees for the Lox interpreter.
//!
//! This crate contains:
//! - `Token`, `TokenKind` and `LiteralValue` as produced by the scanner
//! - The two closed node families, `Expr` and `Stmt`
//! - `ExprVisitor` / `StmtVisitor`, the double-dispatch protocol every
//!   operation over the tree implements
//! - `AstPrinter`, which renders any tree as a parenthesized S-expression
//!
//! Scanning and parsing live outside this crate; hosts hand it finished trees.

pub mod ast;
mod printer;
mod token;
pub mod visitor;

pub use ast::{Expr, Stmt};
pub use printer::{AstPrinter, Node};
pub use token::{LiteralValue, Token, TokenKind};
pub use visitor::{ExprVisitor, StmtVisitor};
