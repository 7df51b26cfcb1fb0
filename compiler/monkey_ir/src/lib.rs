//! Monkey IR - Tokens and AST Types
//!
//! This crate contains the data structures shared by the Monkey front-end
//! and the evaluator:
//! - `Token` / `TokenKind` and the pull-based `TokenSource` contract
//! - AST nodes (`Program`, `Statement`, `Expression`, `BlockStatement`)
//! - Prefix and infix operators
//!
//! # Design Notes
//!
//! - The AST is a tree: every node owns its children. Function literals sit
//!   behind an `Rc` so a runtime closure can hold its body without copying it.
//! - Every node implements `Display` with the canonical parenthesised form,
//!   which is what parser tests compare against.

pub mod ast;
mod token;

pub use ast::{
    BlockStatement, Expression, FunctionLiteral, Identifier, InfixOp, PrefixOp, Program,
    Statement,
};
pub use token::{Token, TokenBuffer, TokenKind, TokenSource};
