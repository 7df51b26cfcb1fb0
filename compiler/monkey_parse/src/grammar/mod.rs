//! Grammar Modules
//!
//! Each module extends `Parser` with methods for one family of productions:
//!
//! - [`stmt`]: `let`, `return`, expression statements and blocks
//! - [`expr`]: the precedence-climbing loop and every registered handler

mod expr;
mod stmt;
