//! AST types for Monkey.
//!
//! # Module Structure
//!
//! - `mod.rs`: program, statements, blocks, identifiers
//! - `expr.rs`: expression nodes and function literals
//! - `operators.rs`: prefix and infix operators

mod expr;
mod operators;

use std::fmt;

pub use expr::{Expression, FunctionLiteral};
pub use operators::{InfixOp, PrefixOp};

/// Root of a parsed program: its top-level statements in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|stmt| write!(f, "{stmt}"))
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let { name: Identifier, value: Expression },
    /// `return <value>;`
    Return(Expression),
    /// A bare expression used as a statement.
    Expression(Expression),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return(value) => write!(f, "return {value};"),
            Statement::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

/// `{ ... }`: an ordered sequence of statements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|stmt| write!(f, "{stmt}"))
    }
}

/// A name: variable reference, `let` target or function parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests;
