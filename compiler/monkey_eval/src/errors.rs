//! Runtime errors.
//!
//! An error is a value: once produced it travels unchanged to the top of the
//! evaluation and becomes the program's result. `Display` is the exact text
//! users and tests see.

use monkey_ir::{InfixOp, PrefixOp};

use crate::object::ObjectType;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    // Operators
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: ObjectType,
        op: InfixOp,
        right: ObjectType,
    },
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: ObjectType,
        op: InfixOp,
        right: ObjectType,
    },
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator { op: PrefixOp, operand: ObjectType },
    #[error("division by zero")]
    DivisionByZero,

    // Names and calls
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),
    #[error("not a function: {0}")]
    NotAFunction(ObjectType),
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount { got: usize, want: usize },
    #[error("maximum call depth exceeded (limit: {0})")]
    CallDepthExceeded(usize),

    // Indexing
    #[error("index operator not supported: {0}")]
    IndexNotSupported(ObjectType),
    #[error("Invalid index")]
    InvalidIndex,

    // Builtins
    #[error("argument to `{builtin}` not suported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: ObjectType,
    },
    #[error("argument to `{builtin}` must be ARRAY, got {got}")]
    ExpectedArray {
        builtin: &'static str,
        got: ObjectType,
    },
    #[error("could not write output: {0}")]
    Output(String),
}

impl RuntimeError {
    #[cold]
    pub fn wrong_argument_count(got: usize, want: usize) -> Self {
        RuntimeError::WrongArgumentCount { got, want }
    }
}
