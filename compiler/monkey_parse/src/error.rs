//! Syntax diagnostics.
//!
//! Diagnostics are collected, never thrown: a failed production records one
//! of these and yields no node, and parsing resumes at the next statement.

use monkey_ir::TokenKind;

/// A syntax diagnostic. `Display` renders the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required token was not the next one in the stream.
    #[error("Mismatch token[expected='{expected}', got='{got}']")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },

    /// The token cannot start an expression.
    #[error("no prefix parse function for token `{0}` found")]
    NoPrefixParseFn(TokenKind),

    /// Integer literal outside the 64-bit signed range.
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}
