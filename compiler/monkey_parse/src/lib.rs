//! Pratt parser for Monkey.
//!
//! Expression parsing is driven by two tables keyed by [`TokenKind`]: prefix
//! handlers for tokens that start an expression, and infix handlers (each
//! paired with its binding power) for tokens that continue one. Operators are
//! added by registering handlers; the climbing loop itself never changes.
//!
//! Syntax errors do not stop the parse. Each failed production records a
//! [`ParseError`] and yields nothing, so callers must check
//! [`Parser::has_errors`] before trusting the returned [`Program`].

mod cursor;
mod error;
mod grammar;
mod precedence;

pub use cursor::Cursor;
pub use error::ParseError;
pub use precedence::Precedence;

use monkey_ir::{Expression, Program, Token, TokenKind, TokenSource};
use monkey_lexer::Lexer;
use tracing::debug;

/// Handler for a token that starts an expression. Entered with the cursor on
/// that token; returns with the cursor on the last token it consumed.
pub type PrefixParseFn<S> = fn(&mut Parser<S>) -> Option<Expression>;

/// Handler for a token that continues an expression, given what is already
/// parsed to its left. Same cursor protocol as [`PrefixParseFn`].
pub type InfixParseFn<S> = fn(&mut Parser<S>, Expression) -> Option<Expression>;

/// Parser state.
pub struct Parser<S> {
    cursor: Cursor<S>,
    errors: Vec<ParseError>,
    prefix_fns: [Option<PrefixParseFn<S>>; TokenKind::COUNT],
    infix_fns: [Option<(Precedence, InfixParseFn<S>)>; TokenKind::COUNT],
}

impl<S: TokenSource> Parser<S> {
    /// Create a parser over `source` with the standard Monkey grammar registered.
    pub fn new(source: S) -> Self {
        let mut parser = Parser {
            cursor: Cursor::new(source),
            errors: Vec::new(),
            prefix_fns: [None; TokenKind::COUNT],
            infix_fns: [None; TokenKind::COUNT],
        };
        parser.register_grammar();
        parser
    }

    /// Install (or replace) the handler used when `kind` starts an expression.
    pub fn register_prefix(&mut self, kind: TokenKind, handler: PrefixParseFn<S>) {
        self.prefix_fns[kind.index()] = Some(handler);
    }

    /// Install (or replace) the handler used when `kind` follows an expression.
    pub fn register_infix(
        &mut self,
        kind: TokenKind,
        precedence: Precedence,
        handler: InfixParseFn<S>,
    ) {
        self.infix_fns[kind.index()] = Some((precedence, handler));
    }

    /// Parse statements until end of input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.cursor.advance();
        }
        Program::new(statements)
    }

    /// Diagnostics recorded so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// The token the parser is positioned on.
    pub fn current(&self) -> &Token {
        self.cursor.current()
    }

    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Advance onto the next token if it is `kind`; otherwise record a
    /// mismatch and leave the cursor where it is.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.cursor.check_peek(kind) {
            self.cursor.advance();
            Some(())
        } else {
            self.error(ParseError::UnexpectedToken {
                expected: kind,
                got: self.cursor.peek_kind(),
            });
            None
        }
    }

    fn error(&mut self, error: ParseError) {
        debug!(%error, "syntax error");
        self.errors.push(error);
    }
}

/// Result of parsing a source string.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex and parse `source` in one step.
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    ParseOutput {
        program,
        errors: parser.into_errors(),
    }
}

#[cfg(test)]
mod tests;
