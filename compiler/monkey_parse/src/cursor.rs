//! Token cursor over a pull-based token source.
//!
//! Holds exactly one token of lookahead beyond the current token.

use monkey_ir::{Token, TokenKind, TokenSource};
use tracing::trace;

pub struct Cursor<S> {
    source: S,
    current: Token,
    peek: Token,
}

impl<S: TokenSource> Cursor<S> {
    /// Create a cursor positioned on the first token of `source`.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();
        Cursor {
            source,
            current,
            peek,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    #[inline]
    pub fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Shift the lookahead into the current slot and pull a new lookahead.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(current = %self.current, peek = %self.peek, "advance");
    }
}
