//! Expression parsing.
//!
//! `parse_expression` is the precedence-climbing core. The productions it
//! dispatches to live in two submodules:
//!
//! - [`primary`]: prefix handlers (literals, unary operators, grouping, `if`, `fn`, arrays)
//! - [`postfix`]: infix handlers (binary operators, calls, indexing)

mod postfix;
mod primary;

use monkey_ir::{Expression, TokenKind, TokenSource};
use monkey_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    /// Register the standard Monkey handlers.
    pub(crate) fn register_grammar(&mut self) {
        self.register_prefix(TokenKind::Ident, Self::parse_identifier);
        self.register_prefix(TokenKind::Int, Self::parse_integer_literal);
        self.register_prefix(TokenKind::String, Self::parse_string_literal);
        self.register_prefix(TokenKind::True, Self::parse_boolean);
        self.register_prefix(TokenKind::False, Self::parse_boolean);
        self.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        self.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        self.register_prefix(TokenKind::LParen, Self::parse_grouped_expression);
        self.register_prefix(TokenKind::If, Self::parse_if_expression);
        self.register_prefix(TokenKind::Function, Self::parse_function_literal);
        self.register_prefix(TokenKind::LBracket, Self::parse_array_literal);

        let binary = [
            (TokenKind::Eq, Precedence::Equals),
            (TokenKind::NotEq, Precedence::Equals),
            (TokenKind::Lt, Precedence::LessGreater),
            (TokenKind::Gt, Precedence::LessGreater),
            (TokenKind::Plus, Precedence::Sum),
            (TokenKind::Minus, Precedence::Sum),
            (TokenKind::Asterisk, Precedence::Product),
            (TokenKind::Slash, Precedence::Product),
        ];
        for (kind, precedence) in binary {
            self.register_infix(kind, precedence, Self::parse_infix_expression);
        }
        self.register_infix(TokenKind::LParen, Precedence::Call, Self::parse_call_expression);
        self.register_infix(TokenKind::LBracket, Precedence::Call, Self::parse_index_expression);
    }

    /// Parse an expression whose operators all bind tighter than `precedence`.
    ///
    /// Entered with the cursor on the expression's first token; returns with
    /// it on the expression's last token.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Expression> {
        let kind = self.cursor.current_kind();
        trace!(%kind, %precedence, "expression");

        let Some(prefix) = self.prefix_fns[kind.index()] else {
            self.error(ParseError::NoPrefixParseFn(kind));
            return None;
        };
        let mut left = prefix(self)?;

        while !self.cursor.check_peek(TokenKind::Semicolon) {
            let Some((next, infix)) = self.infix_fns[self.cursor.peek_kind().index()] else {
                break;
            };
            if next <= precedence {
                break;
            }
            self.cursor.advance();
            left = infix(self, left)?;
        }
        Some(left)
    }

    /// Binding power of the current token when used as an infix operator.
    fn current_precedence(&self) -> Precedence {
        self.infix_fns[self.cursor.current_kind().index()]
            .map_or(Precedence::Lowest, |(precedence, _)| precedence)
    }

    /// Comma-separated expressions up to `end`, entered on the opening token.
    ///
    /// Every element is attempted even after one fails, so that a bad element
    /// reports its own diagnostic without derailing the rest of the list.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        if self.cursor.check_peek(end) {
            self.cursor.advance();
            return Some(Vec::new());
        }

        self.cursor.advance();
        let mut items = vec![self.parse_expression(Precedence::Lowest)];
        while self.cursor.check_peek(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            items.push(self.parse_expression(Precedence::Lowest));
        }
        self.expect_peek(end)?;

        items.into_iter().collect()
    }
}
