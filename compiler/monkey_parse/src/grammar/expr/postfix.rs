//! Infix handlers: binary operators, calls and indexing.

use monkey_ir::{Expression, InfixOp, TokenKind, TokenSource};

use crate::{Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    /// `<left> <op> <right>`, entered on the operator.
    ///
    /// The right side is parsed with the operator's own precedence as the
    /// ceiling, so a following operator of equal precedence is left for the
    /// enclosing loop and chains associate to the left.
    pub fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let op = InfixOp::from_token(self.cursor.current_kind())?;
        let precedence = self.current_precedence();
        self.cursor.advance();

        let right = self.parse_expression(precedence)?;
        Some(Expression::infix(op, left, right))
    }

    /// `<callee> ( [<expr> {, <expr>}] )`, entered on the `(`.
    pub fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expression::call(function, arguments))
    }

    /// `<left> [ <expr> ]`, entered on the `[`.
    pub fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.cursor.advance();

        let index = self.parse_expression(Precedence::Lowest);
        self.expect_peek(TokenKind::RBracket)?;
        Some(Expression::index(left, index?))
    }
}
