//! Prefix handlers.

use std::rc::Rc;

use monkey_ir::{
    Expression, FunctionLiteral, Identifier, PrefixOp, TokenKind, TokenSource,
};

use crate::{ParseError, Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    pub fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::identifier(self.cursor.current().literal.as_str()))
    }

    /// Decimal integer literal; values outside `i64` are a diagnostic.
    pub fn parse_integer_literal(&mut self) -> Option<Expression> {
        let literal = &self.cursor.current().literal;
        match literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(value)),
            Err(_) => {
                let literal = literal.clone();
                self.error(ParseError::InvalidInteger(literal));
                None
            }
        }
    }

    pub fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::String(self.cursor.current().literal.clone()))
    }

    pub fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.cursor.check(TokenKind::True)))
    }

    /// `!x` and `-x`. The operand binds at `Prefix`, so `-a * b` is `((-a) * b)`.
    pub fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let op = PrefixOp::from_token(self.cursor.current_kind())?;
        self.cursor.advance();

        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::prefix(op, right))
    }

    /// `( <expr> )`. Grouping leaves no node of its own.
    pub fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.cursor.advance();

        let expr = self.parse_expression(Precedence::Lowest);
        self.expect_peek(TokenKind::RParen)?;
        expr
    }

    /// `if ( <expr> ) <block> [else <block>]`
    pub fn parse_if_expression(&mut self) -> Option<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        self.cursor.advance();

        let condition = self.parse_expression(Precedence::Lowest);
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.cursor.check_peek(TokenKind::Else) {
            self.cursor.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If {
            condition: Box::new(condition?),
            consequence,
            alternative,
        })
    }

    /// `fn ( [<ident> {, <ident>}] ) <block>`
    pub fn parse_function_literal(&mut self) -> Option<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();

        Some(Expression::Function(Rc::new(FunctionLiteral::new(
            parameters, body,
        ))))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.cursor.check_peek(TokenKind::RParen) {
            self.cursor.advance();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.cursor.current().literal.as_str()));
        while self.cursor.check_peek(TokenKind::Comma) {
            self.cursor.advance();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.cursor.current().literal.as_str()));
        }
        self.expect_peek(TokenKind::RParen)?;

        Some(parameters)
    }

    /// `[ [<expr> {, <expr>}] ]`
    pub fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expression::Array(elements))
    }
}
