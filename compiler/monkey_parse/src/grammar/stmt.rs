//! Statement parsing.

use monkey_ir::{BlockStatement, Identifier, Statement, TokenKind, TokenSource};
use tracing::trace;

use crate::{Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    /// Parse one statement starting at the current token.
    ///
    /// Returns with the cursor on the statement's last token (its `;` when
    /// present). A failed statement yields `None`; the caller still advances
    /// past it and carries on.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        trace!(token = %self.cursor.current(), "statement");
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr> [;]`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cursor.current().literal.as_str());
        self.expect_peek(TokenKind::Assign)?;
        self.cursor.advance();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();
        Some(Statement::Let { name, value: value? })
    }

    /// `return <expr> [;]`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.cursor.advance();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();
        value.map(Statement::Return)
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();
        expr.map(Statement::Expression)
    }

    /// `{ <statement>* }`, entered on the `{`.
    ///
    /// Stops at the closing brace or at end of input, whichever comes first.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        self.cursor.advance();

        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.cursor.advance();
        }
        BlockStatement::new(statements)
    }

    fn skip_semicolon(&mut self) {
        if self.cursor.check_peek(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }
}
