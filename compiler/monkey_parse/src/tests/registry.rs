//! Handler registration.

use pretty_assertions::assert_eq;

use monkey_ir::{Expression, Token, TokenBuffer, TokenKind};
use monkey_lexer::Lexer;

use crate::{Parser, Precedence};

fn render(parser: &mut Parser<Lexer<'_>>) -> String {
    let program = parser.parse_program();
    assert!(!parser.has_errors(), "{:?}", parser.errors());
    program.to_string()
}

#[test]
fn test_rebinding_precedence_changes_the_tree() {
    let mut parser = Parser::new(Lexer::new("a + b > c"));
    parser.register_infix(TokenKind::Gt, Precedence::Product, Parser::parse_infix_expression);
    assert_eq!(render(&mut parser), "(a + (b > c))");
}

#[test]
fn test_custom_prefix_handler() {
    fn zero(_: &mut Parser<Lexer<'_>>) -> Option<Expression> {
        Some(Expression::Integer(0))
    }

    let mut parser = Parser::new(Lexer::new(": + 1"));
    parser.register_prefix(TokenKind::Colon, zero);
    assert_eq!(render(&mut parser), "(0 + 1)");
}

#[test]
fn test_any_token_source() {
    let tokens = vec![
        Token::new(TokenKind::Return, "return"),
        Token::new(TokenKind::Minus, "-"),
        Token::new(TokenKind::Ident, "x"),
        Token::new(TokenKind::Asterisk, "*"),
        Token::new(TokenKind::Int, "2"),
    ];
    let mut parser = Parser::new(TokenBuffer::new(tokens));
    let program = parser.parse_program();
    assert!(!parser.has_errors());
    assert_eq!(program.to_string(), "return ((-x) * 2);");
}
