//! Lexer for Monkey using logos.
//!
//! Produces the `Token` stream the parser pulls through [`TokenSource`].
//! Integer literals are kept as text; range checking is the parser's job so
//! that an oversized literal becomes a syntax diagnostic.

use logos::Logos;
use monkey_ir::{Token, TokenKind, TokenSource};

/// Raw token from logos (before conversion to `TokenKind`).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    // === Keywords ===
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // === Operators ===
    #[token("==")]
    Eq,
    #[token("=")]
    Assign,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // === Delimiters ===
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // === Literals ===
    #[regex(r"[0-9]+")]
    Int,

    #[regex(r#""[^"]*""#)]
    String,

    // No closing quote: runs to end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

impl RawToken {
    fn kind(self) -> TokenKind {
        match self {
            RawToken::Function => TokenKind::Function,
            RawToken::Let => TokenKind::Let,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::Return => TokenKind::Return,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Assign => TokenKind::Assign,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Asterisk => TokenKind::Asterisk,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Colon => TokenKind::Colon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Int => TokenKind::Int,
            RawToken::String | RawToken::UnterminatedString => TokenKind::String,
            RawToken::Ident => TokenKind::Ident,
        }
    }

    /// Literal text carried by the token; strings lose their quotes.
    fn literal(self, slice: &str) -> &str {
        match self {
            RawToken::String => &slice[1..slice.len() - 1],
            RawToken::UnterminatedString => &slice[1..],
            _ => slice,
        }
    }
}

/// Pull-based lexer over a source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
        }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            return Token::eof();
        };
        let slice = self.inner.slice();
        match result {
            Ok(raw) => Token::new(raw.kind(), raw.literal(slice)),
            Err(()) => Token::new(TokenKind::Illegal, slice),
        }
    }
}

/// Lex a whole source string. The result ends with exactly one `Eof` token.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
