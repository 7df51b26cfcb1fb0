//! Diagnostics and recovery.

use pretty_assertions::assert_eq;

use monkey_ir::TokenKind;

use crate::{parse, ParseError};

fn messages(source: &str) -> Vec<String> {
    parse(source)
        .errors
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_malformed_lets_report_each_problem() {
    let output = parse("let x := 5;\nlet = 10;\nlet 838383;");
    assert_eq!(
        output.errors,
        vec![
            ParseError::UnexpectedToken {
                expected: TokenKind::Assign,
                got: TokenKind::Colon,
            },
            ParseError::NoPrefixParseFn(TokenKind::Colon),
            ParseError::NoPrefixParseFn(TokenKind::Assign),
            ParseError::UnexpectedToken {
                expected: TokenKind::Ident,
                got: TokenKind::Assign,
            },
            ParseError::NoPrefixParseFn(TokenKind::Assign),
            ParseError::UnexpectedToken {
                expected: TokenKind::Ident,
                got: TokenKind::Int,
            },
        ]
    );
    // Parsing resumed after each failure.
    assert_eq!(output.program.to_string(), "510838383");
}

#[test]
fn test_mismatch_message() {
    assert_eq!(
        messages("let 5 = 1;")[0],
        "Mismatch token[expected='IDENT', got='INT']"
    );
}

#[test]
fn test_missing_prefix_handler_message() {
    assert_eq!(
        messages("}"),
        ["no prefix parse function for token `}` found"]
    );
}

#[test]
fn test_integer_overflow() {
    let output = parse("9223372036854775808");
    assert_eq!(
        output.errors,
        [ParseError::InvalidInteger(
            "9223372036854775808".to_string()
        )]
    );
    assert!(output.program.is_empty());
}

#[test]
fn test_unclosed_group() {
    assert_eq!(
        messages("(1 + 2"),
        ["Mismatch token[expected=')', got='EOF']"]
    );
}

#[test]
fn test_if_requires_parenthesised_condition() {
    assert_eq!(
        messages("if x { 1 }")[0],
        "Mismatch token[expected='(', got='IDENT']"
    );
}

#[test]
fn test_function_parameters_must_be_identifiers() {
    assert_eq!(
        messages("fn(1) { 1 }")[0],
        "Mismatch token[expected='IDENT', got='INT']"
    );
}

#[test]
fn test_bad_list_element_is_reported_once() {
    let output = parse("[1, ), 3]");
    assert_eq!(output.errors[0], ParseError::NoPrefixParseFn(TokenKind::RParen));
    assert!(output.has_errors());
}

#[test]
fn test_illegal_token() {
    assert_eq!(
        messages("@"),
        ["no prefix parse function for token `ILLEGAL` found"]
    );
}
