#![allow(clippy::unwrap_used, clippy::expect_used)]

//! REPL sessions driven through in-memory buffers.

use monkey_eval::EvalConfig;
use monkeyc::{Repl, PROMPT};
use pretty_assertions::assert_eq;

fn session(input: &str) -> String {
    let mut output = Vec::new();
    Repl::new(EvalConfig::default())
        .run(input.as_bytes(), &mut output)
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_empty_input_prints_one_prompt() {
    assert_eq!(session(""), PROMPT);
}

#[test]
fn test_bindings_persist_between_lines() {
    let output = session("let a = 5;\nlet double = fn(x) { x * 2 };\ndouble(a)\n");
    assert_eq!(output, ">> >> >> 10\n>> ");
}

#[test]
fn test_parse_errors_skip_the_line() {
    let output = session("let b = ;\nlet x 5;\n1 + 1\n");
    assert_eq!(
        output,
        ">> \tno prefix parse function for token `;` found\n\
         >> \tMismatch token[expected='=', got='INT']\n\
         >> 2\n>> "
    );
}

#[test]
fn test_runtime_errors_and_null_are_printed() {
    let output = session("missing\nif (false) { 1 }\n\"a\" - \"b\"\n");
    assert_eq!(
        output,
        ">> Error: identifier not found: missing\n\
         >> null\n\
         >> Error: unknown operator: STRING - STRING\n>> "
    );
}

#[test]
fn test_puts_writes_before_the_result() {
    let output = session("puts(\"hi\", [1, 2])\n");
    assert_eq!(output, ">> hi\n[1, 2]\nnull\n>> ");
}

#[test]
fn test_top_level_return_is_unwrapped() {
    assert_eq!(session("return 7; 8\n"), ">> 7\n>> ");
}

#[test]
fn test_session_survives_repeated_runs() {
    let mut repl = Repl::default();
    let mut output = Vec::new();
    repl.run("let counter = 41;\n".as_bytes(), &mut output).unwrap();

    let mut output = Vec::new();
    repl.run("counter + 1\n".as_bytes(), &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), ">> 42\n>> ");
    assert!(repl.env().get("counter").is_some());
}

#[test]
fn test_call_depth_limit_applies() {
    let mut output = Vec::new();
    Repl::new(EvalConfig::default().with_max_call_depth(Some(3)))
        .run(
            "let f = fn(n) { if (n == 0) { 0 } else { f(n - 1) } };\nf(2)\nf(5)\n".as_bytes(),
            &mut output,
        )
        .unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        ">> >> 0\n>> Error: maximum call depth exceeded (limit: 3)\n>> "
    );
}
