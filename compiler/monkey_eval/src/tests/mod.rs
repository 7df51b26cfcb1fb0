//! Evaluator tests.
//!
//! - `eval`: values, control flow, functions and closures
//! - `errors`: runtime error messages and propagation
//! - `builtins`: the native library
//! - `limits`: call-depth limit and deep recursion

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod builtins;

use monkey_parse::parse;

use crate::{EvalConfig, Environment, Evaluator, Object};

/// Parse `source`, failing the test on any diagnostic.
fn program(source: &str) -> monkey_ir::Program {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "unexpected diagnostics for {source:?}: {:?}",
        output.errors
    );
    output.program
}

/// Evaluate `source` in a fresh root scope, returning the result and
/// everything `puts` wrote.
fn eval_with(source: &str, config: EvalConfig) -> (Option<Object>, String) {
    let program = program(source);
    let mut evaluator = Evaluator::with_output(Vec::new()).with_config(config);
    let result = evaluator.eval(&program, &Environment::new_root());
    let output = String::from_utf8(evaluator.into_output()).unwrap();
    (result, output)
}

/// Evaluate `source`; the program must produce a value.
fn eval(source: &str) -> Object {
    eval_with(source, EvalConfig::default())
        .0
        .unwrap_or_else(|| panic!("no value for {source:?}"))
}

/// Evaluate `source`; the result must be an error. Returns its message.
fn eval_error(source: &str) -> String {
    match eval(source) {
        Object::Error(error) => error.to_string(),
        other => panic!("expected error for {source:?}, got {other:?}"),
    }
}
