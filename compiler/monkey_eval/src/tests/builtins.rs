use pretty_assertions::assert_eq;

use super::{eval, eval_error, eval_with};
use crate::{Builtins, EvalConfig, Object, NULL};

fn int(value: i64) -> Object {
    Object::Integer(value)
}

#[test]
fn test_len() {
    assert_eq!(eval(r#"len("")"#), int(0));
    assert_eq!(eval(r#"len("four")"#), int(4));
    assert_eq!(eval(r#"len("hello world")"#), int(11));
    assert_eq!(eval("len([1, 2, 3])"), int(3));
    assert_eq!(eval("len([])"), int(0));
}

#[test]
fn test_len_errors() {
    assert_eq!(
        eval_error("len(1)"),
        "argument to `len` not suported, got INTEGER"
    );
    assert_eq!(
        eval_error(r#"len("one", "two")"#),
        "wrong number of arguments. got=2, want=1"
    );
    assert_eq!(eval_error("len()"), "wrong number of arguments. got=0, want=1");
}

#[test]
fn test_array_helpers() {
    assert_eq!(eval("first([1, 2, 3])"), int(1));
    assert_eq!(eval("first([])"), NULL);
    assert_eq!(eval("last([1, 2, 3])"), int(3));
    assert_eq!(eval("last([])"), NULL);
    assert_eq!(eval("rest([1, 2, 3])"), Object::from(vec![int(2), int(3)]));
    assert_eq!(eval("rest([1])"), Object::from(Vec::new()));
    assert_eq!(eval("rest([])"), NULL);
    assert_eq!(eval("push([], 1)"), Object::from(vec![int(1)]));
    assert_eq!(eval("let a = [1]; push(a, 2); a"), Object::from(vec![int(1)]));
}

#[test]
fn test_array_helper_errors() {
    assert_eq!(eval_error("first(1)"), "argument to `first` must be ARRAY, got INTEGER");
    assert_eq!(eval_error(r#"last("s")"#), "argument to `last` must be ARRAY, got STRING");
    assert_eq!(eval_error("rest(true)"), "argument to `rest` must be ARRAY, got BOOLEAN");
    assert_eq!(eval_error("push(1, 1)"), "argument to `push` must be ARRAY, got INTEGER");
    assert_eq!(eval_error("push([])"), "wrong number of arguments. got=1, want=2");
}

#[test]
fn test_puts_writes_inspect_lines() {
    let (result, output) = eval_with(
        r#"puts("hello", 1, [1, 2], fn(x) { x }, len)"#,
        EvalConfig::default(),
    );
    assert_eq!(result, Some(NULL));
    assert_eq!(output, "hello\n1\n[1, 2]\nfn(x) {\nx\n}\nbuiltin function\n");
}

#[test]
fn test_bindings_shadow_builtins() {
    assert_eq!(eval("let len = fn(x) { 42 }; len(\"abc\")"), int(42));
}

#[test]
fn test_builtins_are_values() {
    assert_eq!(eval("let l = len; l([1, 2])"), int(2));
}

#[test]
fn test_registry_names() {
    assert_eq!(
        Builtins::new().names(),
        ["first", "last", "len", "push", "puts", "rest"]
    );
    assert!(Builtins::new().get("missing").is_none());
}
